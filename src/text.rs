//! Case-insensitive comparison and hashing of optional text fields.
//!
//! Folding maps each character to its uppercase form when that form is a
//! single character, and leaves it unchanged otherwise. Equality and hashing
//! share the same folding so they always agree.

use std::hash::{Hash, Hasher};

fn fold_char(character: char) -> char {
    let mut upper = character.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => character,
    }
}

fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().map(fold_char)
}

/// Compares two optional fields ignoring case. Absent only equals absent.
pub(crate) fn eq_ignore_case(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => fold(left).eq(fold(right)),
        _ => false,
    }
}

/// Feeds an optional field into `state` using the same folding as [`eq_ignore_case`].
pub(crate) fn hash_ignore_case<H: Hasher>(value: Option<&str>, state: &mut H) {
    match value {
        None => state.write_u8(0),
        Some(text) => {
            state.write_u8(1);
            for character in fold(text) {
                character.hash(state);
            }
            // Terminator keeps adjacent fields from running together.
            state.write_u8(0xff);
        }
    }
}

/// Returns `true` when every letter in `token` is uppercase.
///
/// Non-letters are ignored, so `"2"` and `"III"` both qualify.
#[cfg(feature = "name")]
pub(crate) fn is_all_caps(token: &str) -> bool {
    token
        .chars()
        .all(|character| !character.is_alphabetic() || character.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::DefaultHasher;

    fn hash_of(value: Option<&str>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_ignore_case(value, &mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some("Tarry Town"), Some("tarry town"), true)]
    #[case(Some("Straße"), Some("STRASSE"), false)]
    #[case(Some("straße"), Some("STRAßE"), true)]
    #[case(Some("Ärger"), Some("äRGER"), true)]
    #[case(Some(""), None, false)]
    #[case(Some("a"), Some("b"), false)]
    fn eq_ignore_case_cases(
        #[case] left: Option<&str>,
        #[case] right: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(eq_ignore_case(left, right), expected);
    }

    #[rstest]
    #[case('a', 'A')]
    #[case('ä', 'Ä')]
    #[case('ß', 'ß')]
    #[case('7', '7')]
    fn fold_char_keeps_length(#[case] character: char, #[case] expected: char) {
        assert_eq!(fold_char(character), expected);
    }

    #[rstest]
    fn hash_agrees_with_equality() {
        assert_eq!(hash_of(Some("Hyrule")), hash_of(Some("HYRULE")));
        assert_eq!(hash_of(Some("straße")), hash_of(Some("STRAßE")));
        assert_ne!(hash_of(Some("")), hash_of(None));
    }

    #[cfg(feature = "name")]
    #[rstest]
    #[case("CPA", true)]
    #[case("III", true)]
    #[case("2", true)]
    #[case("PhD", false)]
    #[case("smith", false)]
    fn is_all_caps_cases(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_all_caps(token), expected);
    }
}
