//! Reading names from space separated text.

use tracing::trace;

use super::FullName;
use crate::text::is_all_caps;

/// The signal that marked a token as a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuffixRule {
    Period,
    InnerUppercase,
    Short,
    AllCaps,
}

impl SuffixRule {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::InnerUppercase => "inner_uppercase",
            Self::Short => "short",
            Self::AllCaps => "all_caps",
        }
    }

    fn detect(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else if token.ends_with('.') {
            Some(Self::Period)
        } else if token.chars().skip(1).any(char::is_uppercase) {
            Some(Self::InnerUppercase)
        } else if matches!(token.chars().count(), 3 | 4) {
            Some(Self::Short)
        } else if is_all_caps(token) {
            Some(Self::AllCaps)
        } else {
            None
        }
    }
}

/// Guesses whether `token` is a name suffix such as `Jr.`, `PhD` or `CPA`.
///
/// The rules are tried in order:
///
/// 1. an empty token is never a suffix
/// 2. a trailing `.` (`Jr.`, `jr.`)
/// 3. an uppercase letter after the first character (`PhD`, `MD`)
/// 4. a length of three or four characters (`CPA`, `Esq`)
/// 5. no lowercase letters at all (`II`, `V`)
///
/// Rule 4 also matches short family names like `Cox`, so
/// `"john smith Cox"` parses `Cox` as a suffix. This is a known limitation
/// of the heuristic.
///
/// # Examples
///
/// ```rust
/// use mailing::name::is_suffix;
///
/// assert!(is_suffix("Jr."));
/// assert!(is_suffix("PhD"));
/// assert!(!is_suffix("smith"));
/// assert!(!is_suffix(""));
/// ```
#[must_use]
pub fn is_suffix(token: &str) -> bool {
    match SuffixRule::detect(token) {
        Some(rule) => {
            trace!(token, rule = rule.as_str(), "suffix detected");
            true
        }
        None => false,
    }
}

/// Parses space separated text into a [`FullName`].
///
/// Text is split on every single space; runs of spaces produce empty tokens
/// rather than being collapsed. Parts are assigned by token count:
///
/// | Tokens | Parts |
/// |---|---|
/// | 1 | given |
/// | 2 | given, family |
/// | 3 | given, family, suffix when the last token [`is_suffix`]; otherwise given, middle, family |
/// | 4 | given, middle, family, suffix |
///
/// Absent or empty text, and any other token count, yields an empty name.
///
/// # Examples
///
/// ```rust
/// use mailing::name::parse;
///
/// let name = parse(Some("john avery smith"));
/// assert_eq!(name.middle(), Some("avery"));
///
/// let name = parse(Some("john smith Jr."));
/// assert_eq!(name.middle(), None);
/// assert_eq!(name.suffix(), Some("Jr."));
/// ```
#[must_use]
pub fn parse(text: Option<&str>) -> FullName {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return FullName::empty();
    };

    let tokens: Vec<&str> = text.split(' ').collect();
    match *tokens.as_slice() {
        [given] => FullName::new(Some(given), None, None, None),
        [given, family] => FullName::new(Some(given), None, Some(family), None),
        [given, family, suffix] if is_suffix(suffix) => {
            FullName::new(Some(given), None, Some(family), Some(suffix))
        }
        [given, middle, family] => FullName::new(Some(given), Some(middle), Some(family), None),
        [given, middle, family, suffix] => {
            FullName::new(Some(given), Some(middle), Some(family), Some(suffix))
        }
        _ => {
            trace!(count = tokens.len(), "unsupported name token count");
            FullName::empty()
        }
    }
}
