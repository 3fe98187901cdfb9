//! Reading addresses from `KEY=value` text.

use tracing::{debug, trace};

use super::Address;

/// Characters that separate `KEY=value` segments.
const SEGMENT_SEPARATORS: [char; 2] = [';', '\0'];

/// One of the six fields of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    /// First street line.
    Line1,
    /// Second street line.
    Line2,
    /// City.
    City,
    /// State or province.
    State,
    /// Country.
    Country,
    /// Postal code.
    PostalCode,
}

impl AddressField {
    /// Every field, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Line1,
        Self::Line2,
        Self::City,
        Self::State,
        Self::Country,
        Self::PostalCode,
    ];

    /// Resolves a key, ignoring case, against the synonym table.
    ///
    /// | Field | Keys |
    /// |---|---|
    /// | `Line1` | `S1`, `ST`, `ST1`, `STREET1` |
    /// | `Line2` | `S2`, `ST2`, `STREET2` |
    /// | `City` | `C`, `CTY`, `CITY` |
    /// | `State` | `S`, `STATE` |
    /// | `Country` | `CO`, `CTRY`, `COUNTRY` |
    /// | `PostalCode` | `Z`, `ZIP`, `POSTALCODE` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mailing::address::AddressField;
    ///
    /// assert_eq!(AddressField::from_key("cty"), Some(AddressField::City));
    /// assert_eq!(AddressField::from_key("town"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_uppercase().as_str() {
            "S1" | "ST" | "ST1" | "STREET1" => Some(Self::Line1),
            "S2" | "ST2" | "STREET2" => Some(Self::Line2),
            "C" | "CTY" | "CITY" => Some(Self::City),
            "S" | "STATE" => Some(Self::State),
            "CO" | "CTRY" | "COUNTRY" => Some(Self::Country),
            "Z" | "ZIP" | "POSTALCODE" => Some(Self::PostalCode),
            _ => None,
        }
    }

    /// The key written for this field in the canonical form.
    #[must_use]
    pub const fn canonical_key(self) -> &'static str {
        match self {
            Self::Line1 => "STREET1",
            Self::Line2 => "STREET2",
            Self::City => "CITY",
            Self::State => "STATE",
            Self::Country => "COUNTRY",
            Self::PostalCode => "ZIP",
        }
    }
}

/// Splits a segment on its only `=`. Segments with zero or several are rejected.
fn split_pair(segment: &str) -> Option<(&str, &str)> {
    segment
        .split_once('=')
        .filter(|(_, value)| !value.contains('='))
}

/// Parses `KEY=value` pairs separated by `;` into an [`Address`].
///
/// Parsing never fails:
///
/// - absent or empty text yields an address with every field absent
/// - segments without exactly one `=` are skipped
/// - unknown keys are skipped
/// - a repeated key overwrites the earlier value
///
/// Values are kept verbatim, so `street2=` yields an empty `line2`.
///
/// # Examples
///
/// ```rust
/// use mailing::address::parse;
///
/// let address = parse(Some("st1=123 Conny Avenue;st2=apt #45;cty=Domino City;s=Marley;co=US;zip=00878"));
/// assert_eq!(address.line1(), Some("123 Conny Avenue"));
/// assert_eq!(address.postal_code(), Some("00878"));
///
/// assert!(parse(Some("PO Box 8790;;Domino City;Marley;US;00878")).is_empty());
/// ```
#[must_use]
pub fn parse(text: Option<&str>) -> Address {
    let mut address = Address::empty();
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return address;
    };

    let mut recognized = 0_usize;
    for segment in text.split(SEGMENT_SEPARATORS) {
        let Some((key, value)) = split_pair(segment) else {
            trace!(segment, "skipping segment without a single '='");
            continue;
        };
        match AddressField::from_key(key) {
            Some(field) => {
                address.set(field, value);
                recognized += 1;
            }
            None => trace!(key, "skipping unrecognized address key"),
        }
    }

    debug!(recognized, "parsed address");
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("S1", AddressField::Line1)]
    #[case("st", AddressField::Line1)]
    #[case("Street1", AddressField::Line1)]
    #[case("s2", AddressField::Line2)]
    #[case("c", AddressField::City)]
    #[case("s", AddressField::State)]
    #[case("CTRY", AddressField::Country)]
    #[case("postalcode", AddressField::PostalCode)]
    fn synonyms_resolve(#[case] key: &str, #[case] expected: AddressField) {
        assert_eq!(AddressField::from_key(key), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("street")]
    #[case(" zip")]
    fn unknown_keys_do_not_resolve(#[case] key: &str) {
        assert_eq!(AddressField::from_key(key), None);
    }

    #[rstest]
    fn canonical_keys_resolve_to_themselves() {
        for field in AddressField::ALL {
            assert_eq!(AddressField::from_key(field.canonical_key()), Some(field));
        }
    }

    #[rstest]
    #[case("a=b", Some(("a", "b")))]
    #[case("a=", Some(("a", "")))]
    #[case("ab", None)]
    #[case("a=b=c", None)]
    fn split_pair_cases(#[case] segment: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_pair(segment), expected);
    }

    #[rstest]
    fn last_key_wins() {
        let address = parse(Some("city=First;cty=Second"));
        assert_eq!(address.city(), Some("Second"));
    }

    #[rstest]
    fn values_are_verbatim() {
        let address = parse(Some("city=  Domino City ;zip="));
        assert_eq!(address.city(), Some("  Domino City "));
        assert_eq!(address.postal_code(), Some(""));
    }

    #[rstest]
    fn nul_separates_segments() {
        let address = parse(Some("st1=a\0zip=f"));
        assert_eq!(address.line1(), Some("a"));
        assert_eq!(address.postal_code(), Some("f"));
    }
}
