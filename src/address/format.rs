//! Rendering addresses with the directive language.

use super::{Address, AddressField};
use crate::format::{normalize, push_field, render};

/// Appends `STREET1=...;STREET2=...;CITY=...;STATE=...;COUNTRY=...;ZIP=...`.
///
/// Absent fields are written as nothing between the delimiters.
pub(super) fn write_canonical(address: &Address, output: &mut String) {
    for (index, field) in AddressField::ALL.into_iter().enumerate() {
        if index > 0 {
            output.push(';');
        }
        output.push_str(field.canonical_key());
        output.push('=');
        push_field(output, address.get(field));
    }
}

/// Formats `address` according to `format`.
///
/// | Directive | Output |
/// |---|---|
/// | `G` | canonical `STREET1=...;ZIP=...` form |
/// | `C` | street, then `City, State PostalCode`, then country, one per line |
/// | `0` | street (both lines) |
/// | `1` | line 1 |
/// | `2` | line 2 |
/// | `3` | city |
/// | `4` | state |
/// | `5` | country |
/// | `6` | postal code |
///
/// Any other character is copied, `\` escapes the next character, and an
/// absent or empty `format` means `G`. The result is trimmed.
///
/// # Examples
///
/// ```rust
/// use mailing::address::{Address, format};
///
/// let address = Address::new(Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"));
/// assert_eq!(format(&address, Some("0")), "a b");
/// assert_eq!(format(&address, Some("3, 4 6")), "c, d f");
/// assert_eq!(format(&address, None), "STREET1=a;STREET2=b;CITY=c;STATE=d;COUNTRY=e;ZIP=f");
/// ```
#[must_use]
pub fn format(address: &Address, format: Option<&str>) -> String {
    render(normalize(format), |directive, output| {
        match directive {
            'G' => write_canonical(address, output),
            'C' => {
                output.push_str(&address.street());
                output.push('\n');
                push_field(output, address.city());
                output.push_str(", ");
                push_field(output, address.state());
                output.push(' ');
                push_field(output, address.postal_code());
                output.push('\n');
                push_field(output, address.country());
            }
            '0' => output.push_str(&address.street()),
            '1' => push_field(output, address.line1()),
            '2' => push_field(output, address.line2()),
            '3' => push_field(output, address.city()),
            '4' => push_field(output, address.state()),
            '5' => push_field(output, address.country()),
            '6' => push_field(output, address.postal_code()),
            _ => return false,
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Address {
        Address::new(Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"))
    }

    #[rstest]
    #[case("1", "a")]
    #[case("2", "b")]
    #[case("3", "c")]
    #[case("4", "d")]
    #[case("5", "e")]
    #[case("6", "f")]
    #[case("0", "a b")]
    #[case("G", "STREET1=a;STREET2=b;CITY=c;STATE=d;COUNTRY=e;ZIP=f")]
    #[case("", "STREET1=a;STREET2=b;CITY=c;STATE=d;COUNTRY=e;ZIP=f")]
    #[case("C", "a b\nc, d f\ne")]
    #[case("\\1", "1")]
    #[case("[1|2]", "[a|b]")]
    #[case("3\\", "c\\")]
    fn directives(#[case] format_string: &str, #[case] expected: &str) {
        assert_eq!(format(&sample(), Some(format_string)), expected);
    }

    #[rstest]
    fn absent_fields_render_empty() {
        let address = Address::empty().with_city("Domino City");
        assert_eq!(
            format(&address, Some("G")),
            "STREET1=;STREET2=;CITY=Domino City;STATE=;COUNTRY=;ZIP="
        );
        assert_eq!(format(&address, Some("1")), "");
        assert_eq!(format(&address, Some("C")), "Domino City,");
    }
}
