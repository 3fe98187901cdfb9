//! Rendering names with the directive language.

use super::FullName;
use crate::format::{normalize, push_field, render};

/// Appends all four parts joined by spaces, with runs of spaces collapsed.
///
/// Absent parts join as empty strings.
fn write_canonical(name: &FullName, output: &mut String) {
    let mut joined = [name.given(), name.middle(), name.family(), name.suffix()]
        .map(Option::unwrap_or_default)
        .join(" ");
    while joined.contains("  ") {
        joined = joined.replace("  ", " ");
    }
    output.push_str(joined.trim());
}

/// Formats `name` according to `format`.
///
/// | Directive | Output |
/// |---|---|
/// | `G` | `given middle family suffix`, single spaced |
/// | `S` | `given family` |
/// | `1`, `f`, `F` | given name |
/// | `2`, `m`, `M` | middle name |
/// | `3`, `l`, `L` | family name |
///
/// Any other character is copied, `\` escapes the next character, and an
/// absent or empty `format` means `G`. The result is trimmed.
///
/// # Examples
///
/// ```rust
/// use mailing::name::{FullName, format};
///
/// let name = FullName::new(Some("john"), None, Some("smith"), Some("Jr."));
/// assert_eq!(format(&name, None), "john smith Jr.");
/// assert_eq!(format(&name, Some("L, F")), "smith, john");
/// ```
#[must_use]
pub fn format(name: &FullName, format: Option<&str>) -> String {
    render(normalize(format), |directive, output| {
        match directive {
            'G' => write_canonical(name, output),
            'S' => {
                let short = format!(
                    "{} {}",
                    name.given().unwrap_or_default(),
                    name.family().unwrap_or_default()
                );
                output.push_str(short.trim());
            }
            '1' | 'f' | 'F' => push_field(output, name.given()),
            '2' | 'm' | 'M' => push_field(output, name.middle()),
            '3' | 'l' | 'L' => push_field(output, name.family()),
            _ => return false,
        }
        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> FullName {
        FullName::new(Some("john"), Some("avery"), Some("smith"), Some("CPA"))
    }

    #[rstest]
    #[case("G", "john avery smith CPA")]
    #[case("", "john avery smith CPA")]
    #[case("S", "john smith")]
    #[case("1", "john")]
    #[case("f", "john")]
    #[case("F", "john")]
    #[case("2", "avery")]
    #[case("m", "avery")]
    #[case("M", "avery")]
    #[case("3", "smith")]
    #[case("l", "smith")]
    #[case("L", "smith")]
    #[case("L, F M", "smith, john avery")]
    #[case("\\F", "F")]
    #[case("<f>", "<john>")]
    fn directives(#[case] format_string: &str, #[case] expected: &str) {
        assert_eq!(format(&sample(), Some(format_string)), expected);
    }

    #[rstest]
    #[case(FullName::new(Some("john"), None, Some("smith"), None), "john smith")]
    #[case(FullName::new(None, None, Some("smith"), Some("Jr.")), "smith Jr.")]
    #[case(FullName::new(Some("john"), Some(""), Some("smith"), None), "john smith")]
    #[case(FullName::new(Some("john "), None, Some("smith"), None), "john smith")]
    #[case(FullName::new(Some("john"), Some("  avery "), Some("smith"), None), "john avery smith")]
    #[case(FullName::empty(), "")]
    fn canonical_collapses_gaps(#[case] name: FullName, #[case] expected: &str) {
        assert_eq!(format(&name, Some("G")), expected);
    }

    #[rstest]
    fn short_form_trims_missing_given() {
        let name = FullName::new(None, Some("avery"), Some("smith"), None);
        assert_eq!(format(&name, Some("S")), "smith");
    }
}
