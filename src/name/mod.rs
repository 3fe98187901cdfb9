//! Personal names.
//!
//! [`FullName`] splits a name into given name, middle name, family name and
//! suffix. Parsing is positional with a heuristic for telling a suffix apart
//! from a family name; see [`is_suffix`].

mod format;
mod parse;

pub use format::format;
pub use parse::{is_suffix, parse};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An immutable personal name.
///
/// Equality and hashing compare every field case-insensitively, the same way
/// [`Address`](crate::address::Address) does.
///
/// # Examples
///
/// ```rust
/// use mailing::name::FullName;
///
/// let name = FullName::parse(Some("john smith Jr."));
/// assert_eq!(name.given(), Some("john"));
/// assert_eq!(name.family(), Some("smith"));
/// assert_eq!(name.suffix(), Some("Jr."));
/// assert_eq!(name, FullName::parse(Some("JOHN SMITH JR.")));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FullName {
    given: Option<String>,
    middle: Option<String>,
    family: Option<String>,
    suffix: Option<String>,
}

value_fields!(FullName {
    /// Returns the given (first) name.
    given,
    /// Returns the middle name.
    middle,
    /// Returns the family (last) name.
    family,
    /// Returns the suffix, such as `Jr.` or `CPA`.
    suffix,
});

impl FullName {
    /// Creates a name from its parts.
    #[must_use]
    pub fn new(
        given: Option<&str>,
        middle: Option<&str>,
        family: Option<&str>,
        suffix: Option<&str>,
    ) -> Self {
        Self {
            given: given.map(str::to_owned),
            middle: middle.map(str::to_owned),
            family: family.map(str::to_owned),
            suffix: suffix.map(str::to_owned),
        }
    }

    /// Creates a name with every part absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            given: None,
            middle: None,
            family: None,
            suffix: None,
        }
    }

    /// Parses space separated text into a name. See [`parse`].
    #[must_use]
    pub fn parse(text: Option<&str>) -> Self {
        parse(text)
    }

    /// Formats the name with the directive language. See [`format`].
    #[must_use]
    pub fn to_string_with(&self, format: Option<&str>) -> String {
        format::format(self, format)
    }
}

/// Writes the canonical `given middle family suffix` form.
impl fmt::Display for FullName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&format::format(self, None))
    }
}

impl FromStr for FullName {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(parse(Some(text)))
    }
}

impl From<&str> for FullName {
    fn from(text: &str) -> Self {
        parse(Some(text))
    }
}
