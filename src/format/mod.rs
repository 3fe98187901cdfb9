//! The directive language shared by the value-type formatters.
//!
//! A format string is read one character at a time. Each character is either
//! a *directive*, which the value type expands into one or more of its
//! fields, or a literal that is copied to the output unchanged.
//!
//! - `\` escapes the next character, which is emitted literally. A trailing
//!   lone `\` emits itself.
//! - An absent or empty format string is treated as `G`, the canonical form.
//! - Leading and trailing whitespace is trimmed from the result.
//!
//! Which characters are directives depends on the value type; see
//! [`address::format`](crate::address::format()) and
//! [`name::format`](crate::name::format()).
//!
//! # Examples
//!
//! ```rust
//! use mailing::format::render;
//!
//! let output = render("<x> \\x", |directive, output| {
//!     if directive == 'x' {
//!         output.push_str("value");
//!         true
//!     } else {
//!         false
//!     }
//! });
//! assert_eq!(output, "<value> x");
//! ```

use std::fmt;

#[cfg(feature = "address")]
use crate::address::Address;
#[cfg(feature = "name")]
use crate::name::FullName;

/// Escapes the character that follows it.
pub const ESCAPE: char = '\\';

/// The directive used when no format string is given.
pub const CANONICAL: &str = "G";

/// Interprets `format`, asking `resolve` to expand each unescaped character.
///
/// `resolve` appends the expansion of a directive to the output and returns
/// `true`, or returns `false` for a character it does not recognize, which is
/// then copied verbatim.
pub fn render<F>(format: &str, mut resolve: F) -> String
where
    F: FnMut(char, &mut String) -> bool,
{
    let mut output = String::with_capacity(format.len() * 8);
    let mut characters = format.chars();

    while let Some(character) = characters.next() {
        if character == ESCAPE {
            output.push(characters.next().unwrap_or(ESCAPE));
        } else if !resolve(character, &mut output) {
            output.push(character);
        }
    }

    output.trim().to_owned()
}

/// Maps an absent or empty format string to [`CANONICAL`].
pub(crate) fn normalize(format: Option<&str>) -> &str {
    match format {
        None | Some("") => CANONICAL,
        Some(format) => format,
    }
}

/// Appends an optional field, writing nothing when it is absent.
pub(crate) fn push_field(output: &mut String, field: Option<&str>) {
    if let Some(value) = field {
        output.push_str(value);
    }
}

/// A value that can be passed to [`format_value`].
///
/// Anything that is neither an address nor a name is carried as `Other` and
/// rendered through its own [`Display`](fmt::Display) implementation.
#[derive(Clone, Copy)]
pub enum Formattable<'a> {
    /// A postal address.
    #[cfg(feature = "address")]
    Address(&'a Address),
    /// A person's name.
    #[cfg(feature = "name")]
    FullName(&'a FullName),
    /// Any other value, possibly absent.
    Other(Option<&'a dyn fmt::Display>),
}

impl fmt::Debug for Formattable<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "address")]
            Self::Address(address) => formatter.debug_tuple("Address").field(address).finish(),
            #[cfg(feature = "name")]
            Self::FullName(name) => formatter.debug_tuple("FullName").field(name).finish(),
            Self::Other(Some(value)) => write!(formatter, "Other({value})"),
            Self::Other(None) => formatter.write_str("Other(<absent>)"),
        }
    }
}

#[cfg(feature = "address")]
impl<'a> From<&'a Address> for Formattable<'a> {
    fn from(address: &'a Address) -> Self {
        Self::Address(address)
    }
}

#[cfg(feature = "name")]
impl<'a> From<&'a FullName> for Formattable<'a> {
    fn from(name: &'a FullName) -> Self {
        Self::FullName(name)
    }
}

/// Formats any [`Formattable`] value with `format`.
///
/// Addresses and names go through their own directive tables. Other values
/// ignore `format` and fall back to their `Display` text, or the empty string
/// when absent.
///
/// # Examples
///
/// ```rust
/// use std::fmt::Display;
/// use mailing::format::{Formattable, format_value};
///
/// assert_eq!(format_value(Formattable::Other(Some(&42 as &dyn Display)), Some("G")), "42");
/// assert_eq!(format_value(Formattable::Other(None), Some("G")), "");
/// ```
pub fn format_value(value: Formattable<'_>, format: Option<&str>) -> String {
    match value {
        #[cfg(feature = "address")]
        Formattable::Address(address) => crate::address::format(address, format),
        #[cfg(feature = "name")]
        Formattable::FullName(name) => crate::name::format(name, format),
        Formattable::Other(Some(value)) => value.to_string(),
        Formattable::Other(None) => String::new(),
    }
}
