//! Postal addresses.
//!
//! [`Address`] holds six optional text fields. An absent field means
//! "unknown", which is distinct from an empty string.
//!
//! # Examples
//!
//! ```rust
//! use mailing::address::Address;
//!
//! let address = Address::parse(Some("st1=123 Conny Avenue;st2=apt #45;cty=Domino City"));
//! assert_eq!(address.street(), "123 Conny Avenue apt #45");
//! assert_eq!(address.state(), None);
//!
//! // Equality ignores case
//! let shouted = Address::parse(Some("STREET1=123 CONNY AVENUE;STREET2=APT #45;CITY=DOMINO CITY"));
//! assert_eq!(address, shouted);
//! ```

mod format;
mod parse;

pub use format::format;
pub use parse::{AddressField, parse};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An immutable postal address.
///
/// Equality and hashing compare every field case-insensitively.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Address {
    line1: Option<String>,
    line2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
}

value_fields!(Address {
    /// Returns the first street line.
    line1,
    /// Returns the second street line.
    line2,
    /// Returns the city.
    city,
    /// Returns the state or province.
    state,
    /// Returns the country.
    country,
    /// Returns the postal code.
    postal_code,
});

impl Address {
    /// Creates an address from its fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mailing::address::Address;
    ///
    /// let address = Address::new(Some("a"), Some("b"), Some("c"), Some("d"), Some("e"), Some("f"));
    /// assert_eq!(address.postal_code(), Some("f"));
    /// ```
    #[must_use]
    pub fn new(
        line1: Option<&str>,
        line2: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
        country: Option<&str>,
        postal_code: Option<&str>,
    ) -> Self {
        Self {
            line1: line1.map(str::to_owned),
            line2: line2.map(str::to_owned),
            city: city.map(str::to_owned),
            state: state.map(str::to_owned),
            country: country.map(str::to_owned),
            postal_code: postal_code.map(str::to_owned),
        }
    }

    /// Creates an address with every field absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            line1: None,
            line2: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
        }
    }

    /// Returns both street lines joined by a space, trimmed.
    ///
    /// Absent lines contribute nothing, so this is never absent itself.
    #[must_use]
    pub fn street(&self) -> String {
        format!(
            "{} {}",
            self.line1().unwrap_or_default(),
            self.line2().unwrap_or_default()
        )
        .trim()
        .to_owned()
    }

    /// Returns the field selected by `field`.
    #[must_use]
    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Line1 => self.line1(),
            AddressField::Line2 => self.line2(),
            AddressField::City => self.city(),
            AddressField::State => self.state(),
            AddressField::Country => self.country(),
            AddressField::PostalCode => self.postal_code(),
        }
    }

    /// Parses `KEY=value;` text into an address. See [`parse`].
    #[must_use]
    pub fn parse(text: Option<&str>) -> Self {
        parse(text)
    }

    /// Formats the address with the directive language. See [`format`].
    #[must_use]
    pub fn to_string_with(&self, format: Option<&str>) -> String {
        format::format(self, format)
    }

    pub(crate) fn set(&mut self, field: AddressField, value: &str) {
        let slot = match field {
            AddressField::Line1 => &mut self.line1,
            AddressField::Line2 => &mut self.line2,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Country => &mut self.country,
            AddressField::PostalCode => &mut self.postal_code,
        };
        *slot = Some(value.to_owned());
    }
}

/// Writes the canonical `STREET1=...;ZIP=...` form, untrimmed.
impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut canonical = String::new();
        format::write_canonical(self, &mut canonical);
        formatter.write_str(&canonical)
    }
}

impl FromStr for Address {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(parse(Some(text)))
    }
}

impl From<&str> for Address {
    fn from(text: &str) -> Self {
        parse(Some(text))
    }
}
