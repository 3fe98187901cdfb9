//! # mailing
//!
//! Immutable value types for a postal [`Address`](address::Address) and a
//! person's [`FullName`](name::FullName).
//!
//! ## Overview
//!
//! Both types can be:
//!
//! - **Parsed** heuristically from loosely structured text
//!   (`KEY=value;` pairs for addresses, whitespace separated tokens for names)
//! - **Formatted** with a small directive language, where each character of
//!   the format string either selects a field or is copied literally
//! - **Compared** case-insensitively, field by field
//!
//! ## Feature Flags
//!
//! - `address`: the `Address` type, its parser and formatter
//! - `name`: the `FullName` type, its parser and formatter
//! - `serde`: `Serialize`/`Deserialize` for both value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use mailing::prelude::*;
//!
//! let address = Address::parse(Some("st1=123 Conny Avenue;cty=Domino City;s=Marley;zip=00878"));
//! assert_eq!(address.city(), Some("Domino City"));
//! assert_eq!(address.to_string_with(Some("3, 4 6")), "Domino City, Marley 00878");
//!
//! let name = FullName::parse(Some("john avery smith CPA"));
//! assert_eq!(name.suffix(), Some("CPA"));
//! assert_eq!(name.to_string_with(Some("S")), "john smith");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types of every enabled feature.
///
/// # Usage
///
/// ```rust
/// use mailing::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "address")]
    pub use crate::address::{Address, AddressField};

    #[cfg(feature = "name")]
    pub use crate::name::FullName;

    pub use crate::format::{Formattable, format_value};
}

#[macro_use]
mod macros;

mod text;

pub mod format;

#[cfg(feature = "address")]
pub mod address;

#[cfg(feature = "name")]
pub mod name;
