//! # ibancheck
//!
//! ISO 13616 IBAN validation: input normalization, a per-country format
//! registry, and ISO 7064 MOD 97-10 check digit verification.
//!
//! Validation is syntactic. A passing IBAN is well formed for its country
//! and has consistent check digits; whether the account exists is between
//! you and the bank.
//!
//! ## Quick Start
//!
//! ```rust
//! use ibancheck::{IbanError, country_format, validate};
//!
//! // Presentation formatting and case are tolerated.
//! assert!(validate("de44 5001-0517-5407-3249-31").is_ok());
//!
//! // Errors carry the failed check.
//! assert_eq!(
//!     validate("DE44 5001 0517 5407 3249 311"),
//!     Err(IbanError::InvalidLength {
//!         country: "DE".to_string(),
//!         expected: 22,
//!         actual: 23,
//!     })
//! );
//!
//! // The registry is inspectable.
//! assert_eq!(country_format("DE").unwrap().total_length, 22);
//! ```

mod checksum;
mod countries;
mod error;
mod normalize;
mod validate;

// Re-export the public surface at crate root for convenience
pub use crate::countries::{CountryFormat, country_format, supported_country_codes};
pub use crate::error::IbanError;
pub use crate::normalize::normalize;
pub use crate::validate::{MAX_LENGTH, MIN_LENGTH, validate};
