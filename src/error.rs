use thiserror::Error;

/// Reasons an IBAN can fail validation.
///
/// The checks run in a fixed order and the first applicable failure wins,
/// so the variants are mutually exclusive: an input with a stray character
/// reports [`InvalidCharacters`](Self::InvalidCharacters) even if its
/// country code is also unregistered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IbanError {
    /// After normalization the input is outside the 15-34 character
    /// ISO 13616 envelope or contains characters other than `0-9`/`A-Z`.
    #[error("IBAN must be 15-34 characters drawn from 0-9 and A-Z")]
    InvalidCharacters,

    /// The first two characters are not a registered country code.
    #[error("unknown country code '{0}'")]
    UnknownCountryCode(String),

    /// The length does not match the length registered for the country.
    #[error("invalid length for {country}: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Country code whose registered length was applied.
        country: String,
        /// Registered total length for that country.
        expected: usize,
        /// Length of the normalized input.
        actual: usize,
    },

    /// Structurally valid, but the ISO 7064 MOD 97-10 remainder is not 1.
    #[error("check digits do not match (MOD 97-10 remainder is not 1)")]
    ChecksumMismatch,

    /// The numeric encoding step failed. Unreachable for input that passed
    /// the structural checks; seeing it means a bug, not a bad IBAN.
    #[error("internal error: IBAN could not be encoded as a decimal number")]
    InternalEncoding,
}
