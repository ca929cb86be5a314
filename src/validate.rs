//! IBAN validation pipeline: normalize, check structure, check digits.

use crate::checksum::check_checksum;
use crate::countries::country_format;
use crate::error::IbanError;
use crate::normalize::normalize;

/// Shortest IBAN any country issues (Norway).
pub const MIN_LENGTH: usize = 15;
/// Longest IBAN permitted by ISO 13616.
pub const MAX_LENGTH: usize = 34;

/// Structural gate run before the checksum: alphabet and overall length,
/// then country code, then the country's registered length.
fn check_structure(iban: &str) -> Result<(), IbanError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&iban.len())
        || !iban
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(IbanError::InvalidCharacters);
    }

    let code = &iban[..2];
    let format = country_format(code)
        .ok_or_else(|| IbanError::UnknownCountryCode(code.to_string()))?;

    if iban.len() != format.total_length {
        return Err(IbanError::InvalidLength {
            country: format.code.to_string(),
            expected: format.total_length,
            actual: iban.len(),
        });
    }

    Ok(())
}

/// Validate an IBAN.
///
/// The input is [`normalize`]d first, so spaces, hyphens and lowercase are
/// accepted. The first failed check determines the error: character set and
/// overall length, then country code, then country length, then MOD 97-10
/// check digits.
///
/// ```
/// use ibancheck::{IbanError, validate};
///
/// assert!(validate("GB29 NWBK 6016 1331 9268 19").is_ok());
/// assert_eq!(
///     validate("GB29 NWBK 6016 1331 9268 10"),
///     Err(IbanError::ChecksumMismatch)
/// );
/// ```
pub fn validate(input: &str) -> Result<(), IbanError> {
    let iban = normalize(input);
    check_structure(&iban)?;
    check_checksum(&iban)
}
