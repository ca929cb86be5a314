//! ISO 7064 MOD 97-10 check digit verification.

use num_bigint::BigUint;

use crate::error::IbanError;

/// Decimal value of an IBAN character: digits map to themselves,
/// letters to 10 through 35.
fn char_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Verify the check digits of a normalized IBAN.
///
/// The country code and check digits are moved behind the BBAN, every
/// character is replaced by its decimal value and the resulting integer
/// must leave remainder 1 when divided by 97. The caller guarantees the
/// input is uppercase alphanumeric and at least four characters long.
pub(crate) fn check_checksum(iban: &str) -> Result<(), IbanError> {
    let (prefix, bban) = iban.split_at(4);

    let mut digits = String::with_capacity(iban.len() * 2);
    for byte in bban.bytes().chain(prefix.bytes()) {
        let value = char_value(byte).ok_or(IbanError::InternalEncoding)?;
        if value >= 10 {
            digits.push((b'0' + value / 10) as char);
        }
        digits.push((b'0' + value % 10) as char);
    }

    let value =
        BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(IbanError::InternalEncoding)?;
    if value % 97u32 == BigUint::from(1u32) {
        Ok(())
    } else {
        Err(IbanError::ChecksumMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_values_cover_the_iban_alphabet() {
        assert_eq!(char_value(b'0'), Some(0));
        assert_eq!(char_value(b'9'), Some(9));
        assert_eq!(char_value(b'A'), Some(10));
        assert_eq!(char_value(b'Z'), Some(35));
        assert_eq!(char_value(b'a'), None);
        assert_eq!(char_value(b' '), None);
        assert_eq!(char_value(b'#'), None);
    }

    #[test]
    fn char_values_are_distinct() {
        let alphabet: Vec<u8> = (b'0'..=b'9').chain(b'A'..=b'Z').collect();
        let values: Vec<u8> = alphabet.iter().map(|b| char_value(*b).unwrap()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 36);
        assert_eq!(values, (0..36).collect::<Vec<u8>>());
    }

    #[test]
    fn valid_check_digits_pass() {
        assert!(check_checksum("DE44500105175407324931").is_ok());
        assert!(check_checksum("GB29NWBK60161331926819").is_ok());
        assert!(check_checksum("NO9386011117947").is_ok());
        assert!(check_checksum("MT84MALT011000012345MTLCAST001S").is_ok());
    }

    #[test]
    fn flipped_digits_fail() {
        assert_eq!(
            check_checksum("DE44500105175407324932"),
            Err(IbanError::ChecksumMismatch)
        );
        assert_eq!(
            check_checksum("GB29NWBK60161331926810"),
            Err(IbanError::ChecksumMismatch)
        );
    }

    #[test]
    fn all_97_remainders_but_one_are_rejected() {
        // DE00..DE99 for a fixed BBAN admits exactly one valid pair.
        let valid: Vec<String> = (0..100)
            .map(|k| format!("DE{k:02}500105175407324931"))
            .filter(|iban| check_checksum(iban).is_ok())
            .collect();
        assert_eq!(valid, vec!["DE44500105175407324931".to_string()]);
    }

    #[test]
    fn unexpected_bytes_are_an_encoding_error() {
        // validate() screens the alphabet first; the checksum still refuses
        // to fabricate a number from anything else.
        assert_eq!(
            check_checksum("DE44#0010517540732493"),
            Err(IbanError::InternalEncoding)
        );
        assert_eq!(
            check_checksum("de44500105175407324931"),
            Err(IbanError::InternalEncoding)
        );
    }
}
