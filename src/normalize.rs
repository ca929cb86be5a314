//! IBAN input normalization.

/// Normalize a raw IBAN string for validation.
///
/// ASCII letters are uppercased and ASCII whitespace and hyphens, the
/// separators conventionally typed into IBAN fields, are removed. Every
/// other character passes through unchanged and is left for
/// [`validate`](crate::validate) to reject. The function is total and
/// idempotent.
///
/// # Example
///
/// ```rust
/// assert_eq!(ibancheck::normalize("de44 5001-0517"), "DE4450010517");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases() {
        assert_eq!(normalize("de44nwbk"), "DE44NWBK");
    }

    #[test]
    fn strips_spaces_and_hyphens() {
        assert_eq!(normalize("GB29 NWBK-6016"), "GB29NWBK6016");
        assert_eq!(normalize("--  --"), "");
    }

    #[test]
    fn strips_all_ascii_whitespace() {
        assert_eq!(normalize("GB\t29\nNW\r\x0CBK 60"), "GB29NWBK60");
    }

    #[test]
    fn keeps_invalid_characters_for_later_rejection() {
        assert_eq!(normalize("de44 # 5001"), "DE44#5001");
    }

    #[test]
    fn unicode_separators_are_not_stripped() {
        // NBSP and en-dash are not the separators people type into IBAN
        // fields; they fall through to the character-class check.
        assert_eq!(normalize("GB\u{00A0}29"), "GB\u{00A0}29");
        assert_eq!(normalize("GB\u{2013}29"), "GB\u{2013}29");
    }

    #[test]
    fn idempotent() {
        let once = normalize(" gb29 nwbk-6016 1331 9268 19 ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }
}
