//! ISO 13616 per-country IBAN format registry.
//!
//! One entry per country that issues IBANs, keyed by ISO 3166-1 alpha-2
//! code. Validation enforces `total_length` only; the remaining fields
//! describe the national layout for display and diagnostics.

use serde::Serialize;

/// Registered IBAN format of a single country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryFormat {
    /// ISO 3166-1 alpha-2 country code, uppercase.
    pub code: &'static str,
    /// English country name.
    pub name: &'static str,
    /// Required total IBAN length, country code and check digits included.
    pub total_length: usize,
    /// BBAN structure descriptor, e.g. `"18n"` for 18 numeric characters
    /// or `"4a,14n"` for 4 letters followed by 14 digits.
    pub bban: &'static str,
    /// Printed layout skeleton, e.g. `"DEkk bbbb bbbb cccc cccc cc"`.
    pub layout: &'static str,
    /// Meaning of the placeholder letters used in `layout`.
    pub legend: &'static str,
}

/// Look up the registered format for a two-letter country code.
///
/// The lookup is exact: codes are stored uppercase, so pass the canonical
/// form (or the first two characters of a [`normalize`](crate::normalize)d
/// IBAN). `country_format("de")` finds nothing.
pub fn country_format(code: &str) -> Option<&'static CountryFormat> {
    FORMATS
        .binary_search_by(|f| f.code.cmp(code))
        .ok()
        .map(|i| &FORMATS[i])
}

/// Iterate over all registered country codes in ascending order.
pub fn supported_country_codes() -> impl Iterator<Item = &'static str> {
    FORMATS.iter().map(|f| f.code)
}

const fn row(
    code: &'static str,
    name: &'static str,
    total_length: usize,
    bban: &'static str,
    layout: &'static str,
    legend: &'static str,
) -> CountryFormat {
    CountryFormat {
        code,
        name,
        total_length,
        bban,
        layout,
        legend,
    }
}

/// The registry, sorted by country code for binary search.
#[rustfmt::skip]
static FORMATS: &[CountryFormat] = &[
    row("AD", "Andorra", 24, "8n,12c", "ADkk bbbb ssss cccc cccc cccc", "b = National bank code s = Branch code c = Account number"),
    row("AE", "United Arab Emirates", 23, "3n,16n", "AEkk bbbc cccc cccc cccc ccc", "b = National bank code c = Account number"),
    row("AL", "Albania", 28, "8n,16c", "ALkk bbbs sssx cccc cccc cccc cccc", "b = National bank code s = Branch code x = National check digit c = Account number"),
    row("AT", "Austria", 20, "16n", "ATkk bbbb bccc cccc cccc", "b = National bank code c = Account number"),
    row("AZ", "Azerbaijan", 28, "4c,20n", "AZkk bbbb cccc cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("BA", "Bosnia and Herzegovina", 20, "16n", "BAkk bbbs sscc cccc ccxx", "k = IBAN check digits (always 39) b = National bank code s = Branch code c = Account number x = National check digits"),
    row("BE", "Belgium", 16, "12n", "BEkk bbbc cccc ccxx", "b = National bank code c = Account number x = National check digits"),
    row("BG", "Bulgaria", 22, "4a,6n,8c", "BGkk bbbb ssss ddcc cccc cc", "b = BIC bank code s = Branch (BAE) number d = Account type c = Account number"),
    row("BH", "Bahrain", 22, "4a,14c", "BHkk bbbb cccc cccc cccc cc", "b = National bank code c = Account number"),
    row("BR", "Brazil", 29, "23n,1a,1c", "BRkk bbbb bbbb ssss sccc cccc ccct n", "k = IBAN check digits (calculated by MOD 97-10) b = National bank code s = Branch code c = Account number t = Account type (Cheque account, Savings account etc.) n = Owner account number (1, 2 etc.)"),
    row("CH", "Switzerland", 21, "5n,12c", "CHkk bbbb bccc cccc cccc c", "b = National bank code c = Account number"),
    row("CR", "Costa Rica", 21, "17n", "CRkk bbbc cccc cccc cccc c", "b = Bank code c = Account number"),
    row("CY", "Cyprus", 28, "8n,16c", "CYkk bbbs ssss cccc cccc cccc cccc", "b = National bank code s = Branch code c = Account number"),
    row("CZ", "Czech Republic", 24, "20n", "CZkk bbbb ssss sscc cccc cccc", "b = National bank code s = Account number prefix c = Account number"),
    row("DE", "Germany", 22, "18n", "DEkk bbbb bbbb cccc cccc cc", "b = Bank and branch identifier (de:Bankleitzahl or BLZ) c = Account number"),
    row("DK", "Denmark", 18, "14n", "DKkk bbbb cccc cccc cc", "b = National bank code c = Account number"),
    row("DO", "Dominican Republic", 28, "4a,20n", "DOkk bbbb cccc cccc cccc cccc cccc", "b = Bank identifier c = Account number"),
    row("EE", "Estonia", 20, "16n", "EEkk bbss cccc cccc cccx", "b = National bank code s = Branch code c = Account number x = National check digit"),
    row("ES", "Spain", 24, "20n", "ESkk bbbb gggg xxcc cccc cccc", "b = National bank code g = Branch code x = Check digits c = Account number"),
    row("FI", "Finland", 18, "14n", "FIkk bbbb bbcc cccc cx", "b = Bank and branch code c = Account number x = National check digit"),
    row("FO", "Faroe Islands", 18, "14n", "FOkk bbbb cccc cccc cx", "b = National bank code c = Account number x = National check digit"),
    row("FR", "France", 27, "10n,11c,2n", "FRkk bbbb bggg ggcc cccc cccc cxx", "b = National bank code g = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)"),
    row("GB", "United Kingdom", 22, "4a,14n", "GBkk bbbb ssss sscc cccc cc", "b = BIC bank code s = Bank and branch code (sort code) c = Account number"),
    row("GE", "Georgia", 22, "2c,16n", "GEkk bbcc cccc cccc cccc cc", "b = National bank code c = Account number"),
    row("GI", "Gibraltar", 23, "4a,15c", "GIkk bbbb cccc cccc cccc ccc", "b = BIC bank code c = Account number"),
    row("GL", "Greenland", 18, "14n", "GLkk bbbb cccc cccc cc", "b = National bank code c = Account number"),
    row("GR", "Greece", 27, "7n,16c", "GRkk bbbs sssc cccc cccc cccc ccc", "b = National bank code s = Branch code c = Account number"),
    row("GT", "Guatemala", 28, "4c,20c", "GTkk bbbb mmtt cccc cccc cccc cccc", "b = National bank code c = Account number m = Currency t = Account type"),
    row("HR", "Croatia", 21, "17n", "HRkk bbbb bbbc cccc cccc c", "b = Bank code c = Account number"),
    row("HU", "Hungary", 28, "24n", "HUkk bbbs sssk cccc cccc cccc cccx", "b = National bank code s = Branch code c = Account number x = National check digit"),
    row("IE", "Ireland", 22, "4c,14n", "IEkk aaaa bbbb bbcc cccc cc", "a = BIC bank code b = Bank/branch code (sort code) c = Account number"),
    row("IL", "Israel", 23, "19n", "ILkk bbbn nncc cccc cccc ccc", "b = National bank code n = Branch number c = Account number 13 digits (padded with zeros)"),
    row("IS", "Iceland", 26, "22n", "ISkk bbbb sscc cccc iiii iiii ii", "b = National bank code s = Branch code c = Account number i = holder's kennitala (national identification number)"),
    row("IT", "Italy", 27, "1a,10n,12c", "ITkk xaaa aabb bbbc cccc cccc ccc", "x = Check char (CIN) a = National bank code (it:Associazione bancaria italiana or Codice ABI) b = Branch code (it:Coordinate bancarie or CAB - Codice d'Avviamento Bancario) c = Account number"),
    row("JO", "Jordan", 30, "4a,22n", "JOkk bbbb nnnn cccc cccc cccc cccc cc", "b = National bank code n = Branch code c = Account number"),
    row("KW", "Kuwait", 30, "4a,22c", "KWkk bbbb cccc cccc cccc cccc cccc cc", "b = National bank code c = Account number"),
    row("KZ", "Kazakhstan", 20, "3n,13c", "KZkk bbbc cccc cccc cccc", "b = National bank code c = Account number"),
    row("LB", "Lebanon", 28, "4n,20c", "LBkk bbbb cccc cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("LI", "Liechtenstein", 21, "5n,12c", "LIkk bbbb bccc cccc cccc c", "b = National bank code c = Account number"),
    row("LT", "Lithuania", 20, "16n", "LTkk bbbb bccc cccc cccc", "b = National bank code c = Account number"),
    row("LU", "Luxembourg", 20, "3n,13c", "LUkk bbbc cccc cccc cccc", "b = National bank code c = Account number"),
    row("LV", "Latvia", 21, "4a,13c", "LVkk bbbb cccc cccc cccc c", "b = BIC bank code c = Account number"),
    row("MC", "Monaco", 27, "10n,11c,2n", "MCkk bbbb bsss sscc cccc cccc cxx", "b = National bank code s = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)"),
    row("MD", "Moldova", 24, "2c,18c", "MDkk bbcc cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("ME", "Montenegro", 22, "18n", "MEkk bbbc cccc cccc cccc xx", "k = IBAN check digits (always = '25') b = Bank code c = Account number x = National check digits"),
    row("MK", "Macedonia", 19, "3n,10c,2n", "MKkk bbbc cccc cccc cxx", "k = IBAN check digits (always = '07') b = National bank code c = Account number x = National check digits"),
    row("MR", "Mauritania", 27, "23n", "MRkk bbbb bsss sscc cccc cccc cxx", "k = IBAN check digits (always 13) b = National bank code s = Branch code (fr:code guichet) c = Account number x = National check digits (fr:clé RIB)"),
    row("MT", "Malta", 31, "4a,5n,18c", "MTkk bbbb ssss sccc cccc cccc cccc ccc", "b = BIC bank code s = Branch code c = Account number"),
    row("MU", "Mauritius", 30, "4a,19n,3a", "MUkk bbbb bbss cccc cccc cccc 000d dd", "b = National bank code s = Branch identifier c = Account number 0 = Zeroes d = Currency symbol"),
    row("NL", "Netherlands", 18, "4a,10n", "NLkk bbbb cccc cccc cc", "b = BIC bank code c = Account number"),
    row("NO", "Norway", 15, "11n", "NOkk bbbb cccc ccx", "b = National bank code c = Account number x = Modulo-11 national check digit"),
    row("PK", "Pakistan", 24, "4c,16n", "PKkk bbbb cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("PL", "Poland", 28, "24n", "PLkk bbbs sssx cccc cccc cccc cccc", "b = National bank code s = Branch code x = National check digit c = Account number"),
    row("PS", "Palestinian territories", 29, "4c,21n", "PSkk bbbb xxxx xxxx xccc cccc cccc c", "b = National bank code c = Account number x = Not specified"),
    row("PT", "Portugal", 25, "21n", "PTkk bbbb ssss cccc cccc cccx x", "k = IBAN check digits (always = '50') b = National bank code s = Branch code c = Account number x = National check digit"),
    row("QA", "Qatar", 29, "4a,21c", "QAkk bbbb cccc cccc cccc cccc cccc c", "b = National bank code c = Account number"),
    row("RO", "Romania", 24, "4a,16c", "ROkk bbbb cccc cccc cccc cccc", "b = BIC bank code c = Branch code and account number (bank-specific format)"),
    row("RS", "Serbia", 22, "18n", "RSkk bbbc cccc cccc cccc xx", "b = National bank code c = Account number x = Account check digits"),
    row("SA", "Saudi Arabia", 24, "2n,18c", "SAkk bbcc cccc cccc cccc cccc", "b = National bank code c = Account number preceded by zeros, if required"),
    row("SE", "Sweden", 24, "20n", "SEkk bbbc cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("SI", "Slovenia", 19, "15n", "SIkk bbss sccc cccc cxx", "k = IBAN check digits (always = '56') b = National bank code s = Branch code c = Account number x = National check digits"),
    row("SK", "Slovakia", 24, "20n", "SKkk bbbb ssss sscc cccc cccc", "b = National bank code s = Account number prefix c = Account number"),
    row("SM", "San Marino", 27, "1a,10n,12c", "SMkk xaaa aabb bbbc cccc cccc ccc", "x = Check char (it:CIN) a = National bank code (it:Associazione bancaria italiana or Codice ABI) b = Branch code (it:Coordinate bancarie or CAB - Codice d'Avviamento Bancario) c = Account number"),
    row("TL", "East Timor", 23, "19n", "TLkk bbbc cccc cccc cccc cxx", "k = IBAN check digits (always = '38') b = Bank identifier c = Account number x = National check digit"),
    row("TN", "Tunisia", 24, "20n", "TNkk bbss sccc cccc cccc cccc", "k = IBAN check digits (always 59) b = National bank code s = Branch code c = Account number"),
    row("TR", "Turkey", 26, "5n,17c", "TRkk bbbb bxcc cccc cccc cccc cc", "b = National bank code x = Reserved for future use (currently '0') c = Account number"),
    row("VG", "Virgin Islands, British", 24, "4c,16n", "VGkk bbbb cccc cccc cccc cccc", "b = National bank code c = Account number"),
    row("XK", "Kosovo", 20, "4n,10n,2n", "XKkk bbbb cccc cccc cccc", "b = National bank code c = Account number"),
];
