use ibancheck::{country_format, supported_country_codes, validate};

fn main() {
    println!("=== IBAN Validation ===\n");

    let test_ibans = [
        "DE44 5001 0517 5407 3249 31",
        "de44-5001-0517-5407-3249-31", // lowercase, hyphen-grouped
        "GB29 NWBK 6016 1331 9268 19",
        "NO93 8601 1117 947",
        "DE44 5001 0517 5407 3249 32",  // flipped account digit
        "DE44 5001 0517 5407 3249 231", // one character too long
        "ZZ00 0000 0000 0000 00",       // unregistered country
        "DE44 # 5001 0517 5407 3249",   // stray symbol
    ];

    for iban in &test_ibans {
        match validate(iban) {
            Ok(()) => println!("  {iban} => valid"),
            Err(e) => println!("  {iban} => INVALID: {e}"),
        }
    }

    println!("\n=== Country Format Registry ===\n");

    for code in ["DE", "NO", "MT", "XX"] {
        match country_format(code) {
            Some(f) => println!(
                "  {code}: {} ({} chars, BBAN {})\n      {}",
                f.name, f.total_length, f.bban, f.layout
            ),
            None => println!("  {code}: not registered"),
        }
    }

    println!(
        "\n  {} countries registered",
        supported_country_codes().count()
    );
}
