#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let out = ibancheck::normalize(s);
        // Normalization is a fixed point after one pass.
        assert_eq!(ibancheck::normalize(&out), out);
    }
});
