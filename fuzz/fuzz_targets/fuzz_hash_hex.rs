//! Fuzz target for hex parsing of hashes and addresses
//!
//! This target ensures:
//! 1. `from_hex` never panics on any input
//! 2. Accepted inputs round-trip exactly
//! 3. Prefixed and unprefixed spellings agree

#![no_main]

use libfuzzer_sys::fuzz_target;
use solcert_primitives::{Address, Hash256};

fuzz_target!(|input: &str| {
    // Parsing must never panic
    if let Ok(hash) = Hash256::from_hex(input) {
        // accepted inputs round-trip through the canonical rendering
        let rendered = hash.to_hex_prefixed();
        let reparsed = Hash256::from_hex(&rendered).expect("canonical form must parse");
        assert_eq!(hash, reparsed);

        // prefix handling is uniform
        let stripped = input.strip_prefix("0x").unwrap_or(input);
        assert_eq!(Hash256::from_hex(stripped).ok(), Some(hash));
    }

    if let Ok(addr) = Address::from_hex(input) {
        let rendered = addr.to_hex_prefixed();
        let reparsed = Address::from_hex(&rendered).expect("canonical form must parse");
        assert_eq!(addr, reparsed);
    }
});
