//! Fuzz target for ABI decoding
//!
//! This target ensures decoding of untrusted node payloads:
//! 1. Never panics on arbitrary bytes
//! 2. Rejects malformed payloads with errors instead of garbage values
//! 3. Accepts only words whose padding is clean

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use solcert_chain::abi;

#[derive(Debug, Arbitrary)]
enum AbiInput {
    AddressArray(Vec<u8>),
    Words { data: Vec<u8>, index: u8 },
}

fuzz_target!(|input: AbiInput| {
    match input {
        AbiInput::AddressArray(data) => {
            // must never panic, whatever the payload claims about itself
            if let Ok(addresses) = abi::decode_address_array(&data) {
                // a successful decode promised clean padding for every element
                for addr in addresses {
                    assert_eq!(addr.as_bytes().len(), 20);
                }
            }
        }
        AbiInput::Words { data, index } => {
            let index = index as usize;
            if let Ok(value) = abi::decode_u64(&data, index) {
                // accepted words fit the target range by construction
                let word = &data[index * 32..(index + 1) * 32];
                assert!(word[..24].iter().all(|&b| b == 0));
                assert_eq!(value, abi::decode_u64(&data, index).unwrap());
            }
            let _ = abi::decode_u128(&data, index);
            let _ = abi::decode_address(&data, index);
        }
    }
});
