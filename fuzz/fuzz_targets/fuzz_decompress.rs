#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes may fail to decode - that's OK
    // We're looking for panics/crashes, not errors
    if let Ok(output) = lzwin::decompress(data) {
        let declared = u64::from_le_bytes(data[..8].try_into().unwrap());
        assert_eq!(output.len() as u64, declared);
    }
});
