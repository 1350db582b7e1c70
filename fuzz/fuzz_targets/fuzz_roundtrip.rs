#![no_main]

use libfuzzer_sys::fuzz_target;
use lzwin::{CompressionProfile, Decoder, Encoder};

fuzz_target!(|data: &[u8]| {
    // Limit data size to avoid slowdowns in the brute-force finder
    let data = if data.len() > 16 * 1024 { &data[..16 * 1024] } else { data };

    for profile in [CompressionProfile::Fast, CompressionProfile::Best] {
        let packed = Encoder::from_profile(profile).compress(data);
        let output = Decoder::from_profile(profile)
            .decompress(&packed)
            .expect("stream produced by the encoder must decode");
        assert_eq!(output, data, "Round-trip mismatch");
    }
});
