//! Sliding-window LZ77 compression.
//!
//! [`compress`] turns a byte slice into a framed token stream (see
//! [`format`] for the layout) and [`decompress`] reverses it. Both run the
//! whole input in one call; nothing is shared between calls.
//!
//! ```
//! let input = b"AAAAAABBBBBBAAAAAABBBBBB\0";
//! let packed = lzwin::compress(input);
//! assert_eq!(lzwin::decompress(&packed).unwrap(), input);
//! ```

pub mod entropy;
pub mod error;
pub mod format;
pub mod lz;
pub mod sink;

pub use entropy::{EntropyStage, IdentityStage};
pub use error::{Error, Result};
pub use format::{CompressedStream, StreamHeader, Token};
pub use lz::{BruteForceMatchFinder, Decoder, Encoder, Match, MatchFinder, SlidingWindow};
pub use sink::ByteSink;

use format::{LENGTH_CODES, MAX_DISTANCE};

/// Named window/match-length presets
///
/// - `Fast`: 8 KiB window, matches of 3-64 bytes
/// - `Best`: 32 KiB window, matches of 3-258 bytes (slower search, longer reach)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CompressionProfile {
    /// 8 KiB window, matches up to 64 bytes
    #[default]
    Fast,
    /// 32 KiB window, matches up to 258 bytes
    Best,
}

impl CompressionProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Best => "best",
        }
    }
}

/// Parameters shared by the encoder and decoder
///
/// A stream can only be decoded with the `min_match_length` it was encoded
/// with, and a `max_match_length` at least as large.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Bytes of history searched for matches (1-65535)
    pub window_size: usize,
    /// Shortest match worth emitting
    pub min_match_length: usize,
    /// Longest match emitted (at most `min_match_length + 255`)
    pub max_match_length: usize,
}

impl CodecConfig {
    pub const fn from_profile(profile: CompressionProfile) -> Self {
        match profile {
            CompressionProfile::Fast => {
                Self { window_size: 8192, min_match_length: 3, max_match_length: 64 }
            }
            CompressionProfile::Best => {
                Self { window_size: 32768, min_match_length: 3, max_match_length: 258 }
            }
        }
    }

    /// Check that every value fits the stream format
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.window_size > MAX_DISTANCE {
            return Err(Error::InvalidConfig(format!(
                "window_size {} outside 1..={}",
                self.window_size, MAX_DISTANCE
            )));
        }
        if self.min_match_length == 0 {
            return Err(Error::InvalidConfig("min_match_length must be at least 1".into()));
        }
        if self.max_match_length < self.min_match_length {
            return Err(Error::InvalidConfig(format!(
                "max_match_length {} below min_match_length {}",
                self.max_match_length, self.min_match_length
            )));
        }
        if self.max_match_length - self.min_match_length >= LENGTH_CODES {
            return Err(Error::InvalidConfig(format!(
                "match length range {}..={} does not fit the 1-byte length field",
                self.min_match_length, self.max_match_length
            )));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::from_profile(CompressionProfile::default())
    }
}

/// Statistics from a compression call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub literals: u64,
    pub matches: u64,
}

impl CompressStats {
    /// Output size over input size (1.0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            1.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress `input` with the default profile
pub fn compress(input: &[u8]) -> Vec<u8> {
    Encoder::default().compress(input)
}

/// Decompress a stream produced with the default profile
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Decoder::default().decompress(data)
}

/// Compress `input` with an explicit configuration
pub fn compress_with(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    Ok(Encoder::new(*config)?.compress(input))
}

/// Decompress `data` with an explicit configuration
pub fn decompress_with(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    Decoder::new(*config)?.decompress(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_valid() {
        for profile in [CompressionProfile::Fast, CompressionProfile::Best] {
            CodecConfig::from_profile(profile).validate().unwrap();
        }
        assert_eq!(CodecConfig::default(), CodecConfig::from_profile(CompressionProfile::Fast));
    }

    #[test]
    fn test_profile_names() {
        use clap::ValueEnum;

        assert_eq!(CompressionProfile::from_str("BEST", true), Ok(CompressionProfile::Best));
        assert!(CompressionProfile::from_str("zstd", true).is_err());
        for profile in CompressionProfile::value_variants() {
            let value = profile.to_possible_value().unwrap();
            assert_eq!(value.get_name(), profile.name());
        }
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let base = CodecConfig::default();
        let bad = [
            CodecConfig { window_size: 0, ..base },
            CodecConfig { window_size: 65536, ..base },
            CodecConfig { min_match_length: 0, ..base },
            CodecConfig { min_match_length: 10, max_match_length: 9, ..base },
            CodecConfig { min_match_length: 3, max_match_length: 259, ..base },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))), "{:?}", config);
        }

        CodecConfig { window_size: 65535, min_match_length: 4, max_match_length: 259 }
            .validate()
            .unwrap();
    }

    #[test]
    fn test_stats_ratio() {
        assert_eq!(CompressStats::default().ratio(), 1.0);
        let stats = CompressStats { input_bytes: 100, output_bytes: 25, ..Default::default() };
        assert_eq!(stats.ratio(), 0.25);
    }
}
