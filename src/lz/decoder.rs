use tracing::debug;

use crate::entropy::{EntropyStage, IdentityStage};
use crate::error::{Error, Result};
use crate::format::{CompressedStream, StreamHeader, Token, TokenReader, HEADER_SIZE};
use crate::sink::ByteSink;
use crate::{CodecConfig, CompressionProfile};

/// Rebuilds the original bytes from a framed token stream
///
/// Back-references are resolved against the output produced so far, so no
/// separate window is kept. Any inconsistency (truncation, bad flag, a
/// reference before the start of output, more or fewer bytes than the header
/// declares) aborts the call with an error.
pub struct Decoder<S: EntropyStage = IdentityStage> {
    config: CodecConfig,
    stage: S,
}

impl Decoder {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, stage: IdentityStage })
    }

    pub fn from_profile(profile: CompressionProfile) -> Self {
        Self { config: CodecConfig::from_profile(profile), stage: IdentityStage }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::from_profile(CompressionProfile::default())
    }
}

impl<S: EntropyStage> Decoder<S> {
    /// Create a decoder with a custom entropy stage
    pub fn with_stage(config: CodecConfig, stage: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, stage })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decompress a complete stream
    ///
    /// Decoding stops once the header's length has been produced, and the
    /// stream must end exactly there: any bytes left after the final token
    /// are rejected with [`Error::TrailingData`].
    pub fn decompress(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let result = self.decode_stream(data);
        match &result {
            Ok(output) => {
                debug!(input_bytes = data.len(), output_bytes = output.len(), "decompressed")
            }
            Err(e) => debug!(input_bytes = data.len(), error = %e, "decompression failed"),
        }
        result
    }

    fn decode_stream(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let header = StreamHeader::parse(data)?;
        let expected = header.original_len()?;

        // Every token carries at least its flag byte, which bounds the output
        // a truthful header can declare.
        let body_len = data.len() - HEADER_SIZE;
        let mut sink = ByteSink::new();
        sink.try_reserve(expected.min(body_len.saturating_mul(self.config.max_match_length)))?;

        self.stage.reset();
        let mut reader = TokenReader::new(data, HEADER_SIZE, &mut self.stage, &self.config);
        while sink.len() < expected {
            let token = reader
                .next_token()?
                .ok_or(Error::TruncatedStream { expected, produced: sink.len() })?;
            apply_token(&mut sink, token, expected)?;
        }

        if !reader.is_exhausted() {
            return Err(Error::TrailingData { offset: reader.position() });
        }

        Ok(sink.into_vec())
    }

    /// Replay an in-memory token stream with the same checks as [`Decoder::decompress`]
    pub fn replay(&self, stream: &CompressedStream) -> Result<Vec<u8>> {
        let expected = stream.header.original_len()?;
        let mut sink = ByteSink::new();
        sink.try_reserve(expected.min(stream.uncompressed_size()))?;

        let mut tokens = stream.tokens.iter();
        while sink.len() < expected {
            let token = tokens
                .next()
                .ok_or(Error::TruncatedStream { expected, produced: sink.len() })?;
            if let Token::Match { length, .. } = *token {
                let length = length as usize;
                if length < self.config.min_match_length || length > self.config.max_match_length {
                    return Err(Error::InvalidMatchLength {
                        length,
                        max: self.config.max_match_length,
                    });
                }
            }
            apply_token(&mut sink, *token, expected)?;
        }

        let surplus: usize = tokens.map(|t| t.uncompressed_size()).sum();
        if surplus > 0 {
            return Err(Error::OutputOverrun { expected, produced: expected + surplus });
        }

        Ok(sink.into_vec())
    }
}

/// Append the bytes one token stands for, refusing to pass `expected`
fn apply_token(sink: &mut ByteSink, token: Token, expected: usize) -> Result<()> {
    match token {
        Token::Literal(byte) => sink.push(byte),
        Token::Match { distance, length } => {
            let (distance, length) = (distance as usize, length as usize);
            if distance == 0 || distance > sink.len() {
                return Err(Error::CorruptReference { distance, available: sink.len() });
            }
            let produced = sink.len() + length;
            if produced > expected {
                return Err(Error::OutputOverrun { expected, produced });
            }
            sink.copy_back(distance, length)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lz::Encoder;

    /// Build a stream by hand: header then raw token bytes
    fn stream(original_length: u64, tokens: &[u8]) -> Vec<u8> {
        let mut data = original_length.to_le_bytes().to_vec();
        data.extend_from_slice(tokens);
        data
    }

    #[test]
    fn test_decode_literals() {
        let data = stream(3, &[0x00, b'a', 0x00, b'b', 0x00, b'c']);
        assert_eq!(Decoder::default().decompress(&data).unwrap(), b"abc");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(Decoder::default().decompress(&stream(0, &[])).unwrap(), b"");
    }

    #[test]
    fn test_decode_overlapping_match() {
        // "AB" then match distance 2, length 6 -> "ABABABAB"
        let data = stream(8, &[0x00, b'A', 0x00, b'B', 0x01, 0x03, 0x02, 0x00]);
        assert_eq!(Decoder::default().decompress(&data).unwrap(), b"ABABABAB");
    }

    #[test]
    fn test_truncated_header() {
        let result = Decoder::default().decompress(&[0x05, 0x00]);
        assert!(matches!(result, Err(Error::TruncatedHeader { found: 2 })));
    }

    #[test]
    fn test_truncated_stream() {
        let data = stream(5, &[0x00, b'a', 0x00, b'b']);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::TruncatedStream { expected: 5, produced: 2 })));
    }

    #[test]
    fn test_truncated_token() {
        let data = stream(5, &[0x00, b'a', 0x01, 0x00]);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::TruncatedToken { offset: 11 })));
    }

    #[test]
    fn test_reference_before_start() {
        let data = stream(5, &[0x00, b'a', 0x01, 0x00, 0x02, 0x00]);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::CorruptReference { distance: 2, available: 1 })));
    }

    #[test]
    fn test_zero_distance() {
        let data = stream(4, &[0x00, b'a', 0x01, 0x00, 0x00, 0x00]);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::CorruptReference { distance: 0, .. })));
    }

    #[test]
    fn test_match_overrun() {
        // Header says 3 bytes but the match would produce 1 + 5
        let data = stream(3, &[0x00, b'a', 0x01, 0x02, 0x01, 0x00]);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::OutputOverrun { expected: 3, produced: 6 })));
    }

    #[test]
    fn test_trailing_data() {
        let data = stream(1, &[0x00, b'a', 0x00, b'b']);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(result, Err(Error::TrailingData { offset: 10 })));
    }

    #[test]
    fn test_huge_declared_length() {
        // A lying header must fail on the missing tokens, not on allocation
        let data = stream(u64::MAX / 2, &[0x00, b'a']);
        let result = Decoder::default().decompress(&data);
        assert!(matches!(
            result,
            Err(Error::TruncatedStream { produced: 1, .. }) | Err(Error::LengthOverflow(_))
        ));
    }

    #[test]
    fn test_replay_matches_decompress() {
        let input = b"abracadabra abracadabra abracadabra";
        let mut encoder = Encoder::default();
        let tokens = encoder.tokenize(input);
        let packed = encoder.compress(input);

        let mut decoder = Decoder::default();
        assert_eq!(decoder.replay(&tokens).unwrap(), input);
        assert_eq!(decoder.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_replay_rejects_extra_tokens() {
        let stream = CompressedStream::new(
            StreamHeader::new(1),
            vec![Token::Literal(b'a'), Token::Literal(b'b')],
        );
        let result = Decoder::default().replay(&stream);
        assert!(matches!(result, Err(Error::OutputOverrun { expected: 1, produced: 2 })));
    }

    #[test]
    fn test_replay_rejects_bad_reference() {
        let stream = CompressedStream::new(
            StreamHeader::new(4),
            vec![Token::Literal(b'a'), Token::Match { distance: 3, length: 3 }],
        );
        let result = Decoder::default().replay(&stream);
        assert!(matches!(result, Err(Error::CorruptReference { distance: 3, available: 1 })));
    }

    #[test]
    fn test_cross_profile_decode() {
        // Both presets share the minimum match length, so a Fast stream
        // decodes under Best
        let input = b"mississippi mississippi mississippi";
        let packed = Encoder::from_profile(CompressionProfile::Fast).compress(input);
        let output = Decoder::from_profile(CompressionProfile::Best).decompress(&packed).unwrap();
        assert_eq!(output, input);
    }
}
