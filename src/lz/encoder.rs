use tracing::debug;

use super::matcher::{BruteForceMatchFinder, MatchFinder};
use super::window::SlidingWindow;
use crate::entropy::{EntropyStage, IdentityStage};
use crate::error::Result;
use crate::format::{CompressedStream, StreamHeader, Token, TokenWriter, HEADER_SIZE};
use crate::sink::ByteSink;
use crate::{CodecConfig, CompressStats, CompressionProfile};

/// Greedy single-pass LZ77 encoder
///
/// At each position the longest match in the window is taken if it reaches
/// the minimum length; otherwise one literal is emitted. There is no lazy
/// evaluation and no backtracking.
pub struct Encoder<F: MatchFinder = BruteForceMatchFinder, S: EntropyStage = IdentityStage> {
    config: CodecConfig,
    finder: F,
    stage: S,
}

impl Encoder {
    /// Create an encoder with the default finder and entropy stage
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub fn from_profile(profile: CompressionProfile) -> Self {
        Self::from_valid_config(CodecConfig::from_profile(profile))
    }

    fn from_valid_config(config: CodecConfig) -> Self {
        let finder = BruteForceMatchFinder::new(config.min_match_length, config.max_match_length);
        Self { config, finder, stage: IdentityStage }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::from_profile(CompressionProfile::default())
    }
}

impl<F: MatchFinder, S: EntropyStage> Encoder<F, S> {
    /// Create an encoder with a custom match finder and entropy stage
    pub fn with_parts(config: CodecConfig, finder: F, stage: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, finder, stage })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `input` into a framed stream
    pub fn compress(&mut self, input: &[u8]) -> Vec<u8> {
        self.compress_with_stats(input).0
    }

    /// Compress `input` and report token counts and sizes
    pub fn compress_with_stats(&mut self, input: &[u8]) -> (Vec<u8>, CompressStats) {
        let mut sink = ByteSink::with_capacity(HEADER_SIZE + input.len() / 2 + 16);
        StreamHeader::new(input.len()).write(&mut sink);

        let mut stats = CompressStats { input_bytes: input.len() as u64, ..Default::default() };

        self.stage.reset();
        let mut writer = TokenWriter::new(&mut sink, &mut self.stage, &self.config);
        scan(&mut self.finder, &self.config, input, |token| {
            match token {
                Token::Literal(_) => stats.literals += 1,
                Token::Match { .. } => stats.matches += 1,
            }
            writer.write(&token);
        });

        stats.output_bytes = sink.len() as u64;
        debug!(
            input_bytes = stats.input_bytes,
            output_bytes = stats.output_bytes,
            literals = stats.literals,
            matches = stats.matches,
            "compressed"
        );

        (sink.into_vec(), stats)
    }

    /// Run the match loop and collect the tokens without serializing them
    pub fn tokenize(&mut self, input: &[u8]) -> CompressedStream {
        let mut tokens = Vec::new();
        scan(&mut self.finder, &self.config, input, |token| tokens.push(token));
        CompressedStream::new(StreamHeader::new(input.len()), tokens)
    }

    /// Serialize an existing token stream through this encoder's entropy stage.
    ///
    /// Unlike [`Encoder::compress`], the tokens are not trusted: any token the
    /// configuration cannot represent is rejected.
    pub fn serialize(&mut self, stream: &CompressedStream) -> Result<Vec<u8>> {
        for token in &stream.tokens {
            token.validate(&self.config)?;
        }

        let mut sink = ByteSink::with_capacity(HEADER_SIZE + stream.tokens.len() * 2);
        stream.header.write(&mut sink);

        self.stage.reset();
        let mut writer = TokenWriter::new(&mut sink, &mut self.stage, &self.config);
        for token in &stream.tokens {
            writer.write(token);
        }

        Ok(sink.into_vec())
    }
}

/// Greedy leftmost-longest tokenization of `input` with a fresh window
///
/// The finder only ever sees `max_match_length` bytes of lookahead, and any
/// match it returns outside the configured length range or beyond the filled
/// window is replaced by a literal, so every emitted token is representable.
fn scan<F: MatchFinder>(
    finder: &mut F,
    config: &CodecConfig,
    input: &[u8],
    mut emit: impl FnMut(Token),
) {
    let mut window = SlidingWindow::new(config.window_size);
    let mut cursor = 0;

    while cursor < input.len() {
        let end = input.len().min(cursor + config.max_match_length);
        let lookahead = &input[cursor..end];
        let found = finder.find_longest_match(&window, lookahead);

        let in_range = found.length >= config.min_match_length
            && found.length <= lookahead.len()
            && found.distance >= 1
            && found.distance <= window.available();

        if in_range {
            emit(Token::Match { distance: found.distance as u16, length: found.length as u16 });
            window.push_bytes(&lookahead[..found.length]);
            cursor += found.length;
        } else {
            emit(Token::Literal(lookahead[0]));
            window.push_byte(lookahead[0]);
            cursor += 1;
        }
    }
}
