//! Token framing: one raw flag byte, then the payload routed through the
//! entropy stage.

use super::constants::*;
use super::tokens::Token;
use crate::entropy::EntropyStage;
use crate::error::{Error, Result};
use crate::sink::ByteSink;
use crate::CodecConfig;

/// Serializes tokens into a sink
pub struct TokenWriter<'a, S: EntropyStage> {
    sink: &'a mut ByteSink,
    stage: S,
    min_match_len: usize,
}

impl<'a, S: EntropyStage> TokenWriter<'a, S> {
    pub fn new(sink: &'a mut ByteSink, stage: S, config: &CodecConfig) -> Self {
        Self { sink, stage, min_match_len: config.min_match_length }
    }

    /// Write one token. The token must already satisfy [`Token::validate`].
    pub fn write(&mut self, token: &Token) {
        match *token {
            Token::Literal(byte) => {
                self.sink.push(FLAG_LITERAL);
                self.stage.encode(&[byte], self.sink);
            }
            Token::Match { distance, length } => {
                debug_assert!(distance >= 1);
                debug_assert!((length as usize) >= self.min_match_len);

                let code = (length as usize - self.min_match_len) as u8;
                let [lo, hi] = distance.to_le_bytes();
                self.sink.push(FLAG_MATCH);
                self.stage.encode(&[code, lo, hi], self.sink);
            }
        }
    }
}

/// Parses tokens from a byte slice
pub struct TokenReader<'a, S: EntropyStage> {
    data: &'a [u8],
    pos: usize,
    stage: S,
    min_match_len: usize,
    max_match_len: usize,
}

impl<'a, S: EntropyStage> TokenReader<'a, S> {
    /// Create a reader over `data`, starting at byte offset `start`
    pub fn new(data: &'a [u8], start: usize, stage: S, config: &CodecConfig) -> Self {
        Self {
            data,
            pos: start,
            stage,
            min_match_len: config.min_match_length,
            max_match_len: config.max_match_length,
        }
    }

    /// Current byte offset into the data
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read the next token, or `None` at a clean end of data
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let flag_offset = self.pos;
        let flag = match self.data.get(flag_offset) {
            Some(&flag) => flag,
            None => return Ok(None),
        };
        self.pos += 1;

        match flag {
            FLAG_LITERAL => {
                let mut payload = [0u8; LITERAL_PAYLOAD_LEN];
                self.pos += self.stage.decode(self.data, self.pos, &mut payload)?;
                Ok(Some(Token::Literal(payload[0])))
            }
            FLAG_MATCH => {
                let mut payload = [0u8; MATCH_PAYLOAD_LEN];
                self.pos += self.stage.decode(self.data, self.pos, &mut payload)?;

                let length = payload[0] as usize + self.min_match_len;
                if length > self.max_match_len {
                    return Err(Error::InvalidMatchLength { length, max: self.max_match_len });
                }
                let distance = u16::from_le_bytes([payload[1], payload[2]]);
                Ok(Some(Token::Match { distance, length: length as u16 }))
            }
            flag => Err(Error::InvalidTokenFlag { flag, offset: flag_offset }),
        }
    }
}
