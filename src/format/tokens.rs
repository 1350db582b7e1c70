use crate::error::{Error, Result};
use crate::CodecConfig;

use super::header::StreamHeader;

/// A single token in the LZ77 stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// A literal byte
    Literal(u8),
    /// A back-reference: copy `length` bytes from `distance` bytes back
    Match { distance: u16, length: u16 },
}

impl Token {
    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => *length as usize,
        }
    }

    /// Check that this token is representable under `config`
    pub fn validate(&self, config: &CodecConfig) -> Result<()> {
        if let Token::Match { distance, length } = *self {
            let (distance, length) = (distance as usize, length as usize);
            if distance == 0 || distance > config.window_size {
                return Err(Error::InvalidToken(format!(
                    "distance {} outside 1..={}",
                    distance, config.window_size
                )));
            }
            if length < config.min_match_length || length > config.max_match_length {
                return Err(Error::InvalidToken(format!(
                    "length {} outside {}..={}",
                    length, config.min_match_length, config.max_match_length
                )));
            }
        }
        Ok(())
    }
}

/// A header plus the ordered tokens that reproduce `header.original_length` bytes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressedStream {
    pub header: StreamHeader,
    pub tokens: Vec<Token>,
}

impl CompressedStream {
    pub fn new(header: StreamHeader, tokens: Vec<Token>) -> Self {
        Self { header, tokens }
    }

    /// Total uncompressed size of the tokens
    pub fn uncompressed_size(&self) -> usize {
        self.tokens.iter().map(|t| t.uncompressed_size()).sum()
    }

    pub fn literal_count(&self) -> usize {
        self.tokens.iter().filter(|t| matches!(t, Token::Literal(_))).count()
    }

    pub fn match_count(&self) -> usize {
        self.tokens.len() - self.literal_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncompressed_size() {
        let stream = CompressedStream::new(
            StreamHeader::new(7),
            vec![Token::Literal(b'A'), Token::Match { distance: 1, length: 6 }],
        );
        assert_eq!(stream.uncompressed_size(), 7);
        assert_eq!(stream.literal_count(), 1);
        assert_eq!(stream.match_count(), 1);
    }

    #[test]
    fn test_validate_token() {
        let config = CodecConfig::default();

        assert!(Token::Literal(0).validate(&config).is_ok());
        assert!(Token::Match { distance: 1, length: 3 }.validate(&config).is_ok());
        assert!(Token::Match { distance: 8192, length: 64 }.validate(&config).is_ok());

        for bad in [
            Token::Match { distance: 0, length: 3 },
            Token::Match { distance: 8193, length: 3 },
            Token::Match { distance: 1, length: 2 },
            Token::Match { distance: 1, length: 65 },
        ] {
            assert!(matches!(bad.validate(&config), Err(Error::InvalidToken(_))), "{:?}", bad);
        }
    }
}
