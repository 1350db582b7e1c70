use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),

    #[error("Token not representable under this configuration: {0}")]
    InvalidToken(String),

    // Stream format errors
    #[error("Truncated header: expected 8 bytes, got {found}")]
    TruncatedHeader { found: usize },

    #[error("Compressed stream ends mid-token at offset {offset}")]
    TruncatedToken { offset: usize },

    #[error("Invalid token flag 0x{flag:02x} at offset {offset}")]
    InvalidTokenFlag { flag: u8, offset: usize },

    #[error("Match length {length} exceeds maximum {max}")]
    InvalidMatchLength { length: usize, max: usize },

    #[error("Token stream exhausted after {produced} of {expected} bytes")]
    TruncatedStream { expected: usize, produced: usize },

    #[error("Match overruns declared length: {produced} bytes produced, {expected} declared")]
    OutputOverrun { expected: usize, produced: usize },

    #[error("Unexpected data after final token at offset {offset}")]
    TrailingData { offset: usize },

    #[error("Declared length {0} does not fit in memory on this platform")]
    LengthOverflow(u64),

    // Reference errors
    #[error("Back-reference distance {distance} exceeds available output {available}")]
    CorruptReference { distance: usize, available: usize },

    // Resource errors
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
