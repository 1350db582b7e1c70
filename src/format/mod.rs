//! Compressed stream layout.
//!
//! ```text
//! header   original_length   8 bytes, u64 little-endian
//! token    flag              1 byte, raw: 0 = literal, 1 = match
//! literal  byte              1 byte   (through the entropy stage)
//! match    length code       1 byte   (through the entropy stage)
//!          distance          2 bytes little-endian (through the entropy stage)
//! ```
//!
//! The length code is `length - min_match_length`, so one byte covers up to
//! 256 distinct lengths (3..=258 for the default minimum). Distances are
//! `1..=window_size`, never above 65535.

pub mod constants;
pub mod header;
pub mod stream;
pub mod tokens;

pub use constants::*;
pub use header::StreamHeader;
pub use stream::{TokenReader, TokenWriter};
pub use tokens::{CompressedStream, Token};
