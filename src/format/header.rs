use super::constants::HEADER_SIZE;
use crate::error::{Error, Result};
use crate::sink::ByteSink;

/// Fixed-size stream header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamHeader {
    /// Total decompressed byte count
    pub original_length: u64,
}

impl StreamHeader {
    pub fn new(original_length: usize) -> Self {
        Self { original_length: original_length as u64 }
    }

    /// Write the header (8 bytes, little-endian)
    pub fn write(&self, sink: &mut ByteSink) {
        sink.extend_from_slice(&self.original_length.to_le_bytes());
    }

    /// Parse a header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        let bytes: [u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or(Error::TruncatedHeader { found: data.len() })?;
        Ok(Self { original_length: u64::from_le_bytes(bytes) })
    }

    /// Original length as a native size, if it fits
    pub fn original_len(&self) -> Result<usize> {
        usize::try_from(self.original_length)
            .map_err(|_| Error::LengthOverflow(self.original_length))
    }
}
