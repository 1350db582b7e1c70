use crate::error::{Error, Result};

/// Smallest allocation made when an empty sink receives its first byte
const MIN_GROWTH: usize = 64;

/// Append-only output buffer
///
/// Growth doubles the capacity when full, so `push` is amortized O(1) and
/// previously written bytes keep their offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteSink {
    bytes: Vec<u8>,
}

impl ByteSink {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity) }
    }

    /// Append a single byte
    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.bytes.len() == self.bytes.capacity() {
            self.grow();
        }
        self.bytes.push(byte);
    }

    /// Append each byte of `bytes` in order
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// Append `length` bytes copied from `distance` bytes behind the end.
    ///
    /// Bytes are copied one at a time, so when `length > distance` the bytes
    /// written by this call are themselves re-read (run-length case).
    pub fn copy_back(&mut self, distance: usize, length: usize) -> Result<()> {
        let available = self.bytes.len();
        if distance == 0 || distance > available {
            return Err(Error::CorruptReference { distance, available });
        }

        let start = available - distance;
        for i in 0..length {
            let byte = self.bytes[start + i];
            self.push(byte);
        }
        Ok(())
    }

    /// Reserve room for `additional` more bytes, reporting allocation failure
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.bytes.try_reserve(additional)?;
        Ok(())
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Finish and hand the bytes to the caller
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    fn grow(&mut self) {
        let additional = self.bytes.capacity().max(MIN_GROWTH);
        self.bytes.reserve_exact(additional);
    }
}

impl AsRef<[u8]> for ByteSink {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<ByteSink> for Vec<u8> {
    fn from(sink: ByteSink) -> Self {
        sink.into_vec()
    }
}
