//! Second-stage coding of token payloads.
//!
//! The LZ engine hands every token payload (one byte for a literal, three
//! bytes for a match) to an [`EntropyStage`] and writes whatever it produces.
//! The decoder asks the same stage to reverse it. A stage may keep state
//! between symbols but must be reset at the start of each stream and must
//! invert call for call: `decode(encode(x)) == x`.

use crate::error::{Error, Result};
use crate::sink::ByteSink;

pub trait EntropyStage {
    /// Clear any adaptive state before a new stream
    fn reset(&mut self) {}

    /// Encode one token payload, appending the result to `sink`
    fn encode(&mut self, payload: &[u8], sink: &mut ByteSink);

    /// Decode one token payload of `payload.len()` bytes from `input[pos..]`.
    ///
    /// Returns the number of input bytes consumed. Running out of input is a
    /// [`Error::TruncatedToken`].
    fn decode(&mut self, input: &[u8], pos: usize, payload: &mut [u8]) -> Result<usize>;
}

/// Pass-through stage: payload bytes are written unchanged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityStage;

impl EntropyStage for IdentityStage {
    #[inline]
    fn encode(&mut self, payload: &[u8], sink: &mut ByteSink) {
        sink.extend_from_slice(payload);
    }

    #[inline]
    fn decode(&mut self, input: &[u8], pos: usize, payload: &mut [u8]) -> Result<usize> {
        let end = pos + payload.len();
        let bytes = input.get(pos..end).ok_or(Error::TruncatedToken { offset: pos })?;
        payload.copy_from_slice(bytes);
        Ok(payload.len())
    }
}

impl<S: EntropyStage + ?Sized> EntropyStage for &mut S {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn encode(&mut self, payload: &[u8], sink: &mut ByteSink) {
        (**self).encode(payload, sink)
    }

    fn decode(&mut self, input: &[u8], pos: usize, payload: &mut [u8]) -> Result<usize> {
        (**self).decode(input, pos, payload)
    }
}

impl<S: EntropyStage + ?Sized> EntropyStage for Box<S> {
    fn reset(&mut self) {
        (**self).reset()
    }

    fn encode(&mut self, payload: &[u8], sink: &mut ByteSink) {
        (**self).encode(payload, sink)
    }

    fn decode(&mut self, input: &[u8], pos: usize, payload: &mut [u8]) -> Result<usize> {
        (**self).decode(input, pos, payload)
    }
}
