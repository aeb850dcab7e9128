//! # Fixed-Capacity Field Buffers
//!
//! Big-integer test-vector fields (`qx`, `qy`, `d`, `r`, `s`) travel as
//! big-endian byte strings with a declared maximum capacity. The capacity is
//! sized for the widest supported curve coordinate (B/K-571, 72 bytes); any
//! value wider than that is rejected, never truncated.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use thiserror::Error;

/// Capacity of every big-integer field, in bytes.
///
/// ceil(571 / 8) = 72: the coordinate width of the widest supported curves
/// (B-571 and K-571).
pub const MAX_FIELD_BYTES: usize = 72;

/// Error raised when a value does not fit a [`FieldBuf`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("value of {len} bytes exceeds field capacity of {capacity} bytes")]
pub struct FieldBufError {
    /// Length of the rejected value
    pub len: usize,
    /// Capacity of the buffer
    pub capacity: usize,
}

/// Fixed-capacity big-endian byte buffer for one big-integer field.
///
/// An empty buffer means "field not present"; output fields start empty and
/// are filled by the oracle.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBuf {
    #[serde_as(as = "Bytes")]
    bytes: [u8; MAX_FIELD_BYTES],
    len: usize,
}

impl FieldBuf {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            bytes: [0u8; MAX_FIELD_BYTES],
            len: 0,
        }
    }

    /// Create a buffer holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldBufError`] if `value` is wider than the capacity.
    pub fn from_slice(value: &[u8]) -> Result<Self, FieldBufError> {
        let mut buf = Self::new();
        buf.set(value)?;
        Ok(buf)
    }

    /// Replace the contents with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldBufError`] if `value` is wider than the capacity.
    pub fn set(&mut self, value: &[u8]) -> Result<usize, FieldBufError> {
        if value.len() > MAX_FIELD_BYTES {
            return Err(FieldBufError {
                len: value.len(),
                capacity: MAX_FIELD_BYTES,
            });
        }
        self.bytes[..value.len()].copy_from_slice(value);
        // The tail must stay zeroed: derived equality and serialization see
        // the whole array, and residue of a previous write (possibly a
        // private scalar) must not survive.
        self.bytes[value.len()..].fill(0);
        self.len = value.len();
        Ok(value.len())
    }

    /// The stored bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of bytes stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the field is absent.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.bytes = [0u8; MAX_FIELD_BYTES];
        self.len = 0;
    }
}

impl Default for FieldBuf {
    fn default() -> Self {
        Self::new()
    }
}
