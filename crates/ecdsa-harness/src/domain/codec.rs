//! # Big-Integer Codec
//!
//! Conversions between the fixed-capacity big-endian buffers carried in test
//! cases and the byte representations the backends work with. Values are
//! non-negative magnitudes; there is no sign byte.
//!
//! The canonical encoding is minimal big-endian (no leading zero padding),
//! with one deliberate exception: zero encodes as a single `0x00` byte rather
//! than an empty buffer, so "value is zero" and "field absent" stay
//! distinguishable.

use vector_types::FieldBuf;

use crate::domain::errors::CodecError;

/// Strip leading zero bytes, yielding the minimal big-endian magnitude.
///
/// Zero (all-zero or empty input) yields an empty slice; callers that need
/// the canonical single-byte form go through [`encode`].
pub fn minimal(bytes: &[u8]) -> &[u8] {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    &bytes[zeros..]
}

/// Write `value` into `out` in canonical minimal form, returning the number
/// of bytes written.
///
/// # Errors
///
/// [`CodecError::Overflow`] if the minimal form is wider than the buffer
/// capacity.
pub fn encode(value: &[u8], out: &mut FieldBuf) -> Result<usize, CodecError> {
    let m = minimal(value);
    let written = if m.is_empty() {
        out.set(&[0u8])?
    } else {
        out.set(m)?
    };
    Ok(written)
}

/// Left-pad `value` to exactly `width` bytes, the fixed-width field-element
/// form backends consume.
///
/// # Errors
///
/// [`CodecError::Overflow`] if the minimal form of `value` is wider than
/// `width`.
pub fn left_pad(value: &[u8], width: usize) -> Result<Vec<u8>, CodecError> {
    let m = minimal(value);
    if m.len() > width {
        return Err(CodecError::Overflow {
            len: m.len(),
            capacity: width,
        });
    }
    let mut out = vec![0u8; width];
    out[width - m.len()..].copy_from_slice(m);
    Ok(out)
}
