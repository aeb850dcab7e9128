//! # Domain Entities
//!
//! Transient values exchanged between the dispatcher and the backend
//! adapters. Big integers are minimal big-endian magnitudes ([`crate::domain::codec`]).

use zeroize::Zeroizing;

/// An ECDSA signature as the pair of scalar components.
///
/// In a valid signature both components are in `[1, n-1]` for the curve
/// order `n`, but adversarial vectors may carry anything; range checking is
/// the verifier's job, not this type's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// r component, minimal big-endian
    pub r: Vec<u8>,
    /// s component, minimal big-endian
    pub s: Vec<u8>,
}

/// Affine coordinates (and optionally the private scalar) extracted from an
/// opaque backend key handle.
///
/// The private scalar is wrapped in [`Zeroizing`] so it is wiped as soon as
/// the coordinates are dropped, on every exit path.
#[derive(Clone, Debug)]
pub struct KeyCoordinates {
    /// Public x-coordinate, minimal big-endian
    pub qx: Vec<u8>,
    /// Public y-coordinate, minimal big-endian
    pub qy: Vec<u8>,
    /// Private scalar, present only when exported from a full key pair
    pub d: Option<Zeroizing<Vec<u8>>>,
}
