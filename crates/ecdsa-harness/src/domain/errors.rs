//! # Oracle Errors
//!
//! Error types for the dispatcher and the pure domain components. The
//! taxonomy matters more than the messages: input errors and backend errors
//! abort one test case, sequencing errors abort the run, and semantic
//! negatives (invalid point, bad signature) are *not* errors at all — they
//! are recorded as `verified = false` on the test case.

use thiserror::Error;
use vector_types::FieldBufError;

use crate::ports::outbound::BackendError;

/// A protocol algorithm name the resolver does not know.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The curve name is not in the supported enumeration
    #[error("unknown curve name {0:?}")]
    UnknownCurve(String),

    /// The hash name is not in the supported enumeration
    #[error("unknown hash name {0:?}")]
    UnknownHash(String),
}

/// A big-integer value that does not fit its destination.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Minimal encoding wider than the destination capacity
    #[error("big-integer of {len} bytes exceeds capacity of {capacity} bytes")]
    Overflow {
        /// Width of the minimal encoding
        len: usize,
        /// Capacity of the destination
        capacity: usize,
    },
}

impl From<FieldBufError> for CodecError {
    fn from(e: FieldBufError) -> Self {
        CodecError::Overflow {
            len: e.len,
            capacity: e.capacity,
        }
    }
}

/// A violation of the group key cache sequencing contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// A test group reappeared after its key was discarded. Cases of one
    /// group must arrive contiguously; regenerating the key mid-group would
    /// silently change results, so this fails loudly instead.
    #[error("test group {0} revisited after its key was discarded; cases are out of order")]
    RevisitedGroup(u32),
}

/// Failure of one dispatcher call.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Curve or hash name could not be resolved (input error, per-case)
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A field required by the requested operation is absent (per-case)
    #[error("test case is missing required field `{0}`")]
    MissingField(&'static str),

    /// The linked crypto backend failed (per-case, but likely to repeat)
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A value did not fit its test-case buffer (per-case)
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Group sequencing contract violated (structural, aborts the run)
    #[error(transparent)]
    Sequence(#[from] CacheError),

    /// The cache lost an entry it was just asked to hold. Should never
    /// happen given the sequencing invariant (structural, aborts the run).
    #[error("group key cache lost its entry for group {0}")]
    CacheInconsistent(u32),
}

impl OracleError {
    /// Whether this failure must abort the whole run rather than one case.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            OracleError::Sequence(_) | OracleError::CacheInconsistent(_)
        )
    }
}
