//! # Outbound Ports (Driven Ports / SPI)
//!
//! The crypto-backend contract. One adapter per supported library
//! generation implements this trait; the build selects exactly one, and all
//! of them must be behaviorally interchangeable — identical accept/reject
//! decisions, valid (randomized) signatures — wherever the linked library
//! supports the requested curve.

use thiserror::Error;

use crate::domain::entities::{KeyCoordinates, Signature};
use crate::domain::resolver::{CurveId, HashId};

/// Error from the linked crypto backend.
///
/// These indicate an environment or build problem, not a test outcome; a
/// rejected point or signature is reported through the operation's normal
/// return value instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The linked library has no implementation of this curve
    #[error("curve {0} is not supported by the linked crypto backend")]
    UnsupportedCurve(CurveId),

    /// This build carries the stub backend with no crypto capability
    #[error("no cryptographic capability compiled into this build")]
    NoCapability,

    /// Key generation failed (entropy, allocation)
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Signing failed inside the backend
    #[error("signing failed: {0}")]
    Signing(String),

    /// Coordinate export from an opaque key handle failed
    #[error("key export failed: {0}")]
    KeyExport(String),

    /// Any other backend-internal failure
    #[error("backend failure: {0}")]
    Internal(String),
}

/// One crypto-library generation.
///
/// Key handles are opaque associated types so each generation can keep its
/// native representation; everything crossing the boundary is minimal
/// big-endian bytes.
pub trait CryptoBackend {
    /// Opaque full key-pair handle.
    type KeyPair;
    /// Opaque public-key handle.
    type PublicKey;

    /// Generate a fresh random key pair on the named curve.
    fn generate_keypair(&self, curve: CurveId) -> Result<Self::KeyPair, BackendError>;

    /// Validate that `(qx, qy)` is a point on the named curve (and not the
    /// point at infinity), returning a usable key handle if so.
    ///
    /// `Ok(None)` is the *semantic negative*: the candidate point is
    /// off-curve, out of field, or otherwise invalid. Many verification
    /// vectors are intentionally invalid, so this is an expected outcome,
    /// never an error.
    fn import_public_key(
        &self,
        curve: CurveId,
        qx: &[u8],
        qy: &[u8],
    ) -> Result<Option<Self::PublicKey>, BackendError>;

    /// Hash `message` with `hash` and sign the digest with the key pair.
    ///
    /// Nonces are library-default random; two signatures over the same input
    /// may differ, but both verify.
    fn sign_digest(
        &self,
        key: &Self::KeyPair,
        hash: HashId,
        message: &[u8],
    ) -> Result<Signature, BackendError>;

    /// Hash `message` with `hash` and verify `signature` against it.
    ///
    /// Returns `Ok(true)` only for a mathematically valid signature. Every
    /// rejection — malformed components, out-of-range scalars, wrong key,
    /// tampered message — is `Ok(false)`, never an error.
    fn verify_signature(
        &self,
        key: &Self::PublicKey,
        hash: HashId,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool, BackendError>;

    /// Extract the affine coordinates (and private scalar) from a key pair.
    fn export_coordinates(&self, key: &Self::KeyPair) -> Result<KeyCoordinates, BackendError>;
}
