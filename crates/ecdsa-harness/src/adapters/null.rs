//! # Null Backend (stub generation)
//!
//! Linked when no crypto backend feature is enabled. Every operation
//! reports [`BackendError::NoCapability`]; the key handle types are
//! uninhabited, so the key-consuming operations are unreachable by
//! construction.

use crate::domain::entities::{KeyCoordinates, Signature};
use crate::domain::resolver::{CurveId, HashId};
use crate::ports::outbound::{BackendError, CryptoBackend};

/// Uninhabited key-pair handle; no value of this type can exist.
#[derive(Debug, Clone)]
pub enum NullKeyPair {}

/// Uninhabited public-key handle.
#[derive(Debug, Clone)]
pub enum NullPublicKey {}

/// Backend with no cryptographic capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoBackend for NullBackend {
    type KeyPair = NullKeyPair;
    type PublicKey = NullPublicKey;

    fn generate_keypair(&self, _curve: CurveId) -> Result<Self::KeyPair, BackendError> {
        Err(BackendError::NoCapability)
    }

    fn import_public_key(
        &self,
        _curve: CurveId,
        _qx: &[u8],
        _qy: &[u8],
    ) -> Result<Option<Self::PublicKey>, BackendError> {
        Err(BackendError::NoCapability)
    }

    fn sign_digest(
        &self,
        key: &Self::KeyPair,
        _hash: HashId,
        _message: &[u8],
    ) -> Result<Signature, BackendError> {
        match *key {}
    }

    fn verify_signature(
        &self,
        key: &Self::PublicKey,
        _hash: HashId,
        _message: &[u8],
        _signature: &Signature,
    ) -> Result<bool, BackendError> {
        match *key {}
    }

    fn export_coordinates(&self, key: &Self::KeyPair) -> Result<KeyCoordinates, BackendError> {
        match *key {}
    }
}
