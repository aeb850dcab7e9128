//! # OpenSSL Backend (legacy FIPS generation)
//!
//! Implements the backend contract over `EC_KEY`/`ECDSA_SIG` via the
//! `openssl` crate, matching the pre-provider FIPS module builds. This is the
//! only generation with binary-field (B-*/K-*) curve coverage.
//!
//! Digests are still computed by [`super::digest_message`]; OpenSSL only ever
//! signs and verifies the prehashed bytes, so this generation and the modern
//! one see bit-identical digests.

use openssl::bn::{BigNum, BigNumContext};
use openssl::ec::{EcGroup, EcKey};
use openssl::ecdsa::EcdsaSig;
use openssl::nid::Nid;
use openssl::pkey::{Private, Public};
use zeroize::Zeroizing;

use crate::domain::codec;
use crate::domain::entities::{KeyCoordinates, Signature};
use crate::domain::resolver::{CurveId, HashId};
use crate::ports::outbound::{BackendError, CryptoBackend};

use super::digest_message;

/// Opaque key-pair handle backed by a private `EC_KEY`.
pub struct OpenSslKeyPair {
    key: EcKey<Private>,
}

/// Opaque public-key handle backed by a public `EC_KEY`.
pub struct OpenSslPublicKey {
    key: EcKey<Public>,
}

/// The legacy `EC_KEY`-based backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSslBackend;

impl OpenSslBackend {
    pub fn new() -> Self {
        Self
    }
}

fn curve_nid(curve: CurveId) -> Nid {
    match curve {
        CurveId::P224 => Nid::SECP224R1,
        CurveId::P256 => Nid::X9_62_PRIME256V1,
        CurveId::P384 => Nid::SECP384R1,
        CurveId::P521 => Nid::SECP521R1,
        CurveId::B233 => Nid::SECT233R1,
        CurveId::B283 => Nid::SECT283R1,
        CurveId::B409 => Nid::SECT409R1,
        CurveId::B571 => Nid::SECT571R1,
        CurveId::K233 => Nid::SECT233K1,
        CurveId::K283 => Nid::SECT283K1,
        CurveId::K409 => Nid::SECT409K1,
        CurveId::K571 => Nid::SECT571K1,
    }
}

fn curve_group(curve: CurveId) -> Result<EcGroup, BackendError> {
    EcGroup::from_curve_name(curve_nid(curve))
        .map_err(|e| BackendError::Internal(e.to_string()))
}

impl CryptoBackend for OpenSslBackend {
    type KeyPair = OpenSslKeyPair;
    type PublicKey = OpenSslPublicKey;

    fn generate_keypair(&self, curve: CurveId) -> Result<Self::KeyPair, BackendError> {
        let group = curve_group(curve)?;
        let key = EcKey::generate(&group)
            .map_err(|e| BackendError::KeyGeneration(e.to_string()))?;
        Ok(OpenSslKeyPair { key })
    }

    fn import_public_key(
        &self,
        curve: CurveId,
        qx: &[u8],
        qy: &[u8],
    ) -> Result<Option<Self::PublicKey>, BackendError> {
        let group = curve_group(curve)?;
        let x = BigNum::from_slice(qx).map_err(|e| BackendError::Internal(e.to_string()))?;
        let y = BigNum::from_slice(qy).map_err(|e| BackendError::Internal(e.to_string()))?;

        // EC_KEY_set_public_key_affine_coordinates validates on-curve
        // membership; rejection is the semantic negative.
        match EcKey::from_public_key_affine_coordinates(&group, &x, &y) {
            Ok(key) => Ok(Some(OpenSslPublicKey { key })),
            Err(_) => Ok(None),
        }
    }

    fn sign_digest(
        &self,
        key: &Self::KeyPair,
        hash: HashId,
        message: &[u8],
    ) -> Result<Signature, BackendError> {
        let digest = digest_message(hash, message);
        let sig = EcdsaSig::sign(&digest, &key.key)
            .map_err(|e| BackendError::Signing(e.to_string()))?;
        Ok(Signature {
            r: sig.r().to_vec(),
            s: sig.s().to_vec(),
        })
    }

    fn verify_signature(
        &self,
        key: &Self::PublicKey,
        hash: HashId,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool, BackendError> {
        let digest = digest_message(hash, message);
        let (r, s) = match (
            BigNum::from_slice(&signature.r),
            BigNum::from_slice(&signature.s),
        ) {
            (Ok(r), Ok(s)) => (r, s),
            _ => return Ok(false),
        };
        let sig = match EcdsaSig::from_private_components(r, s) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };
        // ECDSA_do_verify distinguishes "bad signature" from "error", but
        // both land on the same disposition for a conformance vector.
        Ok(sig.verify(&digest, &key.key).unwrap_or(false))
    }

    fn export_coordinates(&self, key: &Self::KeyPair) -> Result<KeyCoordinates, BackendError> {
        let group = key.key.group();
        let mut ctx =
            BigNumContext::new().map_err(|e| BackendError::Internal(e.to_string()))?;
        let mut x = BigNum::new().map_err(|e| BackendError::Internal(e.to_string()))?;
        let mut y = BigNum::new().map_err(|e| BackendError::Internal(e.to_string()))?;
        key.key
            .public_key()
            .affine_coordinates(group, &mut x, &mut y, &mut ctx)
            .map_err(|e| BackendError::KeyExport(e.to_string()))?;

        let d = Zeroizing::new(key.key.private_key().to_vec());
        Ok(KeyCoordinates {
            qx: codec::minimal(&x.to_vec()).to_vec(),
            qy: codec::minimal(&y.to_vec()).to_vec(),
            d: Some(d),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_round_trip_prime_and_binary() {
        let backend = OpenSslBackend::new();
        for curve in [CurveId::P256, CurveId::P521, CurveId::B233, CurveId::K571] {
            let key = backend.generate_keypair(curve).unwrap();
            let coords = backend.export_coordinates(&key).unwrap();
            let pk = backend
                .import_public_key(curve, &coords.qx, &coords.qy)
                .unwrap()
                .unwrap();

            let msg = b"legacy generation round trip";
            let sig = backend.sign_digest(&key, HashId::Sha2_256, msg).unwrap();
            assert!(
                backend
                    .verify_signature(&pk, HashId::Sha2_256, msg, &sig)
                    .unwrap(),
                "{curve}: own signature rejected"
            );
        }
    }

    #[test]
    fn test_tampered_point_rejected() {
        let backend = OpenSslBackend::new();
        let key = backend.generate_keypair(CurveId::P256).unwrap();
        let coords = backend.export_coordinates(&key).unwrap();

        let mut qy = coords.qy.clone();
        let last = qy.len() - 1;
        qy[last] = qy[last].wrapping_add(1);

        assert!(backend
            .import_public_key(CurveId::P256, &coords.qx, &qy)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_bit_flipped_signature_fails() {
        let backend = OpenSslBackend::new();
        let key = backend.generate_keypair(CurveId::P384).unwrap();
        let coords = backend.export_coordinates(&key).unwrap();
        let pk = backend
            .import_public_key(CurveId::P384, &coords.qx, &coords.qy)
            .unwrap()
            .unwrap();

        let msg = b"tamper target";
        let mut sig = backend.sign_digest(&key, HashId::Sha2_384, msg).unwrap();
        let last = sig.r.len() - 1;
        sig.r[last] ^= 0x01;

        assert!(!backend
            .verify_signature(&pk, HashId::Sha2_384, msg, &sig)
            .unwrap());
    }
}
