//! # RustCrypto Backend (modern generation)
//!
//! Implements the backend contract over the RustCrypto elliptic-curve crates
//! (`p224`, `p256`, `p384`, `p521`). Prime-field curves only; the binary
//! B-*/K-* curves have no RustCrypto implementation and report
//! [`BackendError::UnsupportedCurve`].
//!
//! Point validation rides on `VerifyingKey::from_encoded_point`, which
//! rejects off-curve coordinates and the point at infinity. Signing uses the
//! prehash interface so the digest computed in [`super::digest_message`] is
//! exactly what gets signed; digests narrower than the field are zero-padded
//! first ([`pad_prehash`]) so every curve/hash combination is accepted.

use std::fmt;

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::elliptic_curve::generic_array::GenericArray;
use rand::rngs::OsRng;
use zeroize::{Zeroize, Zeroizing};

use crate::domain::codec;
use crate::domain::entities::{KeyCoordinates, Signature};
use crate::domain::resolver::{CurveId, HashId};
use crate::ports::outbound::{BackendError, CryptoBackend};

use super::digest_message;

/// Opaque key-pair handle: one signing key per supported prime curve.
#[derive(Clone)]
pub enum RustCryptoKeyPair {
    /// P-224 signing key
    P224(p224::ecdsa::SigningKey),
    /// P-256 signing key
    P256(p256::ecdsa::SigningKey),
    /// P-384 signing key
    P384(p384::ecdsa::SigningKey),
    /// P-521 signing key
    P521(p521::ecdsa::SigningKey),
}

/// Opaque public-key handle.
#[derive(Clone)]
pub enum RustCryptoPublicKey {
    /// P-224 verifying key
    P224(p224::ecdsa::VerifyingKey),
    /// P-256 verifying key
    P256(p256::ecdsa::VerifyingKey),
    /// P-384 verifying key
    P384(p384::ecdsa::VerifyingKey),
    /// P-521 verifying key
    P521(p521::ecdsa::VerifyingKey),
}

impl RustCryptoKeyPair {
    fn curve(&self) -> CurveId {
        match self {
            Self::P224(_) => CurveId::P224,
            Self::P256(_) => CurveId::P256,
            Self::P384(_) => CurveId::P384,
            Self::P521(_) => CurveId::P521,
        }
    }
}

impl RustCryptoPublicKey {
    fn curve(&self) -> CurveId {
        match self {
            Self::P224(_) => CurveId::P224,
            Self::P256(_) => CurveId::P256,
            Self::P384(_) => CurveId::P384,
            Self::P521(_) => CurveId::P521,
        }
    }
}

// Manual impls: the p521 signing key is not Debug, and key material must
// never land in logs anyway.
impl fmt::Debug for RustCryptoKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RustCryptoKeyPair({})", self.curve())
    }
}

impl fmt::Debug for RustCryptoPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RustCryptoPublicKey({})", self.curve())
    }
}

/// Left-pad a digest with zero bytes up to the curve's field width.
///
/// The `ecdsa` crate's prehash entry points reject digests shorter than half
/// the field width. Padding preserves the digest's integer value, which is
/// how the legacy generation already interprets a short digest, so the
/// resulting signatures stay cross-verifiable between generations.
fn pad_prehash(digest: &[u8], width: usize) -> Vec<u8> {
    if digest.len() >= width {
        return digest.to_vec();
    }
    let mut out = vec![0u8; width];
    out[width - digest.len()..].copy_from_slice(digest);
    out
}

/// The modern provider-based backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

impl RustCryptoBackend {
    /// Create the backend. Stateless; keys are the only state and they live
    /// in the caller's hands.
    pub fn new() -> Self {
        Self
    }
}

impl CryptoBackend for RustCryptoBackend {
    type KeyPair = RustCryptoKeyPair;
    type PublicKey = RustCryptoPublicKey;

    fn generate_keypair(&self, curve: CurveId) -> Result<Self::KeyPair, BackendError> {
        let key = match curve {
            CurveId::P224 => RustCryptoKeyPair::P224(p224::ecdsa::SigningKey::random(&mut OsRng)),
            CurveId::P256 => RustCryptoKeyPair::P256(p256::ecdsa::SigningKey::random(&mut OsRng)),
            CurveId::P384 => RustCryptoKeyPair::P384(p384::ecdsa::SigningKey::random(&mut OsRng)),
            CurveId::P521 => RustCryptoKeyPair::P521(p521::ecdsa::SigningKey::random(&mut OsRng)),
            other => return Err(BackendError::UnsupportedCurve(other)),
        };
        Ok(key)
    }

    fn import_public_key(
        &self,
        curve: CurveId,
        qx: &[u8],
        qy: &[u8],
    ) -> Result<Option<Self::PublicKey>, BackendError> {
        let width = curve.coordinate_bytes();
        // A coordinate wider than the field cannot name a curve point; that
        // is a semantic negative, not a backend fault.
        let (x, y) = match (codec::left_pad(qx, width), codec::left_pad(qy, width)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Ok(None),
        };

        macro_rules! import_arm {
            ($m:ident, $variant:ident) => {{
                let point = $m::EncodedPoint::from_affine_coordinates(
                    GenericArray::from_slice(&x),
                    GenericArray::from_slice(&y),
                    false,
                );
                match $m::ecdsa::VerifyingKey::from_encoded_point(&point) {
                    Ok(key) => Some(RustCryptoPublicKey::$variant(key)),
                    Err(_) => None,
                }
            }};
        }

        let key = match curve {
            CurveId::P224 => import_arm!(p224, P224),
            CurveId::P256 => import_arm!(p256, P256),
            CurveId::P384 => import_arm!(p384, P384),
            CurveId::P521 => import_arm!(p521, P521),
            other => return Err(BackendError::UnsupportedCurve(other)),
        };
        Ok(key)
    }

    fn sign_digest(
        &self,
        key: &Self::KeyPair,
        hash: HashId,
        message: &[u8],
    ) -> Result<Signature, BackendError> {
        let digest = digest_message(hash, message);
        let prehash = pad_prehash(&digest, key.curve().coordinate_bytes());

        macro_rules! sign_arm {
            ($m:ident, $sk:expr, $prehash:expr) => {{
                let sig: $m::ecdsa::Signature = $sk
                    .sign_prehash($prehash)
                    .map_err(|e| BackendError::Signing(e.to_string()))?;
                let (r, s) = sig.split_bytes();
                Signature {
                    r: codec::minimal(&r).to_vec(),
                    s: codec::minimal(&s).to_vec(),
                }
            }};
        }

        let sig = match key {
            RustCryptoKeyPair::P224(sk) => sign_arm!(p224, sk, &prehash),
            RustCryptoKeyPair::P256(sk) => sign_arm!(p256, sk, &prehash),
            RustCryptoKeyPair::P384(sk) => sign_arm!(p384, sk, &prehash),
            RustCryptoKeyPair::P521(sk) => sign_arm!(p521, sk, &prehash),
        };
        Ok(sig)
    }

    fn verify_signature(
        &self,
        key: &Self::PublicKey,
        hash: HashId,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool, BackendError> {
        let digest = digest_message(hash, message);
        let prehash = pad_prehash(&digest, key.curve().coordinate_bytes());

        macro_rules! verify_arm {
            ($m:ident, $vk:expr, $curve:expr, $prehash:expr) => {{
                let width = $curve.coordinate_bytes();
                // Oversized or out-of-range scalars are rejections, not
                // faults: adversarial vectors carry them on purpose.
                let (r, s) = match (
                    codec::left_pad(&signature.r, width),
                    codec::left_pad(&signature.s, width),
                ) {
                    (Ok(r), Ok(s)) => (r, s),
                    _ => return Ok(false),
                };
                let sig = match $m::ecdsa::Signature::from_scalars(
                    GenericArray::clone_from_slice(&r),
                    GenericArray::clone_from_slice(&s),
                ) {
                    Ok(sig) => sig,
                    Err(_) => return Ok(false),
                };
                $vk.verify_prehash($prehash, &sig).is_ok()
            }};
        }

        let ok = match key {
            RustCryptoPublicKey::P224(vk) => verify_arm!(p224, vk, CurveId::P224, &prehash),
            RustCryptoPublicKey::P256(vk) => verify_arm!(p256, vk, CurveId::P256, &prehash),
            RustCryptoPublicKey::P384(vk) => verify_arm!(p384, vk, CurveId::P384, &prehash),
            RustCryptoPublicKey::P521(vk) => verify_arm!(p521, vk, CurveId::P521, &prehash),
        };
        Ok(ok)
    }

    fn export_coordinates(&self, key: &Self::KeyPair) -> Result<KeyCoordinates, BackendError> {
        macro_rules! export_arm {
            ($m:ident, $sk:expr) => {{
                // Via From rather than the verifying_key() accessor, which
                // the p521 key wrapper does not expose.
                let vk = $m::ecdsa::VerifyingKey::from($sk);
                let point = vk.to_encoded_point(false);
                let x = point
                    .x()
                    .ok_or_else(|| BackendError::KeyExport("missing x coordinate".into()))?;
                let y = point
                    .y()
                    .ok_or_else(|| BackendError::KeyExport("missing y coordinate".into()))?;
                let mut raw = $sk.to_bytes();
                let d = Zeroizing::new(codec::minimal(&raw).to_vec());
                raw.zeroize();
                KeyCoordinates {
                    qx: codec::minimal(x.as_slice()).to_vec(),
                    qy: codec::minimal(y.as_slice()).to_vec(),
                    d: Some(d),
                }
            }};
        }

        let coords = match key {
            RustCryptoKeyPair::P224(sk) => export_arm!(p224, sk),
            RustCryptoKeyPair::P256(sk) => export_arm!(p256, sk),
            RustCryptoKeyPair::P384(sk) => export_arm!(p384, sk),
            RustCryptoKeyPair::P521(sk) => export_arm!(p521, sk),
        };
        Ok(coords)
    }
}
