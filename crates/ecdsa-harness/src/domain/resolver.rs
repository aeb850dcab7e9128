//! # Curve/Hash Resolver
//!
//! Maps protocol-level curve and hash names to backend-neutral identifiers.
//! This module owns the authoritative enumeration of supported algorithms;
//! whether the *linked backend* can actually service a curve is a separate
//! question answered by the adapter (`BackendError::UnsupportedCurve`).
//!
//! Resolution failure is fatal to the current test case only, never to the
//! run.

use std::fmt;

use crate::domain::errors::ResolveError;

/// Backend-neutral curve identifier.
///
/// P-* are prime-field NIST curves, B-*/K-* are binary-field NIST curves
/// (pseudo-random and Koblitz respectively).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// NIST P-224 (secp224r1)
    P224,
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
    /// NIST B-233 (sect233r1)
    B233,
    /// NIST B-283 (sect283r1)
    B283,
    /// NIST B-409 (sect409r1)
    B409,
    /// NIST B-571 (sect571r1)
    B571,
    /// NIST K-233 (sect233k1)
    K233,
    /// NIST K-283 (sect283k1)
    K283,
    /// NIST K-409 (sect409k1)
    K409,
    /// NIST K-571 (sect571k1)
    K571,
}

impl CurveId {
    /// All supported curves, in protocol order.
    pub const ALL: [CurveId; 12] = [
        CurveId::P224,
        CurveId::P256,
        CurveId::P384,
        CurveId::P521,
        CurveId::B233,
        CurveId::B283,
        CurveId::B409,
        CurveId::B571,
        CurveId::K233,
        CurveId::K283,
        CurveId::K409,
        CurveId::K571,
    ];

    /// The protocol name this identifier resolves from.
    pub fn name(self) -> &'static str {
        match self {
            CurveId::P224 => "P-224",
            CurveId::P256 => "P-256",
            CurveId::P384 => "P-384",
            CurveId::P521 => "P-521",
            CurveId::B233 => "B-233",
            CurveId::B283 => "B-283",
            CurveId::B409 => "B-409",
            CurveId::B571 => "B-571",
            CurveId::K233 => "K-233",
            CurveId::K283 => "K-283",
            CurveId::K409 => "K-409",
            CurveId::K571 => "K-571",
        }
    }

    /// Width of one field coordinate in bytes: ceil(field bits / 8).
    pub fn coordinate_bytes(self) -> usize {
        match self {
            CurveId::P224 => 28,
            CurveId::P256 => 32,
            CurveId::P384 => 48,
            CurveId::P521 => 66,
            CurveId::B233 | CurveId::K233 => 30,
            CurveId::B283 | CurveId::K283 => 36,
            CurveId::B409 | CurveId::K409 => 52,
            CurveId::B571 | CurveId::K571 => 72,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend-neutral hash identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashId {
    /// SHA-1 (legacy, still exercised by validation vectors)
    Sha1,
    /// SHA2-224
    Sha2_224,
    /// SHA2-256
    Sha2_256,
    /// SHA2-384
    Sha2_384,
    /// SHA2-512
    Sha2_512,
    /// SHA2-512/224
    Sha2_512_224,
    /// SHA2-512/256
    Sha2_512_256,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

impl HashId {
    /// All supported hashes, in protocol order.
    pub const ALL: [HashId; 11] = [
        HashId::Sha1,
        HashId::Sha2_224,
        HashId::Sha2_256,
        HashId::Sha2_384,
        HashId::Sha2_512,
        HashId::Sha2_512_224,
        HashId::Sha2_512_256,
        HashId::Sha3_224,
        HashId::Sha3_256,
        HashId::Sha3_384,
        HashId::Sha3_512,
    ];

    /// The protocol name this identifier resolves from.
    pub fn name(self) -> &'static str {
        match self {
            HashId::Sha1 => "SHA-1",
            HashId::Sha2_224 => "SHA2-224",
            HashId::Sha2_256 => "SHA2-256",
            HashId::Sha2_384 => "SHA2-384",
            HashId::Sha2_512 => "SHA2-512",
            HashId::Sha2_512_224 => "SHA2-512/224",
            HashId::Sha2_512_256 => "SHA2-512/256",
            HashId::Sha3_224 => "SHA3-224",
            HashId::Sha3_256 => "SHA3-256",
            HashId::Sha3_384 => "SHA3-384",
            HashId::Sha3_512 => "SHA3-512",
        }
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a protocol curve name such as "P-256".
pub fn resolve_curve(name: &str) -> Result<CurveId, ResolveError> {
    CurveId::ALL
        .into_iter()
        .find(|c| c.name() == name)
        .ok_or_else(|| ResolveError::UnknownCurve(name.to_owned()))
}

/// Resolve a protocol hash name such as "SHA2-256".
pub fn resolve_hash(name: &str) -> Result<HashId, ResolveError> {
    HashId::ALL
        .into_iter()
        .find(|h| h.name() == name)
        .ok_or_else(|| ResolveError::UnknownHash(name.to_owned()))
}
