//! # Backend Adapters
//!
//! One adapter per supported crypto-library generation, selected at compile
//! time by cargo feature. Exactly one generation is linked into a build;
//! enabling two is a build error, and enabling none leaves the stub backend
//! that reports no capability.
//!
//! The message digest is computed here, with the same hash crates, for every
//! backend — the linked library only ever sees the digest. That keeps the
//! digest bit-identical across generations and keeps every protocol hash
//! available regardless of what the linked library can name.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::domain::resolver::HashId;

pub mod null;

#[cfg(feature = "backend-rustcrypto")]
pub mod rustcrypto;

#[cfg(feature = "backend-openssl")]
pub mod ossl_fips;

#[cfg(all(feature = "backend-rustcrypto", feature = "backend-openssl"))]
compile_error!(
    "features `backend-rustcrypto` and `backend-openssl` are mutually exclusive; \
     enable exactly one crypto backend"
);

/// The backend generation linked into this build.
#[cfg(feature = "backend-rustcrypto")]
pub type DefaultBackend = rustcrypto::RustCryptoBackend;

/// The backend generation linked into this build.
#[cfg(all(feature = "backend-openssl", not(feature = "backend-rustcrypto")))]
pub type DefaultBackend = ossl_fips::OpenSslBackend;

/// The backend generation linked into this build.
#[cfg(not(any(feature = "backend-rustcrypto", feature = "backend-openssl")))]
pub type DefaultBackend = null::NullBackend;

/// Hash `message` with the named algorithm.
pub fn digest_message(hash: HashId, message: &[u8]) -> Vec<u8> {
    match hash {
        HashId::Sha1 => Sha1::digest(message).to_vec(),
        HashId::Sha2_224 => Sha224::digest(message).to_vec(),
        HashId::Sha2_256 => Sha256::digest(message).to_vec(),
        HashId::Sha2_384 => Sha384::digest(message).to_vec(),
        HashId::Sha2_512 => Sha512::digest(message).to_vec(),
        HashId::Sha2_512_224 => Sha512_224::digest(message).to_vec(),
        HashId::Sha2_512_256 => Sha512_256::digest(message).to_vec(),
        HashId::Sha3_224 => Sha3_224::digest(message).to_vec(),
        HashId::Sha3_256 => Sha3_256::digest(message).to_vec(),
        HashId::Sha3_384 => Sha3_384::digest(message).to_vec(),
        HashId::Sha3_512 => Sha3_512::digest(message).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_lengths() {
        let cases = [
            (HashId::Sha1, 20),
            (HashId::Sha2_224, 28),
            (HashId::Sha2_256, 32),
            (HashId::Sha2_384, 48),
            (HashId::Sha2_512, 64),
            (HashId::Sha2_512_224, 28),
            (HashId::Sha2_512_256, 32),
            (HashId::Sha3_224, 28),
            (HashId::Sha3_256, 32),
            (HashId::Sha3_384, 48),
            (HashId::Sha3_512, 64),
        ];
        for (hash, len) in cases {
            assert_eq!(digest_message(hash, b"abc").len(), len, "{hash}");
        }
    }

    #[test]
    fn test_sha2_256_known_answer() {
        // FIPS 180-4 "abc" vector.
        let digest = digest_message(HashId::Sha2_256, b"abc");
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha3_256_known_answer() {
        let digest = digest_message(HashId::Sha3_256, b"abc");
        assert_eq!(
            hex::encode(digest),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }
}
