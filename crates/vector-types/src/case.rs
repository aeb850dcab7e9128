//! # Test Case Model
//!
//! The unit of work handed to the oracle by the transport layer. Input
//! fields are filled by the vector source; output fields are filled by the
//! oracle in place. Which fields are inputs and which are outputs depends on
//! the operation:
//!
//! | Operation | Inputs                       | Outputs        |
//! |-----------|------------------------------|----------------|
//! | KeyGen    | curve                        | qx, qy, d      |
//! | KeyVer    | curve, qx, qy                | verified       |
//! | SigGen    | curve, hash, message         | r, s, qx, qy   |
//! | SigVer    | curve, hash, message, qx, qy, r, s | verified |

use serde::{Deserialize, Serialize};

use crate::field::FieldBuf;

/// The four ECDSA sub-operations a test case can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcdsaOperation {
    /// Generate a fresh key pair on the named curve.
    KeyGen,
    /// Decide whether a candidate public key is a valid point on the curve.
    KeyVer,
    /// Sign the message, reusing one key per test group.
    SigGen,
    /// Decide whether a candidate signature verifies.
    SigVer,
}

/// One normalized ECDSA test case.
///
/// Owned by the transport layer that created it; the oracle mutates it in
/// place and never retains a reference after the call returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Requested sub-operation.
    pub operation: EcdsaOperation,
    /// Test group this case belongs to. SigGen cases in the same group
    /// share one generated key; groups must arrive in contiguous order.
    pub group_id: u32,
    /// Case identifier within the vector set, for error attribution.
    pub case_id: u32,
    /// Protocol curve name, e.g. "P-256".
    pub curve: String,
    /// Protocol hash name, e.g. "SHA2-256". Present only for SigGen/SigVer.
    pub hash: Option<String>,
    /// Message bytes (input to SigGen/SigVer).
    pub message: Vec<u8>,
    /// Public key x-coordinate (input for KeyVer/SigVer, output for
    /// KeyGen/SigGen).
    pub qx: FieldBuf,
    /// Public key y-coordinate (input for KeyVer/SigVer, output for
    /// KeyGen/SigGen).
    pub qy: FieldBuf,
    /// Private key scalar (output, KeyGen only).
    pub d: FieldBuf,
    /// Signature r component (output for SigGen, input for SigVer).
    pub r: FieldBuf,
    /// Signature s component (output for SigGen, input for SigVer).
    pub s: FieldBuf,
    /// Accept/reject disposition (output, KeyVer/SigVer only).
    pub verified: Option<bool>,
}

impl TestCase {
    /// Create a case with the given operation and parameters, all data
    /// fields empty.
    pub fn new(operation: EcdsaOperation, group_id: u32, case_id: u32, curve: &str) -> Self {
        Self {
            operation,
            group_id,
            case_id,
            curve: curve.to_owned(),
            hash: None,
            message: Vec::new(),
            qx: FieldBuf::new(),
            qy: FieldBuf::new(),
            d: FieldBuf::new(),
            r: FieldBuf::new(),
            s: FieldBuf::new(),
            verified: None,
        }
    }

    /// Set the hash name, builder style.
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = Some(hash.to_owned());
        self
    }

    /// Set the message, builder style.
    pub fn with_message(mut self, message: &[u8]) -> Self {
        self.message = message.to_vec();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_case_has_empty_outputs() {
        let tc = TestCase::new(EcdsaOperation::KeyGen, 1, 1, "P-256");
        assert!(tc.qx.is_empty());
        assert!(tc.qy.is_empty());
        assert!(tc.d.is_empty());
        assert!(tc.r.is_empty());
        assert!(tc.s.is_empty());
        assert_eq!(tc.verified, None);
        assert_eq!(tc.hash, None);
    }

    #[test]
    fn test_builder_helpers() {
        let tc = TestCase::new(EcdsaOperation::SigGen, 2, 7, "P-384")
            .with_hash("SHA2-384")
            .with_message(b"hello");
        assert_eq!(tc.hash.as_deref(), Some("SHA2-384"));
        assert_eq!(tc.message, b"hello");
        assert_eq!(tc.group_id, 2);
        assert_eq!(tc.case_id, 7);
    }
}
