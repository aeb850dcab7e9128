//! # ECDSA Oracle Service
//!
//! The dispatcher that drives one test case end to end: resolve algorithm
//! names, consult the group key cache, call the linked crypto backend, and
//! write results back into the case.
//!
//! Semantic negatives (off-curve point, bad signature) are recorded as
//! `verified = false` and the call succeeds. `Err` is reserved for cases the
//! oracle could not process at all; structural errors
//! ([`OracleError::is_structural`]) additionally abort the whole run.

use tracing::{debug, warn};
use vector_types::{EcdsaOperation, TestCase};

use crate::adapters::DefaultBackend;
use crate::domain::cache::{GroupEntry, GroupKeyCache};
use crate::domain::codec;
use crate::domain::errors::OracleError;
use crate::domain::resolver::{self, HashId};
use crate::ports::inbound::EcdsaTestApi;
use crate::ports::outbound::{BackendError, CryptoBackend};

/// Outcome tally of a [`EcdsaOracle::process_all`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Cases processed to a disposition.
    pub processed: usize,
    /// Cases that failed with a per-case error and were skipped.
    pub failed: usize,
}

/// The conformance-test oracle.
///
/// Generic over the backend for tests; production code uses the
/// compile-time-selected [`DefaultBackend`].
pub struct EcdsaOracle<B: CryptoBackend = DefaultBackend> {
    backend: B,
    cache: GroupKeyCache<B::KeyPair>,
}

impl EcdsaOracle {
    /// Create an oracle over the backend generation linked into this build.
    pub fn new() -> Self {
        Self::with_backend(DefaultBackend::default())
    }
}

impl Default for EcdsaOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CryptoBackend> EcdsaOracle<B> {
    /// Create an oracle over an explicit backend instance.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            cache: GroupKeyCache::new(),
        }
    }

    /// Process one test case, writing its outputs in place.
    pub fn process(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        debug!(
            group = case.group_id,
            case = case.case_id,
            op = ?case.operation,
            curve = %case.curve,
            "processing test case"
        );
        match case.operation {
            EcdsaOperation::KeyGen => self.key_gen(case),
            EcdsaOperation::KeyVer => self.key_ver(case),
            EcdsaOperation::SigGen => self.sig_gen(case),
            EcdsaOperation::SigVer => self.sig_ver(case),
        }
    }

    /// Process a whole vector set in order.
    ///
    /// Per-case failures are logged and counted; a structural failure stops
    /// the run immediately.
    pub fn process_all(&mut self, cases: &mut [TestCase]) -> Result<RunReport, OracleError> {
        let mut report = RunReport::default();
        for case in cases.iter_mut() {
            match self.process(case) {
                Ok(()) => report.processed += 1,
                Err(e) if e.is_structural() => {
                    warn!(
                        group = case.group_id,
                        case = case.case_id,
                        error = %e,
                        "structural failure, aborting run"
                    );
                    return Err(e);
                }
                Err(e) => {
                    warn!(
                        group = case.group_id,
                        case = case.case_id,
                        error = %e,
                        "test case failed"
                    );
                    report.failed += 1;
                }
            }
        }
        Ok(report)
    }

    /// End-of-run teardown; discards the cached group key and its history.
    pub fn reset(&mut self) {
        self.cache.clear();
        debug!("oracle reset");
    }

    fn key_gen(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        let curve = resolver::resolve_curve(&case.curve)?;

        let key = self.backend.generate_keypair(curve)?;
        let coords = self.backend.export_coordinates(&key)?;
        let d = coords.d.as_ref().ok_or_else(|| {
            OracleError::Backend(BackendError::KeyExport(
                "private scalar unavailable from generated key".into(),
            ))
        })?;

        codec::encode(&coords.qx, &mut case.qx)?;
        codec::encode(&coords.qy, &mut case.qy)?;
        codec::encode(d, &mut case.d)?;
        Ok(())
    }

    fn key_ver(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        let curve = resolver::resolve_curve(&case.curve)?;
        let (qx, qy) = required_point(case)?;

        let imported = self.backend.import_public_key(curve, qx, qy)?;
        case.verified = Some(imported.is_some());
        Ok(())
    }

    fn sig_gen(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        let curve = resolver::resolve_curve(&case.curve)?;
        let hash = required_hash(case)?;

        if !self.cache.contains(case.group_id) {
            debug!(group = case.group_id, %curve, "generating group key");
            let key = self.backend.generate_keypair(curve)?;
            let coords = self.backend.export_coordinates(&key)?;
            self.cache.install(GroupEntry {
                group_id: case.group_id,
                key,
                qx: coords.qx.clone(),
                qy: coords.qy.clone(),
            })?;
        }
        let entry = self
            .cache
            .lookup(case.group_id)
            .ok_or(OracleError::CacheInconsistent(case.group_id))?;

        let sig = self.backend.sign_digest(&entry.key, hash, &case.message)?;

        codec::encode(&entry.qx, &mut case.qx)?;
        codec::encode(&entry.qy, &mut case.qy)?;
        codec::encode(&sig.r, &mut case.r)?;
        codec::encode(&sig.s, &mut case.s)?;
        Ok(())
    }

    fn sig_ver(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        let curve = resolver::resolve_curve(&case.curve)?;
        let hash = required_hash(case)?;
        let (qx, qy) = required_point(case)?;
        if case.r.is_empty() {
            return Err(OracleError::MissingField("r"));
        }
        if case.s.is_empty() {
            return Err(OracleError::MissingField("s"));
        }

        let Some(key) = self.backend.import_public_key(curve, qx, qy)? else {
            // An unusable candidate key is a reject disposition, not an
            // error; many vectors are built exactly this way.
            case.verified = Some(false);
            return Ok(());
        };

        let sig = crate::domain::entities::Signature {
            r: case.r.as_slice().to_vec(),
            s: case.s.as_slice().to_vec(),
        };
        let ok = self
            .backend
            .verify_signature(&key, hash, &case.message, &sig)?;
        case.verified = Some(ok);
        Ok(())
    }
}

impl<B: CryptoBackend> EcdsaTestApi for EcdsaOracle<B> {
    fn process_case(&mut self, case: &mut TestCase) -> Result<(), OracleError> {
        self.process(case)
    }

    fn reset(&mut self) {
        EcdsaOracle::reset(self)
    }
}

fn required_hash(case: &TestCase) -> Result<HashId, OracleError> {
    let name = case
        .hash
        .as_deref()
        .ok_or(OracleError::MissingField("hash"))?;
    Ok(resolver::resolve_hash(name)?)
}

fn required_point(case: &TestCase) -> Result<(&[u8], &[u8]), OracleError> {
    if case.qx.is_empty() {
        return Err(OracleError::MissingField("qx"));
    }
    if case.qy.is_empty() {
        return Err(OracleError::MissingField("qy"));
    }
    Ok((case.qx.as_slice(), case.qy.as_slice()))
}

#[cfg(all(test, feature = "backend-rustcrypto"))]
mod tests {
    use super::*;
    use vector_types::FieldBuf;

    fn key_gen_case(group: u32, case_id: u32, curve: &str) -> TestCase {
        TestCase::new(EcdsaOperation::KeyGen, group, case_id, curve)
    }

    fn sig_gen_case(group: u32, case_id: u32, msg: &[u8]) -> TestCase {
        TestCase::new(EcdsaOperation::SigGen, group, case_id, "P-256")
            .with_hash("SHA2-256")
            .with_message(msg)
    }

    // ------------------------------------------------------------------
    // KeyGen
    // ------------------------------------------------------------------

    #[test]
    fn test_key_gen_fills_all_outputs() {
        let mut oracle = EcdsaOracle::new();
        let mut case = key_gen_case(1, 1, "P-256");
        oracle.process(&mut case).unwrap();

        assert!(!case.qx.is_empty());
        assert!(!case.qy.is_empty());
        assert!(!case.d.is_empty());
        assert!(case.qx.len() <= 32);
        assert_eq!(case.verified, None);
    }

    #[test]
    fn test_key_gen_unknown_curve_is_per_case_error() {
        let mut oracle = EcdsaOracle::new();
        let mut case = key_gen_case(1, 1, "P-999");
        let err = oracle.process(&mut case).unwrap_err();
        assert!(matches!(err, OracleError::Resolve(_)));
        assert!(!err.is_structural());
    }

    // ------------------------------------------------------------------
    // KeyVer
    // ------------------------------------------------------------------

    #[test]
    fn test_key_ver_accepts_generated_key() {
        let mut oracle = EcdsaOracle::new();
        let mut gen = key_gen_case(1, 1, "P-384");
        oracle.process(&mut gen).unwrap();

        let mut ver = TestCase::new(EcdsaOperation::KeyVer, 2, 1, "P-384");
        ver.qx = gen.qx.clone();
        ver.qy = gen.qy.clone();
        oracle.process(&mut ver).unwrap();
        assert_eq!(ver.verified, Some(true));
    }

    #[test]
    fn test_key_ver_rejects_off_curve_point() {
        let mut oracle = EcdsaOracle::new();
        let mut gen = key_gen_case(1, 1, "P-256");
        oracle.process(&mut gen).unwrap();

        let mut qy = gen.qy.as_slice().to_vec();
        let last = qy.len() - 1;
        qy[last] = qy[last].wrapping_add(1);

        let mut ver = TestCase::new(EcdsaOperation::KeyVer, 2, 1, "P-256");
        ver.qx = gen.qx.clone();
        ver.qy = FieldBuf::from_slice(&qy).unwrap();
        oracle.process(&mut ver).unwrap();
        assert_eq!(ver.verified, Some(false));
    }

    #[test]
    fn test_key_ver_missing_coordinate_is_error() {
        let mut oracle = EcdsaOracle::new();
        let mut ver = TestCase::new(EcdsaOperation::KeyVer, 1, 1, "P-256");
        ver.qx = FieldBuf::from_slice(&[0x01; 32]).unwrap();
        // qy left absent.
        let err = oracle.process(&mut ver).unwrap_err();
        assert!(matches!(err, OracleError::MissingField("qy")));
    }

    // ------------------------------------------------------------------
    // SigGen and the group key cache
    // ------------------------------------------------------------------

    #[test]
    fn test_sig_gen_missing_hash_is_error() {
        let mut oracle = EcdsaOracle::new();
        let mut case = TestCase::new(EcdsaOperation::SigGen, 1, 1, "P-256")
            .with_message(b"no hash named");
        let err = oracle.process(&mut case).unwrap_err();
        assert!(matches!(err, OracleError::MissingField("hash")));
    }

    #[test]
    fn test_sig_gen_reuses_key_within_group() {
        let mut oracle = EcdsaOracle::new();
        let msg = [0u8; 32];
        let mut first = sig_gen_case(1, 1, &msg);
        let mut second = sig_gen_case(1, 2, &msg);
        oracle.process(&mut first).unwrap();
        oracle.process(&mut second).unwrap();

        // Same group, same key, identical reported coordinates.
        assert_eq!(first.qx, second.qx);
        assert_eq!(first.qy, second.qy);

        // Both signatures verify against the shared key.
        for (i, signed) in [&first, &second].into_iter().enumerate() {
            let mut ver = TestCase::new(EcdsaOperation::SigVer, 2, i as u32 + 1, "P-256")
                .with_hash("SHA2-256")
                .with_message(&msg);
            ver.qx = signed.qx.clone();
            ver.qy = signed.qy.clone();
            ver.r = signed.r.clone();
            ver.s = signed.s.clone();
            oracle.process(&mut ver).unwrap();
            assert_eq!(ver.verified, Some(true));
        }
    }

    #[test]
    fn test_sig_gen_output_verifies() {
        let mut oracle = EcdsaOracle::new();
        let mut gen = sig_gen_case(1, 1, b"sign then verify");
        oracle.process(&mut gen).unwrap();

        let mut ver = TestCase::new(EcdsaOperation::SigVer, 2, 1, "P-256")
            .with_hash("SHA2-256")
            .with_message(b"sign then verify");
        ver.qx = gen.qx.clone();
        ver.qy = gen.qy.clone();
        ver.r = gen.r.clone();
        ver.s = gen.s.clone();
        oracle.process(&mut ver).unwrap();
        assert_eq!(ver.verified, Some(true));
    }

    #[test]
    fn test_sig_gen_new_group_generates_new_key() {
        let mut oracle = EcdsaOracle::new();
        let mut a = sig_gen_case(1, 1, b"group one");
        let mut b = sig_gen_case(2, 1, b"group two");
        oracle.process(&mut a).unwrap();
        oracle.process(&mut b).unwrap();
        assert_ne!(a.qx, b.qx);
    }

    #[test]
    fn test_revisiting_group_is_structural_error() {
        let mut oracle = EcdsaOracle::new();
        oracle.process(&mut sig_gen_case(1, 1, b"one")).unwrap();
        oracle.process(&mut sig_gen_case(2, 1, b"two")).unwrap();

        let err = oracle.process(&mut sig_gen_case(1, 2, b"three")).unwrap_err();
        assert!(err.is_structural());
        assert!(matches!(err, OracleError::Sequence(_)));
    }

    #[test]
    fn test_reset_forgets_group_history() {
        let mut oracle = EcdsaOracle::new();
        oracle.process(&mut sig_gen_case(1, 1, b"one")).unwrap();
        oracle.process(&mut sig_gen_case(2, 1, b"two")).unwrap();
        oracle.reset();

        // A fresh run may reuse group ids.
        oracle.process(&mut sig_gen_case(1, 1, b"again")).unwrap();
    }

    // ------------------------------------------------------------------
    // SigVer
    // ------------------------------------------------------------------

    #[test]
    fn test_sig_ver_tampered_signature_is_reject_not_error() {
        let mut oracle = EcdsaOracle::new();
        let mut gen = sig_gen_case(1, 1, b"target");
        oracle.process(&mut gen).unwrap();

        let mut s = gen.s.as_slice().to_vec();
        let last = s.len() - 1;
        s[last] ^= 0x01;

        let mut ver = TestCase::new(EcdsaOperation::SigVer, 2, 1, "P-256")
            .with_hash("SHA2-256")
            .with_message(b"target");
        ver.qx = gen.qx.clone();
        ver.qy = gen.qy.clone();
        ver.r = gen.r.clone();
        ver.s = FieldBuf::from_slice(&s).unwrap();
        oracle.process(&mut ver).unwrap();
        assert_eq!(ver.verified, Some(false));
    }

    #[test]
    fn test_sig_ver_unusable_key_is_reject_not_error() {
        let mut oracle = EcdsaOracle::new();
        let mut ver = TestCase::new(EcdsaOperation::SigVer, 1, 1, "P-256")
            .with_hash("SHA2-256")
            .with_message(b"whatever");
        // A point that is almost certainly off-curve.
        ver.qx = FieldBuf::from_slice(&[0x02; 32]).unwrap();
        ver.qy = FieldBuf::from_slice(&[0x03; 32]).unwrap();
        ver.r = FieldBuf::from_slice(&[0x01; 32]).unwrap();
        ver.s = FieldBuf::from_slice(&[0x01; 32]).unwrap();
        oracle.process(&mut ver).unwrap();
        assert_eq!(ver.verified, Some(false));
    }

    #[test]
    fn test_sig_ver_missing_signature_component_is_error() {
        let mut oracle = EcdsaOracle::new();
        let mut gen = sig_gen_case(1, 1, b"msg");
        oracle.process(&mut gen).unwrap();

        let mut ver = TestCase::new(EcdsaOperation::SigVer, 2, 1, "P-256")
            .with_hash("SHA2-256")
            .with_message(b"msg");
        ver.qx = gen.qx.clone();
        ver.qy = gen.qy.clone();
        ver.r = gen.r.clone();
        // s left absent.
        let err = oracle.process(&mut ver).unwrap_err();
        assert!(matches!(err, OracleError::MissingField("s")));
    }

    // ------------------------------------------------------------------
    // Batch driver
    // ------------------------------------------------------------------

    #[test]
    fn test_process_all_counts_and_continues() {
        let mut oracle = EcdsaOracle::new();
        let mut cases = vec![
            key_gen_case(1, 1, "P-256"),
            key_gen_case(1, 2, "P-999"), // unknown curve, per-case failure
            sig_gen_case(2, 1, b"still runs"),
        ];
        let report = oracle.process_all(&mut cases).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.failed, 1);
        assert!(!cases[2].r.is_empty());
    }

    #[test]
    fn test_process_all_aborts_on_sequencing_violation() {
        let mut oracle = EcdsaOracle::new();
        let mut cases = vec![
            sig_gen_case(1, 1, b"a"),
            sig_gen_case(2, 1, b"b"),
            sig_gen_case(1, 2, b"c"), // out of order
            sig_gen_case(3, 1, b"never reached"),
        ];
        let err = oracle.process_all(&mut cases).unwrap_err();
        assert!(err.is_structural());
        // The case after the violation was never touched.
        assert!(cases[3].r.is_empty());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut oracle = EcdsaOracle::new();
        let api: &mut dyn EcdsaTestApi = &mut oracle;
        let mut case = key_gen_case(1, 1, "P-224");
        api.process_case(&mut case).unwrap();
        assert!(!case.d.is_empty());
        api.reset();
    }
}
