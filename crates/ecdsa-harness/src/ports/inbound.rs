//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the oracle as seen from the surrounding test-harness
//! client.

use vector_types::TestCase;

use crate::domain::errors::OracleError;

/// Primary ECDSA test-case API.
///
/// The transport layer feeds normalized test cases through this trait one at
/// a time and reads results back out of the mutated case. Execution is
/// strictly sequential; implementations are not required to be thread-safe.
pub trait EcdsaTestApi {
    /// Process one test case to completion, writing its outputs in place.
    ///
    /// `Ok(())` covers every well-formed outcome, including a deliberate
    /// `verified = false` disposition. `Err` means the case itself could not
    /// be processed (bad input, backend failure) or — for structural errors
    /// ([`OracleError::is_structural`]) — that the run must stop.
    fn process_case(&mut self, case: &mut TestCase) -> Result<(), OracleError>;

    /// End-of-run teardown; discards any per-group key state.
    fn reset(&mut self);
}
