//! # Vector Types Crate
//!
//! This crate contains the normalized ECDSA test-vector model shared between
//! the oracle and the transport layer that feeds it.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the `TestCase` structure defined here is the
//!   unit of work everywhere in the harness.
//! - **In-place mutation**: the oracle fills output fields on the same object
//!   the transport handed in; it never retains a reference afterwards.
//! - **Fixed capacities**: every big-integer field is carried in a
//!   [`FieldBuf`] sized for the widest supported curve, so an oversized value
//!   is a detectable error rather than a silent truncation.

pub mod case;
pub mod field;

pub use case::{EcdsaOperation, TestCase};
pub use field::{FieldBuf, FieldBufError, MAX_FIELD_BYTES};
