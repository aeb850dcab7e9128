//! # ECDSA Conformance-Test Oracle
//!
//! Given a normalized ECDSA test vector (key generation, public-key
//! verification, signature generation, or signature verification), this crate
//! drives an elliptic-curve backend to produce the outputs — or the
//! accept/reject disposition — that a validation protocol compares against
//! reference answers. Transport and JSON handling live outside this crate;
//! the collaborator hands in a [`vector_types::TestCase`] and reads the
//! mutated result back out.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): pure logic — curve/hash resolution,
//!   big-integer codec, group key cache
//! - **Ports Layer** (`ports/`): trait definitions for the inbound test API
//!   and the outbound crypto backend
//! - **Adapters Layer** (`adapters/`): one backend per crypto-library
//!   generation, selected at compile time by cargo feature
//! - **Service Layer** (`service.rs`): the operation dispatcher
//!
//! ## Backend selection
//!
//! Exactly one backend is compiled in: `backend-rustcrypto` (default),
//! `backend-openssl`, or — with no backend feature — a stub that reports
//! no capability. All backends are behaviorally interchangeable: identical
//! accept/reject decisions, valid (randomized) signatures.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{digest_message, DefaultBackend};
pub use domain::cache::{GroupEntry, GroupKeyCache};
pub use domain::entities::{KeyCoordinates, Signature};
pub use domain::errors::{CacheError, CodecError, OracleError, ResolveError};
pub use domain::resolver::{resolve_curve, resolve_hash, CurveId, HashId};
pub use ports::inbound::EcdsaTestApi;
pub use ports::outbound::{BackendError, CryptoBackend};
pub use service::{EcdsaOracle, RunReport};
