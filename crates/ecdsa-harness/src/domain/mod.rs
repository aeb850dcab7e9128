//! # Domain Layer
//!
//! Pure logic with no I/O and no dependency on any concrete crypto library:
//! algorithm-name resolution, big-integer marshalling, and the per-group key
//! cache.

pub mod cache;
pub mod codec;
pub mod entities;
pub mod errors;
pub mod resolver;
