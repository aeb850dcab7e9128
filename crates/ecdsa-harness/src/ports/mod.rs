//! # Ports Layer
//!
//! Trait boundaries of the oracle: the inbound test-case API the transport
//! layer drives, and the outbound crypto-backend contract the adapters
//! implement.

pub mod inbound;
pub mod outbound;
