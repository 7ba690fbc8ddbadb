//! PromptSmith Integrity
//!
//! The signed payload verifier: canonical JSON encoding plus HMAC-SHA256
//! signing and verification for response envelopes. The backend computes
//! `signature = HMAC(secret, canonicalize(payload))` and ships
//! `{data, signature}`; this crate recomputes the canonical form
//! independently and compares digests before the payload is trusted.

pub mod canonical;
pub mod service;

pub use canonical::canonicalize;
pub use service::{IntegrityError, IntegrityService, IntegrityTrait};
