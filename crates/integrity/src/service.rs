//! HMAC-SHA256 signing and verification over canonical payloads
//!
//! A pure function of (payload, signature, secret): no state is kept between
//! calls, so a single service instance can be shared across concurrent
//! response handlers. A failed verification is a terminal trust decision for
//! that response, not a transient condition to retry.

use crate::canonical::canonicalize;
use hmac::{Hmac, Mac};
use promptsmith_types::{SecretString, SignedEnvelope};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;
use std::fmt::Write;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Errors that can occur during integrity operations
#[derive(Debug, Error)]
pub enum IntegrityError {
	#[error("Failed to create HMAC: {0}")]
	HmacCreation(String),

	#[error("Response integrity check failed")]
	VerificationFailed,

	#[error("Signature is not a valid hex digest")]
	MalformedSignature,

	#[error("Payload serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
pub trait IntegrityTrait: Send + Sync {
	/// Compute the lowercase hex HMAC-SHA256 digest over the canonical form
	/// of `data`
	fn sign_value(&self, data: &Value) -> Result<String, IntegrityError>;

	/// Compare `signature` against the recomputed digest for `data`
	///
	/// Malformed or wrong-length signatures yield `Ok(false)`: attacker
	/// controlled input never raises an error here, it only fails closed.
	fn verify_value(&self, data: &Value, signature: &str) -> Result<bool, IntegrityError>;

	/// Gate a signed envelope, classifying the failure mode
	///
	/// Returns `MalformedSignature` for non-hex input and
	/// `VerificationFailed` for a digest mismatch. Callers must treat any
	/// error as "reject payload".
	fn check_envelope(&self, envelope: &SignedEnvelope<Value>) -> Result<(), IntegrityError>;
}

/// HMAC-SHA256 signer/verifier bound to a shared secret
///
/// The secret is provisioned at deploy time through configuration; see the
/// config crate. Note that a symmetric secret reachable from client code can
/// forge signatures, so any real trust boundary needs server-side
/// verification or asymmetric signatures instead.
pub struct IntegrityService {
	secret_key: SecretString,
}

impl IntegrityService {
	/// Create a new integrity service with the given shared secret
	pub fn new(secret_key: SecretString) -> Self {
		Self { secret_key }
	}

	fn compute_digest(&self, canonical: &str) -> Result<Vec<u8>, IntegrityError> {
		let mut mac = HmacSha256::new_from_slice(self.secret_key.expose_secret().as_bytes())
			.map_err(|e| IntegrityError::HmacCreation(e.to_string()))?;
		mac.update(canonical.as_bytes());
		Ok(mac.finalize().into_bytes().to_vec())
	}

	/// Sign any serializable payload
	pub fn sign<T: Serialize>(&self, data: &T) -> Result<String, IntegrityError> {
		self.sign_value(&serde_json::to_value(data)?)
	}

	/// Verify any serializable payload against a supplied signature
	pub fn verify<T: Serialize>(&self, data: &T, signature: &str) -> Result<bool, IntegrityError> {
		self.verify_value(&serde_json::to_value(data)?, signature)
	}

	/// Open a signed envelope: verify first, deserialize only on success
	pub fn open_envelope<T: DeserializeOwned>(
		&self,
		envelope: SignedEnvelope<Value>,
	) -> Result<T, IntegrityError> {
		self.check_envelope(&envelope)?;
		Ok(serde_json::from_value(envelope.data)?)
	}
}

impl IntegrityTrait for IntegrityService {
	fn sign_value(&self, data: &Value) -> Result<String, IntegrityError> {
		let digest = self.compute_digest(&canonicalize(data))?;

		let mut hex_string = String::with_capacity(digest.len() * 2);
		for byte in digest {
			write!(&mut hex_string, "{:02x}", byte)
				.map_err(|e| IntegrityError::HmacCreation(format!("Failed to format hex: {}", e)))?;
		}

		Ok(hex_string)
	}

	fn verify_value(&self, data: &Value, signature: &str) -> Result<bool, IntegrityError> {
		let expected = self.compute_digest(&canonicalize(data))?;

		let supplied = match hex::decode(signature) {
			Ok(bytes) => bytes,
			Err(_) => return Ok(false),
		};

		Ok(constant_time_eq(&expected, &supplied))
	}

	fn check_envelope(&self, envelope: &SignedEnvelope<Value>) -> Result<(), IntegrityError> {
		if hex::decode(&envelope.signature).is_err() {
			return Err(IntegrityError::MalformedSignature);
		}

		if self.verify_value(&envelope.data, &envelope.signature)? {
			Ok(())
		} else {
			Err(IntegrityError::VerificationFailed)
		}
	}
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	let mut result = 0u8;
	for (x, y) in a.iter().zip(b.iter()) {
		result |= x ^ y;
	}
	result == 0
}
