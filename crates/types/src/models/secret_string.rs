//! Secure string handling for the HMAC shared secret and bearer tokens
//!
//! Provides a `SecretString` type that uses zeroize to clear sensitive data
//! from memory when dropped, and that redacts itself in logs and serialized
//! output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string that zeroizes its contents when dropped
///
/// Holds the HMAC shared secret and session bearer tokens. `Debug`,
/// `Display`, and `Serialize` all emit `[REDACTED]` so a secret can never
/// leak through a log line or a serialized settings dump.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Create a new `SecretString` from a string slice
	pub fn from_str(secret: &str) -> Self {
		Self::new(secret.to_string())
	}

	/// Expose the secret value
	///
	/// Use sparingly; the only legitimate consumers are the HMAC keying path
	/// and the `Authorization` header builder.
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	/// Get the length of the secret without exposing it
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Check if the secret is empty without exposing it
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::from_str(secret)
	}
}

// Serialization always redacts; secrets travel through config, not JSON.
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secret = String::deserialize(deserializer)?;
		Ok(SecretString::new(secret))
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		// Constant-time comparison to avoid timing attacks
		constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
	}
}

impl Eq for SecretString {}

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
