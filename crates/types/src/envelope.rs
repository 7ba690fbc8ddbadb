//! Signed payload envelope wire format
//!
//! Endpoints flagged as "signed" wrap their JSON response body as
//! `{ "data": <payload>, "signature": "<hex>" }` where the signature is an
//! HMAC-SHA256 digest over the canonical encoding of `data`. The client must
//! verify the signature before handing `data` to application logic.

use serde::{Deserialize, Serialize};

/// Wire format pairing a payload with a signature over its canonical encoding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedEnvelope<T> {
	/// The payload produced by the backend; untrusted until verified
	pub data: T,

	/// Hex-encoded HMAC-SHA256 digest supplied by the issuer
	pub signature: String,
}

impl<T> SignedEnvelope<T> {
	/// Create a new envelope from a payload and its signature
	pub fn new(data: T, signature: String) -> Self {
		Self { data, signature }
	}

	/// Split the envelope into payload and signature
	pub fn into_parts(self) -> (T, String) {
		(self.data, self.signature)
	}
}
