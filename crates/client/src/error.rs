//! Error types for API client operations
//!
//! Transport and server failures are a distinct category from integrity
//! failures and must never be conflated: "request failed" and "response
//! integrity check failed" surface differently to the user.

use promptsmith_integrity::IntegrityError;
use promptsmith_types::SessionError;
use thiserror::Error;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	Status { status_code: u16, reason: String },

	/// The backend rejected the bearer token; the session has been cleared
	#[error("Session expired or invalid")]
	Unauthorized,

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	/// The signed envelope did not verify; the payload was discarded
	#[error("Response integrity check failed: {0}")]
	Integrity(#[from] IntegrityError),

	#[error("Session store error: {0}")]
	Session(#[from] SessionError),

	#[error("Invalid URL: {reason}")]
	InvalidUrl { reason: String },
}

/// Result type for API client operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ApiError::Status { status_code, .. } => Some(*status_code),
			ApiError::Unauthorized => Some(401),
			ApiError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Whether this is an integrity failure rather than a transport or
	/// server problem
	pub fn is_integrity_failure(&self) -> bool {
		matches!(self, ApiError::Integrity(_))
	}
}
