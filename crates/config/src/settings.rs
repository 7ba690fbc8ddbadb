//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use promptsmith_types::SecretString;
use serde::{Deserialize, Serialize};

/// Main client settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub api: ApiSettings,
	pub logging: LoggingSettings,
	pub security: SecuritySettings,
}

/// Backend API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiSettings {
	/// Base URL of the PromptSmith backend
	pub base_url: String,

	/// Per-request timeout in milliseconds
	pub request_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Security configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SecuritySettings {
	/// Shared secret for HMAC response verification
	///
	/// Must match the secret the backend signs with, byte for byte; rotating
	/// it invalidates every signature issued under the previous value.
	///
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "PROMPTSMITH_HMAC_SECRET"}`
	/// - Plain value (tests only): `{"type": "plain", "value": "your-secret-here"}`
	pub integrity_secret: ConfigurableValue,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			api: ApiSettings {
				base_url: "http://localhost:8000".to_string(),
				request_timeout_ms: 5000,
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
			security: SecuritySettings {
				integrity_secret: ConfigurableValue::from_env("PROMPTSMITH_HMAC_SECRET"),
			},
		}
	}
}

impl Settings {
	/// Resolve the HMAC shared secret into a zeroizing wrapper
	pub fn get_integrity_secret_secure(&self) -> Result<SecretString, ConfigurableValueError> {
		self.security.integrity_secret.resolve_for_secret()
	}
}
