//! Configurable values that resolve from environment variables or plain text
//!
//! The HMAC shared secret must never be hardcoded into source shipped to
//! clients, so secret-bearing settings are expressed as a `ConfigurableValue`
//! and resolved at startup.

use promptsmith_types::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be loaded from an environment variable or used as-is
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfigurableValue {
	/// "env" to read an environment variable, "plain" for a direct value
	#[serde(rename = "type")]
	pub value_type: ValueType,

	/// Environment variable name, or the value itself
	pub value: String,
}

/// Type of configurable value
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	/// Load from the environment variable named in `value`
	Env,
	/// Use `value` directly
	Plain,
}

impl ConfigurableValue {
	/// Reference an environment variable
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	/// Use a plain value directly
	///
	/// Plain secrets end up in the deployed artifact; acceptable for tests,
	/// flagged as insecure everywhere else.
	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the actual value
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve into a zeroizing `SecretString`
	pub fn resolve_for_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		let resolved_value = self.resolve()?;
		Ok(SecretString::from_str(&resolved_value))
	}

	/// Whether this configuration embeds the value in the artifact
	pub fn is_insecure(&self) -> bool {
		matches!(self.value_type, ValueType::Plain)
	}
}

/// Errors that can occur when resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Display never shows a resolvable secret
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		// "env:NAME" strings reference an environment variable
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}
