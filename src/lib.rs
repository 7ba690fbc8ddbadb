//! PromptSmith Client SDK
//!
//! Rust client for the PromptSmith SQL assistant backend: SQL rewriting,
//! NL-to-SQL generation, chat history, and admin operations, with
//! HMAC-SHA256 verification of signed response envelopes before any payload
//! is trusted.

use std::sync::Arc;
use tracing::{info, warn};

// Core domain types - the most commonly used types
pub use promptsmith_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AdminAck,
	Analytics,
	// Primary domain entities
	Chat,
	ChatHistory,
	ChatMessage,
	CreatedChat,
	DeletedChat,
	NlToSqlRequest,
	NlToSqlResponse,
	Pong,
	RewriteRequest,
	RewriteResponse,
	Role,
	SecretString,
	Session,
	SessionError,
	// Session traits
	SessionStore,
	SessionUser,
	SignedEnvelope,
	User,
};

// Integrity layer
pub use promptsmith_integrity::{canonicalize, IntegrityError, IntegrityService, IntegrityTrait};

// API layer
pub use promptsmith_client::{ApiError, ApiResult, MemorySessionStore, PromptSmithClient};

// Config
pub use promptsmith_config::{load_config, ConfigurableValue, LogFormat, Settings};

// Module aliases for qualified access
pub mod types {
	pub use promptsmith_types::*;
}

pub mod integrity {
	pub use promptsmith_integrity::*;
}

pub mod client {
	pub use promptsmith_client::*;
}

pub mod config {
	pub use promptsmith_config::*;
}

pub mod mocks;

/// Builder pattern for configuring the client
///
/// Settings fall back to `config/config.*` and defaults; the session store
/// falls back to an in-memory one; the verifier falls back to an
/// `IntegrityService` keyed from `settings.security.integrity_secret`.
pub struct ClientBuilder {
	settings: Option<Settings>,
	session_store: Option<Arc<dyn SessionStore>>,
	integrity: Option<Arc<dyn IntegrityTrait>>,
}

impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl ClientBuilder {
	/// Create a new client builder
	pub fn new() -> Self {
		Self {
			settings: None,
			session_store: None,
			integrity: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Set a custom session store (e.g. one backed by platform storage)
	pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
		self.session_store = Some(store);
		self
	}

	/// Set a custom verifier
	pub fn with_integrity(mut self, integrity: Arc<dyn IntegrityTrait>) -> Self {
		self.integrity = Some(integrity);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Build the configured client
	pub fn build(self) -> Result<PromptSmithClient, Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		let integrity = match self.integrity {
			Some(integrity) => integrity,
			None => {
				let secret = settings.get_integrity_secret_secure().map_err(|e| {
					format!(
						"Failed to resolve integrity secret: {}. Set the PROMPTSMITH_HMAC_SECRET environment variable to the secret the backend signs with.",
						e
					)
				})?;
				if settings.security.integrity_secret.is_insecure() {
					warn!(
						"Integrity secret is configured as a plain value; anyone with this artifact can forge signatures"
					);
				}
				Arc::new(IntegrityService::new(secret)) as Arc<dyn IntegrityTrait>
			},
		};

		let session_store = match self.session_store {
			Some(store) => store,
			None => Arc::new(MemorySessionStore::new()) as Arc<dyn SessionStore>,
		};

		let client = PromptSmithClient::new(&settings, session_store, integrity)?;
		info!("PromptSmith client configured for {}", settings.api.base_url);

		Ok(client)
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(settings: &Settings) {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);
}
