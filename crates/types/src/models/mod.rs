//! Shared models that don't belong to a single business entity

pub mod secret_string;

pub use secret_string::SecretString;

use serde::{Deserialize, Serialize};

/// Liveness probe response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pong {
	pub message: String,
}
