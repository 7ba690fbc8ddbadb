//! Session model and store trait
//!
//! The session is an external collaborator from the verifier's point of
//! view: a key-value store holding the bearer token and minimal user info.
//! The API layer reads the token to attach an `Authorization` header and
//! clears the session when the backend answers 401.

use crate::models::SecretString;
use crate::users::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by session store implementations
#[derive(Debug, Error)]
pub enum SessionError {
	#[error("Session store unavailable: {reason}")]
	Unavailable { reason: String },
}

/// Result type for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Minimal user info kept alongside the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub role: Role,
}

/// An authenticated session
///
/// Produced by the embedding application's login flow (out of scope here)
/// and consumed by the API layer.
#[derive(Debug, Clone)]
pub struct Session {
	/// Bearer token attached to every authenticated request
	pub token: SecretString,
	pub user: SessionUser,
}

impl Session {
	pub fn new(token: SecretString, user: SessionUser) -> Self {
		Self { token, user }
	}

	/// Whether the session belongs to an admin account
	pub fn is_admin(&self) -> bool {
		self.user.role.is_admin()
	}
}

/// Pluggable session storage
///
/// Implementations must be safe to share across concurrent in-flight
/// requests. The default is an in-memory store; embedding applications can
/// back this with whatever their platform offers (browser local storage,
/// a keychain, a file).
#[async_trait]
pub trait SessionStore: Send + Sync + fmt::Debug {
	/// Current session, if any
	async fn get(&self) -> SessionResult<Option<Session>>;

	/// Replace the current session
	async fn set(&self, session: Session) -> SessionResult<()>;

	/// Drop the current session
	async fn clear(&self) -> SessionResult<()>;
}
