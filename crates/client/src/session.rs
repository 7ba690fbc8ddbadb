//! In-memory session store
//!
//! Default `SessionStore` implementation. Embedding applications that need
//! persistence across restarts supply their own implementation instead.

use async_trait::async_trait;
use promptsmith_types::{Session, SessionResult, SessionStore};
use tokio::sync::RwLock;

/// Session store keeping the session in process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-populated with a session
	pub fn with_session(session: Session) -> Self {
		Self {
			session: RwLock::new(Some(session)),
		}
	}
}

#[async_trait]
impl SessionStore for MemorySessionStore {
	async fn get(&self) -> SessionResult<Option<Session>> {
		Ok(self.session.read().await.clone())
	}

	async fn set(&self, session: Session) -> SessionResult<()> {
		*self.session.write().await = Some(session);
		Ok(())
	}

	async fn clear(&self) -> SessionResult<()> {
		*self.session.write().await = None;
		Ok(())
	}
}
