//! PromptSmith Client
//!
//! HTTP API layer for the PromptSmith backend. Attaches the session bearer
//! token to every request, clears the session on 401, and for endpoints
//! flagged as signed refuses to surface the payload unless the integrity
//! check passes.

pub mod admin;
pub mod chats;
pub mod client;
pub mod error;
pub mod session;
pub mod sql;

pub use client::PromptSmithClient;
pub use error::{ApiError, ApiResult};
pub use session::MemorySessionStore;
