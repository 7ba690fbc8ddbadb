//! PromptSmith Types
//!
//! Shared models and traits for the PromptSmith client SDK.
//! This crate contains the wire-format models organized by business entity.

pub mod chats;
pub mod envelope;
pub mod models;
pub mod session;
pub mod sql;
pub mod users;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use chats::{Chat, ChatHistory, ChatMessage, CreatedChat, DeletedChat};

pub use envelope::SignedEnvelope;

pub use models::{Pong, SecretString};

pub use session::{Session, SessionError, SessionResult, SessionStore, SessionUser};

pub use sql::{NlToSqlRequest, NlToSqlResponse, RewriteRequest, RewriteResponse};

pub use users::{AdminAck, Analytics, Role, User};
