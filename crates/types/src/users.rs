//! User and admin-surface models

use serde::{Deserialize, Serialize};

/// User role as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	User,
	Admin,
}

impl Role {
	pub fn is_admin(&self) -> bool {
		matches!(self, Role::Admin)
	}
}

/// A user account as listed by `GET /admin/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub role: Role,

	#[serde(default)]
	pub bio: Option<String>,

	#[serde(default)]
	pub avatar_emoji: Option<String>,
}

/// Acknowledgement shape returned by admin delete operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAck {
	pub success: bool,
	pub message: String,
}

/// Response of `GET /admin/analytics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
	pub total_users: u64,
	pub total_chats: u64,
	pub total_messages: u64,

	/// LLM call count; the backend currently reports one call per message
	pub llm_usage: u64,
}
