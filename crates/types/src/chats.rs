//! Chat history models
//!
//! Shapes returned by the chat CRUD endpoints. Message bodies are stored
//! encrypted server-side; by the time they reach the client they are plain
//! text, so fields that failed decryption may arrive as null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat conversation owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
	pub id: i64,

	/// Decrypted chat title; null when the server could not decrypt it
	pub title: Option<String>,

	/// Last activity timestamp; absent on the message-history header row
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<DateTime<Utc>>,
}

/// A single exchange inside a chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
	pub id: i64,
	pub user_message: Option<String>,
	pub ai_response: Option<String>,

	/// SQL as generated by the model, before the rewrite pass
	pub raw_sql: Option<String>,

	/// SQL after the rewrite pass
	pub final_sql: Option<String>,

	pub created_at: DateTime<Utc>,
}

/// Response of `GET /chats/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistory {
	pub chat: Chat,
	pub messages: Vec<ChatMessage>,
}

/// Response of `POST /chats/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedChat {
	pub chat_id: i64,
}

/// Response of `DELETE /chats/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedChat {
	pub success: bool,
	pub deleted_chat: i64,
}
