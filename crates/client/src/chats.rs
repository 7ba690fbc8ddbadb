//! Chat history operations

use promptsmith_types::{Chat, ChatHistory, CreatedChat, DeletedChat};

use crate::client::PromptSmithClient;
use crate::error::ApiResult;

impl PromptSmithClient {
	/// Start a new, empty chat
	pub async fn create_chat(&self) -> ApiResult<CreatedChat> {
		self.post_empty("chats/create").await
	}

	/// List the current user's chats, most recently updated first
	pub async fn list_chats(&self) -> ApiResult<Vec<Chat>> {
		self.get_json("chats/list").await
	}

	/// Fetch a chat's header and full message history
	pub async fn chat_messages(&self, chat_id: i64) -> ApiResult<ChatHistory> {
		self.get_json(&format!("chats/{}/messages", chat_id)).await
	}

	/// Delete a chat and its messages
	pub async fn delete_chat(&self, chat_id: i64) -> ApiResult<DeletedChat> {
		self.delete_json(&format!("chats/{}", chat_id)).await
	}
}
