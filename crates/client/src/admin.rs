//! Admin operations
//!
//! These endpoints require an admin session; the backend answers 403 for
//! regular users, which surfaces as `ApiError::Status`.

use promptsmith_types::{AdminAck, Analytics, Chat, User};

use crate::client::PromptSmithClient;
use crate::error::ApiResult;

impl PromptSmithClient {
	/// List all user accounts except the calling admin
	pub async fn list_users(&self) -> ApiResult<Vec<User>> {
		self.get_json("admin/users").await
	}

	/// Delete a user together with their chats and messages
	pub async fn delete_user(&self, user_id: i64) -> ApiResult<AdminAck> {
		self.delete_json(&format!("admin/users/{}", user_id)).await
	}

	/// List a user's chats
	pub async fn user_chats(&self, user_id: i64) -> ApiResult<Vec<Chat>> {
		self.get_json(&format!("admin/users/{}/chats", user_id)).await
	}

	/// Delete any user's chat
	pub async fn admin_delete_chat(&self, chat_id: i64) -> ApiResult<AdminAck> {
		self.delete_json(&format!("admin/chats/{}", chat_id)).await
	}

	/// Usage counters for the admin dashboard
	pub async fn analytics(&self) -> ApiResult<Analytics> {
		self.get_json("admin/analytics").await
	}
}
