//! SQL rewrite and NL-to-SQL models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /rewrite-sql`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
	/// Raw SQL to reformat and optimize
	pub query: String,
}

/// Payload of the signed `POST /rewrite-sql` response
///
/// This is the `data` half of a [`crate::SignedEnvelope`]; the client only
/// deserializes it after the signature has been verified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewriteResponse {
	pub rewritten_sql: String,
}

/// Request body for `POST /nl-to-sql`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlToSqlRequest {
	/// Natural-language description of the desired query
	pub prompt: String,

	/// Existing chat to append to; a new chat is created when absent
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chat_id: Option<i64>,
}

impl NlToSqlRequest {
	/// Create a request that starts a new chat
	pub fn new(prompt: impl Into<String>) -> Self {
		Self {
			prompt: prompt.into(),
			chat_id: None,
		}
	}

	/// Continue an existing chat
	pub fn with_chat_id(mut self, chat_id: i64) -> Self {
		self.chat_id = Some(chat_id);
		self
	}
}

/// Response of `POST /nl-to-sql`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlToSqlResponse {
	/// SQL as generated by the model
	#[serde(default)]
	pub generated_sql: Option<String>,

	/// Generated SQL after the rewrite pass
	#[serde(default)]
	pub final_sql: Option<String>,

	/// Execution result rows, when the backend ran the query
	#[serde(default)]
	pub result: Option<Value>,

	/// Chat the exchange was recorded under
	#[serde(default)]
	pub chat_id: Option<i64>,

	/// Backend-reported generation failure, surfaced verbatim to the user
	#[serde(default)]
	pub error: Option<String>,
}
