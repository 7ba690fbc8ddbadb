//! SQL rewrite and NL-to-SQL operations

use promptsmith_types::{NlToSqlRequest, NlToSqlResponse, RewriteRequest, RewriteResponse};

use crate::client::PromptSmithClient;
use crate::error::ApiResult;

impl PromptSmithClient {
	/// Reformat and optimize a raw SQL query
	///
	/// `POST /rewrite-sql` wraps its response in a signed envelope; the
	/// rewritten SQL is only returned after the signature verifies. An
	/// `ApiError::Integrity` result means the payload was discarded.
	pub async fn rewrite_sql(&self, query: impl Into<String>) -> ApiResult<RewriteResponse> {
		let request = RewriteRequest {
			query: query.into(),
		};
		self.post_signed("rewrite-sql", &request).await
	}

	/// Generate SQL from a natural-language prompt
	///
	/// Records the exchange under `request.chat_id`, or under a fresh chat
	/// when none is given; the response reports the chat actually used.
	pub async fn nl_to_sql(&self, request: &NlToSqlRequest) -> ApiResult<NlToSqlResponse> {
		self.post_json("nl-to-sql", request).await
	}
}
