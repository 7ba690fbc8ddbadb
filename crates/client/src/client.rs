//! HTTP client for the PromptSmith backend
//!
//! Request plumbing shared by every endpoint group: URL joining, bearer
//! token attachment, 401 session clearing, response parsing, and the signed
//! envelope gate.

use promptsmith_config::Settings;
use promptsmith_integrity::IntegrityTrait;
use promptsmith_types::{Pong, SessionStore, SignedEnvelope};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};

/// API client for the PromptSmith backend
///
/// Holds no per-request state; a single instance can serve any number of
/// concurrent in-flight requests.
pub struct PromptSmithClient {
	base_url: Url,
	http: reqwest::Client,
	session: Arc<dyn SessionStore>,
	integrity: Arc<dyn IntegrityTrait>,
}

impl PromptSmithClient {
	/// Create a client from settings, a session store, and a verifier
	pub fn new(
		settings: &Settings,
		session: Arc<dyn SessionStore>,
		integrity: Arc<dyn IntegrityTrait>,
	) -> ApiResult<Self> {
		let mut base_url = Url::parse(&settings.api.base_url).map_err(|e| ApiError::InvalidUrl {
			reason: format!("Invalid base URL '{}': {}", settings.api.base_url, e),
		})?;

		// Treat the base URL as a directory so join() appends instead of
		// replacing the last path segment
		if !base_url.path().ends_with('/') {
			base_url.set_path(&format!("{}/", base_url.path()));
		}

		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("PromptSmith-Client/1.0"));

		let http = reqwest::Client::builder()
			.timeout(Duration::from_millis(settings.api.request_timeout_ms))
			.default_headers(headers)
			.build()?;

		Ok(Self {
			base_url,
			http,
			session,
			integrity,
		})
	}

	/// The session store this client reads tokens from
	pub fn session_store(&self) -> &Arc<dyn SessionStore> {
		&self.session
	}

	/// Liveness probe against `GET /ping`
	pub async fn ping(&self) -> ApiResult<Pong> {
		self.get_json("ping").await
	}

	fn endpoint_url(&self, path: &str) -> ApiResult<Url> {
		self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
			reason: format!(
				"Failed to join URL path '{}' to base '{}': {}",
				path, self.base_url, e
			),
		})
	}

	/// Send a request with the bearer token attached, mapping 401 and
	/// non-success statuses to their error categories
	async fn execute(&self, request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
		let request = match self.session.get().await? {
			Some(session) => {
				let header_value = format!("Bearer {}", session.token.expose_secret());
				let header_value =
					HeaderValue::from_str(&header_value).map_err(|_| ApiError::InvalidResponse {
						reason: "Failed to create Authorization header".to_string(),
					})?;
				request.header(AUTHORIZATION, header_value)
			},
			None => request,
		};

		let response = request.send().await?;
		let status = response.status();

		if status == StatusCode::UNAUTHORIZED {
			// Invalid or expired token: drop the session so the embedding
			// application can route the user back to login
			warn!("Backend rejected bearer token, clearing session");
			self.session.clear().await?;
			return Err(ApiError::Unauthorized);
		}

		if !status.is_success() {
			let reason = response.text().await.unwrap_or_default();
			return Err(ApiError::Status {
				status_code: status.as_u16(),
				reason,
			});
		}

		Ok(response)
	}

	async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
		let body = response.text().await.unwrap_or_default();
		serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
			reason: format!("Failed to parse response body: {}", e),
		})
	}

	pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
		let url = self.endpoint_url(path)?;
		debug!(%url, "GET");
		let response = self.execute(self.http.get(url)).await?;
		Self::parse_json(response).await
	}

	pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> ApiResult<T> {
		let url = self.endpoint_url(path)?;
		debug!(%url, "POST");
		let response = self.execute(self.http.post(url).json(body)).await?;
		Self::parse_json(response).await
	}

	pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
		let url = self.endpoint_url(path)?;
		debug!(%url, "POST");
		let response = self.execute(self.http.post(url)).await?;
		Self::parse_json(response).await
	}

	pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
		let url = self.endpoint_url(path)?;
		debug!(%url, "DELETE");
		let response = self.execute(self.http.delete(url)).await?;
		Self::parse_json(response).await
	}

	/// POST to an endpoint whose response is wrapped in a signed envelope
	///
	/// The payload is verified before deserialization; on any integrity
	/// failure it is discarded and never reaches the caller.
	pub(crate) async fn post_signed<B: Serialize, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> ApiResult<T> {
		let envelope: SignedEnvelope<Value> = self.post_json(path, body).await?;

		if let Err(integrity_error) = self.integrity.check_envelope(&envelope) {
			warn!(path, error = %integrity_error, "Rejecting response with bad signature");
			return Err(ApiError::Integrity(integrity_error));
		}

		serde_json::from_value(envelope.data).map_err(|e| ApiError::InvalidResponse {
			reason: format!("Failed to parse verified payload: {}", e),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::MemorySessionStore;
	use promptsmith_config::ConfigurableValue;
	use promptsmith_integrity::IntegrityService;

	fn client_with_base(base_url: &str) -> PromptSmithClient {
		let mut settings = Settings::default();
		settings.api.base_url = base_url.to_string();
		settings.security.integrity_secret = ConfigurableValue::from_plain("test-secret");

		let secret = settings.get_integrity_secret_secure().unwrap();
		PromptSmithClient::new(
			&settings,
			Arc::new(MemorySessionStore::new()),
			Arc::new(IntegrityService::new(secret)),
		)
		.unwrap()
	}

	#[test]
	fn test_endpoint_url_joins_paths() {
		let client = client_with_base("http://localhost:8000");
		assert_eq!(
			client.endpoint_url("chats/list").unwrap().as_str(),
			"http://localhost:8000/chats/list"
		);
		assert_eq!(
			client.endpoint_url("rewrite-sql").unwrap().as_str(),
			"http://localhost:8000/rewrite-sql"
		);
	}

	#[test]
	fn test_endpoint_url_preserves_base_path() {
		let client = client_with_base("http://gateway.example.com/promptsmith");
		assert_eq!(
			client.endpoint_url("chats/list").unwrap().as_str(),
			"http://gateway.example.com/promptsmith/chats/list"
		);
	}

	#[test]
	fn test_invalid_base_url_rejected() {
		let mut settings = Settings::default();
		settings.api.base_url = "not a url".to_string();
		settings.security.integrity_secret = ConfigurableValue::from_plain("test-secret");

		let secret = settings.get_integrity_secret_secure().unwrap();
		let result = PromptSmithClient::new(
			&settings,
			Arc::new(MemorySessionStore::new()),
			Arc::new(IntegrityService::new(secret)),
		);
		assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
	}
}
