//! Mock PromptSmith backend for integration tests
//!
//! Spins a real axum server that signs responses the way the production
//! backend does, with knobs for the failure modes the client must classify:
//! wrong secret, post-signing tampering, malformed signatures, server
//! errors, and rejected bearer tokens.

use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use promptsmith::{IntegrityService, IntegrityTrait, SecretString};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::task::JoinHandle;

use super::fixtures;

/// Behavior knobs for the mock backend
#[derive(Clone)]
pub struct MockBackendOptions {
	/// Secret the backend signs with
	pub secret: String,
	/// Mutate the payload after computing its signature
	pub tamper_after_signing: bool,
	/// Ship a signature that is not valid hex
	pub emit_malformed_signature: bool,
	/// Answer 500 on the rewrite endpoint
	pub fail_rewrite: bool,
	/// Require this bearer token on every route
	pub required_token: Option<String>,
}

impl Default for MockBackendOptions {
	fn default() -> Self {
		Self {
			secret: fixtures::INTEGRITY_SECRET.to_string(),
			tamper_after_signing: false,
			emit_malformed_signature: false,
			fail_rewrite: false,
			required_token: None,
		}
	}
}

#[derive(Clone)]
struct MockBackendState {
	integrity: Arc<IntegrityService>,
	options: MockBackendOptions,
}

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a well-behaved backend signing with the shared test secret
	pub async fn spawn() -> Self {
		Self::spawn_with(MockBackendOptions::default()).await
	}

	/// Spawn a backend signing with a different secret than the client's
	pub async fn spawn_with_secret(secret: &str) -> Self {
		Self::spawn_with(MockBackendOptions {
			secret: secret.to_string(),
			..Default::default()
		})
		.await
	}

	/// Spawn a backend that mutates payloads after signing them
	pub async fn spawn_tampering() -> Self {
		Self::spawn_with(MockBackendOptions {
			tamper_after_signing: true,
			..Default::default()
		})
		.await
	}

	/// Spawn a backend emitting non-hex signatures
	pub async fn spawn_with_malformed_signature() -> Self {
		Self::spawn_with(MockBackendOptions {
			emit_malformed_signature: true,
			..Default::default()
		})
		.await
	}

	/// Spawn a backend whose rewrite endpoint answers 500
	pub async fn spawn_failing_rewrite() -> Self {
		Self::spawn_with(MockBackendOptions {
			fail_rewrite: true,
			..Default::default()
		})
		.await
	}

	/// Spawn a backend that requires the given bearer token on every route
	pub async fn spawn_requiring_token(token: &str) -> Self {
		Self::spawn_with(MockBackendOptions {
			required_token: Some(token.to_string()),
			..Default::default()
		})
		.await
	}

	/// Spawn a backend with explicit options
	pub async fn spawn_with(options: MockBackendOptions) -> Self {
		let state = MockBackendState {
			integrity: Arc::new(IntegrityService::new(SecretString::from_str(&options.secret))),
			options,
		};

		let mut app = Router::new()
			.route("/ping", get(ping))
			.route("/rewrite-sql", post(rewrite_sql))
			.route("/nl-to-sql", post(nl_to_sql))
			.route("/chats/create", post(create_chat))
			.route("/chats/list", get(list_chats))
			.route("/chats/{chat_id}/messages", get(chat_messages))
			.route("/chats/{chat_id}", delete(delete_chat))
			.route("/admin/users", get(list_users))
			.route("/admin/users/{user_id}", delete(delete_user))
			.route("/admin/users/{user_id}/chats", get(user_chats))
			.route("/admin/chats/{chat_id}", delete(admin_delete_chat))
			.route("/admin/analytics", get(analytics));

		if state.options.required_token.is_some() {
			app = app.route_layer(middleware::from_fn_with_state(state.clone(), require_bearer));
		}

		let app = app.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Self { base_url, handle }
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn require_bearer(
	State(state): State<MockBackendState>,
	request: Request,
	next: Next,
) -> Response {
	let expected = state.options.required_token.clone().unwrap_or_default();
	let authorized = request
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|value| value.to_str().ok())
		.map(|value| value == format!("Bearer {}", expected))
		.unwrap_or(false);

	if authorized {
		next.run(request).await
	} else {
		(StatusCode::UNAUTHORIZED, "Invalid or expired token").into_response()
	}
}

async fn ping() -> Json<Value> {
	Json(json!({"message": "pong"}))
}

async fn rewrite_sql(State(state): State<MockBackendState>, Json(body): Json<Value>) -> Response {
	if state.options.fail_rewrite {
		return (StatusCode::INTERNAL_SERVER_ERROR, "rewrite backend unavailable").into_response();
	}

	let query = body["query"].as_str().unwrap_or_default();
	// Whitespace-collapsing stand-in for the real formatter
	let rewritten = query.split_whitespace().collect::<Vec<_>>().join(" ");
	let mut data = json!({"rewritten_sql": rewritten});

	let signature = if state.options.emit_malformed_signature {
		"zz-not-hex".to_string()
	} else {
		state.integrity.sign_value(&data).expect("mock backend signs")
	};

	if state.options.tamper_after_signing {
		data["rewritten_sql"] = json!("DROP TABLE users; --");
	}

	Json(json!({"data": data, "signature": signature})).into_response()
}

async fn nl_to_sql(Json(body): Json<Value>) -> Json<Value> {
	let chat_id = body["chat_id"].as_i64().unwrap_or(7);
	Json(json!({
		"generated_sql": "select count(*) from orders",
		"final_sql": "SELECT COUNT(*) FROM orders",
		"result": [[42]],
		"chat_id": chat_id,
	}))
}

async fn create_chat() -> Json<Value> {
	Json(json!({"chat_id": 7}))
}

async fn list_chats() -> Json<Value> {
	Json(json!([
		{"id": 1, "title": "Orders by region", "updated_at": "2026-08-01T10:15:00Z"},
		{"id": 2, "title": null, "updated_at": "2026-07-30T08:00:00Z"},
	]))
}

async fn chat_messages(Path(chat_id): Path<i64>) -> Response {
	if chat_id == 999 {
		return (StatusCode::NOT_FOUND, "Chat not found").into_response();
	}

	Json(json!({
		"chat": {"id": chat_id, "title": "Orders by region"},
		"messages": [
			{
				"id": 1,
				"user_message": "show revenue by region",
				"ai_response": "Here is the query.",
				"raw_sql": "select region, sum(amount) from orders group by region",
				"final_sql": "SELECT region, SUM(amount) FROM orders GROUP BY region",
				"created_at": "2026-08-01T10:15:00Z",
			},
		],
	}))
	.into_response()
}

async fn delete_chat(Path(chat_id): Path<i64>) -> Json<Value> {
	Json(json!({"success": true, "deleted_chat": chat_id}))
}

async fn list_users() -> Json<Value> {
	Json(json!([
		{"id": 3, "name": "Sam", "email": "sam@example.com", "role": "user", "bio": null, "avatar_emoji": "🦀"},
		{"id": 4, "name": "Riley", "email": "riley@example.com", "role": "user", "bio": "analyst", "avatar_emoji": null},
	]))
}

async fn delete_user(Path(_user_id): Path<i64>) -> Json<Value> {
	Json(json!({"success": true, "message": "User and all related data deleted."}))
}

async fn user_chats(Path(_user_id): Path<i64>) -> Json<Value> {
	Json(json!([
		{"id": 5, "title": "Churn analysis", "updated_at": "2026-08-02T09:30:00Z"},
	]))
}

async fn admin_delete_chat(Path(_chat_id): Path<i64>) -> Json<Value> {
	Json(json!({"success": true, "message": "Chat deleted"}))
}

async fn analytics() -> Json<Value> {
	Json(json!({
		"total_users": 3,
		"total_chats": 5,
		"total_messages": 12,
		"llm_usage": 12,
	}))
}
