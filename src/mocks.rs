//! Mock helpers shared by tests and demos

use crate::{ConfigurableValue, Role, SecretString, Session, SessionUser, Settings};

/// Shared secret used by mock backends and test clients
pub const MOCK_INTEGRITY_SECRET: &str = "super-secret-hmac-key";

/// Settings pointing at a mock backend
pub fn mock_settings(base_url: &str) -> Settings {
	let mut settings = Settings::default();
	settings.api.base_url = base_url.to_string();
	settings.api.request_timeout_ms = 2000;
	settings.security.integrity_secret = ConfigurableValue::from_plain(MOCK_INTEGRITY_SECRET);
	settings
}

/// A signed-in regular user session
pub fn mock_session() -> Session {
	Session::new(
		SecretString::from_str("mock-bearer-token"),
		SessionUser {
			id: 1,
			name: "Sam".to_string(),
			email: "sam@example.com".to_string(),
			role: Role::User,
		},
	)
}

/// A signed-in admin session
pub fn mock_admin_session() -> Session {
	Session::new(
		SecretString::from_str("mock-admin-token"),
		SessionUser {
			id: 2,
			name: "Dana".to_string(),
			email: "dana@example.com".to_string(),
			role: Role::Admin,
		},
	)
}
