//! Test fixtures and client construction helpers

use promptsmith::mocks::mock_settings;
use promptsmith::{ClientBuilder, PromptSmithClient};

/// Secret shared between mock backend and client under test
pub const INTEGRITY_SECRET: &str = promptsmith::mocks::MOCK_INTEGRITY_SECRET;

/// A secret the client is NOT configured with
pub const WRONG_SECRET: &str = "not-the-backend-secret";

/// Bearer token the auth-requiring mock backend accepts
pub const VALID_TOKEN: &str = "mock-bearer-token";

/// Build a client wired to the given mock backend
pub fn client_for(base_url: &str) -> PromptSmithClient {
	ClientBuilder::new()
		.with_settings(mock_settings(base_url))
		.build()
		.expect("client builds against mock backend")
}
