//! PromptSmith Configuration
//!
//! Configuration management for the PromptSmith client SDK: backend
//! endpoint, logging, and provisioning of the HMAC shared secret.

pub mod configurable_value;
pub mod loader;
pub mod settings;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::load_config;
pub use settings::{ApiSettings, LogFormat, LoggingSettings, SecuritySettings, Settings};
