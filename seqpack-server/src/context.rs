//! Context shared by every request handler.

use serde::Serialize;

use crate::config::Settings;

/// Server context. Handlers only read it; there is no state shared
/// between requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServerContext {
    /// Server settings.
    pub settings: Settings,
}

impl ServerContext {
    /// Create a context from already loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create a context from the embedded defaults and the environment.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Ok(Self::new(Settings::new_from_default_config()?))
    }
}
