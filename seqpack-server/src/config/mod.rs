//! Configuration management for the echo server
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

/// The embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Trait for validating configuration values.
trait Validatable {
    /// Validate the configuration values.
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Top-level configuration for the echo server
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Listening socket and request limits
    pub server: ServerConfig,
    /// Cross-origin policy
    pub cors: CorsConfig,
    /// Echo endpoint behaviour
    pub echo: EchoConfig,
}

/// Listening socket and request limits
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Largest accepted request body in bytes
    pub body_limit_bytes: u64,
}

/// Cross-origin policy
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    /// Origins allowed to call the server, e.g. `http://localhost:5173`
    pub allowed_origins: Vec<String>,
    /// How long browsers may cache a preflight response, in seconds
    pub max_age_secs: u64,
    /// Whether credentials are allowed on cross-origin requests
    pub allow_credentials: bool,
}

/// Echo endpoint behaviour
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EchoConfig {
    /// Query key the identifiers are stored under
    pub key: String,
    /// Maximum number of values echoed back by `POST /test`
    pub preview_limit: usize,
}

impl ServerConfig {
    /// Resolves `host:port` to the first matching socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr_str = format!("{}:{}", self.host, self.port);
        addr_str
            .to_socket_addrs()
            .map_err(|e| ConfigError::Message(format!("[server] cannot resolve {addr_str}: {e}")))?
            .next()
            .ok_or_else(|| ConfigError::Message(format!("[server] no address found for {addr_str}")))
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.body_limit_bytes == 0 {
            return Err(ConfigError::Message(
                "[server.body_limit_bytes] must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validatable for CorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "[cors.allowed_origins] At least one origin must be provided".to_string(),
            ));
        }

        // An origin is a scheme and a host (plus an optional port), nothing else.
        for origin in &self.allowed_origins {
            let url = Url::parse(origin).map_err(|e| {
                ConfigError::Message(format!("[cors.allowed_origins] Invalid origin '{origin}': {e}"))
            })?;

            if !["http", "https"].contains(&url.scheme()) {
                return Err(ConfigError::Message(format!(
                    "[cors.allowed_origins] Invalid scheme in '{origin}': must be HTTP or HTTPS"
                )));
            }

            if url.host_str().is_none() || url.path() != "/" || origin.ends_with('/') {
                return Err(ConfigError::Message(format!(
                    "[cors.allowed_origins] '{origin}' must be a bare origin without path"
                )));
            }
        }

        Ok(())
    }
}

impl Validatable for EchoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty() {
            return Err(ConfigError::Message("[echo.key] must not be empty".to_string()));
        }
        if self.preview_limit == 0 {
            return Err(ConfigError::Message(
                "[echo.preview_limit] must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// Loads the embedded defaults, then the optional file at
    /// `config_path`, then environment variables.
    ///
    /// The environment variables are prefixed with `SEQPACK_SERVER_` and the
    /// nested fields are separated with double underscores, so
    /// `cors.allowed_origins` is set with
    /// `SEQPACK_SERVER_CORS__ALLOWED_ORIGINS`. Lists are comma separated.
    pub fn new(config_path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        Self::load(config_path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("SEQPACK_SERVER")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .try_parsing(true)
            .with_list_parse_key("cors.allowed_origins")
    }

    fn load(config_path: Option<impl AsRef<Path>>, env: Environment) -> Result<Self, ConfigError> {
        let mut cfg_builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = config_path {
            cfg_builder = cfg_builder.add_source(File::from(path.as_ref()));
        }
        cfg_builder = cfg_builder.add_source(env);

        let settings: Settings = cfg_builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Loads the embedded defaults and environment variables only.
    pub fn new_from_default_config() -> Result<Self, ConfigError> {
        Self::new(None::<&Path>)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.cors.validate()?;
        self.echo.validate()?;
        Ok(())
    }
}
