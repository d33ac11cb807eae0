//! Runtime configuration for the pool API
//!
//! Every setting can be supplied through `API_*` environment variables
//! (see the server binary). The defaults are development placeholders;
//! deployments must set `API_JWT_SECRET` and `API_ADMIN_PASSWORD`.

use serde::Deserialize;

/// Placeholder secret for development setups
const DEV_PLACEHOLDER: &str = "change-me-in-production";

/// Runtime settings of the API server
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// HS256 signing secret for admin tokens
    pub jwt_secret: String,
    /// Admin token lifetime in seconds
    pub jwt_expiration_secs: u64,
    /// Password the login route exchanges for an admin token
    pub admin_password: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: DEV_PLACEHOLDER.to_string(),
            jwt_expiration_secs: 3600,
            admin_password: DEV_PLACEHOLDER.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads the full configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// The `host:port` pair the server binds
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
