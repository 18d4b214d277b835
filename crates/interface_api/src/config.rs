//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

use core_kernel::Currency;
use domain_ledger::RoundingPolicy;

/// API configuration
///
/// Every field can be set through an `API_`-prefixed environment variable,
/// e.g. `API_PORT` or `API_RECEIPT_LINES_PER_PAGE`. Unset fields keep their
/// defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Currency for sessions that don't name one
    pub currency: Currency,
    /// Rounding policy for sessions that don't name one
    pub rounding_policy: RoundingPolicy,
    /// Body lines per receipt page
    pub receipt_lines_per_page: usize,
    /// Directory for receipt artifacts; the OS temp dir when unset
    pub export_dir: Option<PathBuf>,
    /// Upper bound on concurrently open sessions
    pub max_sessions: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            currency: Currency::USD,
            rounding_policy: RoundingPolicy::PerShare,
            receipt_lines_per_page: domain_ledger::receipt::DEFAULT_LINES_PER_PAGE,
            export_dir: None,
            max_sessions: 1024,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
