//! Server Configuration
//!
//! Configuration management for the AgeGate server.
//! Supports environment variables, config files, and CLI arguments.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server binding configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Age-gate policy settings
    #[serde(default)]
    pub gate: GateSettings,

    /// Access guard settings
    #[serde(default)]
    pub guard: GuardSettings,

    /// API configuration
    #[serde(default)]
    pub api: ApiSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Server binding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl ServerSettings {
    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address: {e}"))
    }

    /// Get the shutdown timeout duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Age-gate policy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSettings {
    /// Age threshold applied when a country has no override
    #[serde(default = "default_threshold")]
    pub default_threshold: u32,

    /// Per-country threshold overrides, keyed by alpha-2 code
    #[serde(default)]
    pub country_thresholds: HashMap<String, u32>,

    /// Consent terms version stamped on issued attestations
    #[serde(default = "default_policy_version")]
    pub policy_version: String,

    /// Attestation validity window in seconds
    #[serde(default = "default_validity_window")]
    pub validity_window_secs: u64,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            country_thresholds: HashMap::new(),
            policy_version: default_policy_version(),
            validity_window_secs: default_validity_window(),
        }
    }
}

impl GateSettings {
    /// Build the core gate configuration from these settings
    pub fn to_gate_config(&self) -> agegate_core::GateConfig {
        let mut config = agegate_core::GateConfig::default();
        config.policy.default_threshold = self.default_threshold;
        config.policy.country_thresholds = self.country_thresholds.clone();
        config.attestation.policy_version = self.policy_version.clone();
        config.attestation.validity_window = Duration::from_secs(self.validity_window_secs);
        config
    }
}

/// Access guard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardSettings {
    /// Path prefixes the guard protects
    #[serde(default = "default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,

    /// Where unauthenticated requests are redirected
    #[serde(default = "default_entry_path")]
    pub entry_path: String,

    /// Name of the session marker cookie
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            protected_prefixes: default_protected_prefixes(),
            entry_path: default_entry_path(),
            session_cookie: default_session_cookie(),
        }
    }
}

impl GuardSettings {
    /// Build the API guard configuration from these settings
    pub fn to_guard_config(&self) -> agegate_api::GuardConfig {
        agegate_api::GuardConfig {
            protected_prefixes: self.protected_prefixes.clone(),
            entry_path: self.entry_path.clone(),
            session_cookie: self.session_cookie.clone(),
        }
    }
}

/// API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable response compression
    #[serde(default = "default_true")]
    pub enable_compression: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: default_cors_origins(),
            enable_compression: true,
            enable_tracing: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable metrics endpoint
    #[serde(default)]
    pub enabled: bool,

    /// Metrics port (separate from main server)
    #[serde(default = "default_metrics_port")]
    pub port: Option<u16>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_metrics_port(),
        }
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_threshold() -> u32 {
    13
}

fn default_policy_version() -> String {
    "v1".to_string()
}

fn default_validity_window() -> u64 {
    365 * 24 * 60 * 60
}

fn default_protected_prefixes() -> Vec<String> {
    vec![
        "/content".to_string(),
        "/feed".to_string(),
        "/settings".to_string(),
    ]
}

fn default_entry_path() -> String {
    "/welcome".to_string()
}

fn default_session_cookie() -> String {
    "agegate_session".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_metrics_port() -> Option<u16> {
    Some(9090)
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl ServerConfig {
    /// Load configuration from environment and optional config file
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let mut builder = config::Config::builder();

        // Add config file if specified
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add default config locations
        builder = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false));

        // Add environment variables with AGEGATE_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("AGEGATE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        let server_config: ServerConfig = config.try_deserialize().unwrap_or_else(|_| {
            tracing::warn!("Using default configuration - some settings may need adjustment");
            ServerConfig::default()
        });

        Ok(server_config)
    }

    /// Create a configuration for development/testing
    pub fn development() -> Self {
        Self {
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: "pretty".to_string(),
            },
            ..Default::default()
        }
    }
}
