use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Billdesk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BilldeskConfig {
    /// Upstream workflow/invoice service configuration
    pub upstream: UpstreamConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL of the upstream billing API
    pub base_url: String,
    /// API token (can be set via env var)
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests per second limit
    pub requests_per_second: u32,
    /// Burst capacity
    pub burst_capacity: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for BilldeskConfig {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig {
                base_url: "http://localhost:9292/api/v1".to_string(),
                token: None, // Read from env var or billdesk.toml
                request_timeout_seconds: 10,
                rate_limit: RateLimitConfig {
                    requests_per_second: 5,
                    burst_capacity: 10,
                },
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl BilldeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (billdesk.toml)
    /// 3. Environment variables (prefixed with BILLDESK__)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&BilldeskConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("billdesk.toml").exists() {
            builder = builder.add_source(File::with_name("billdesk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("BILLDESK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut billdesk_config: BilldeskConfig = config.try_deserialize()?;

        // Special handling for the API token - check the plain env var too
        if billdesk_config.upstream.token.is_none() {
            if let Ok(token) = std::env::var("BILLDESK_API_TOKEN") {
                billdesk_config.upstream.token = Some(token);
            }
        }

        Ok(billdesk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<BilldeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = BilldeskConfig::load_env_file();
        BilldeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static BilldeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
