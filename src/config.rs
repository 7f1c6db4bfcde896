use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "scraper.toml";
const ENV_PREFIX: &str = "SCRAPER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub target: TargetConfig,
    pub http: HttpConfig,
    /// Serve placeholder products instead of a 500 when the target site blocks us
    pub fallback_on_block: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub origin: String,
    pub search_path: String,
    pub ref_tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_redirects: usize,
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.amazon.com".to_string(),
            search_path: "/s".to_string(),
            ref_tag: "sr_pg_1".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 15,
            max_redirects: 5,
            delay_min_ms: 0,
            delay_max_ms: 0,
        }
    }
}

impl Config {
    /// Defaults, then `scraper.toml` (or `$SCRAPER_CONFIG`) if present, then `SCRAPER_*` env vars.
    pub fn load() -> Result<Self> {
        let path = std::env::var("SCRAPER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(env_source())
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `SCRAPER_FALLBACK_ON_BLOCK`, `SCRAPER_SERVER__PORT`: single `_` after the
/// prefix, `__` between nested keys
fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
