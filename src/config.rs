use std::time::Duration;

use anyhow::Result;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.mentorpiece.org/v1/process-ai-request";

/// Raw settings as they come out of the layered sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub mock_mode: Option<String>,
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// Process-wide configuration, built once in `main` and never mutated
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub mock_mode: bool,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    /// Load from defaults, then the optional file at `path`, then
    /// `MENTORPIECE_*` variables, then `MOCK_MENTORPIECE`.
    pub fn load(path: &str) -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("MENTORPIECE"))
            .set_override_option("mock_mode", std::env::var("MOCK_MENTORPIECE").ok())?;

        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(config::Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000_i64)?
            .set_default("request_timeout_secs", default_request_timeout_secs() as i64)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings.into())
    }
}

impl From<Settings> for Config {
    fn from(settings: Settings) -> Self {
        Self {
            endpoint: settings.endpoint,
            api_key: settings.api_key.filter(|key| !key.is_empty()),
            mock_mode: parse_mock_flag(settings.mock_mode.as_deref()),
            host: settings.host,
            port: settings.port,
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            mock_mode: false,
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout: Duration::from_secs(default_request_timeout_secs()),
        }
    }
}

/// Only a case-insensitive "true" turns mock mode on
pub fn parse_mock_flag(value: Option<&str>) -> bool {
    value.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}
