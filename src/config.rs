use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::translate::{deepl, google};

/// Which upstream provider serves translations for the lifetime of the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum EngineKind {
    #[default]
    DeepL,
    Google,
}

impl FromStr for EngineKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "deepl" => Ok(Self::DeepL),
            "google" => Ok(Self::Google),
            other => Err(anyhow::anyhow!(
                "Unsupported translation engine: {} (expected deepl or google)",
                other
            )),
        }
    }
}

impl TryFrom<String> for EngineKind {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeepL => write!(f, "deepl"),
            Self::Google => write!(f, "google"),
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translation_engine: EngineKind,
    #[serde(default)]
    pub deepl_auth_key: String,
    #[serde(default)]
    pub google_api_key: String,
    /// Key clients must present; `None` leaves the gateway open
    #[serde(default, deserialize_with = "empty_as_none")]
    pub client_api_key: Option<String>,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_deepl_api_url")]
    pub deepl_api_url: String,
    #[serde(default = "default_google_api_url")]
    pub google_api_url: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_deepl_api_url() -> String {
    deepl::DEFAULT_API_URL.to_string()
}

fn default_google_api_url() -> String {
    google::DEFAULT_API_URL.to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Config {
    /// Load from the process environment, seeded from `.env` when present.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(_) => tracing::debug!("No .env file found"),
        }

        Self::from_builder(config::Config::builder().add_source(config::Environment::default()))
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("failed to build configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation_engine: EngineKind::default(),
            deepl_auth_key: String::new(),
            google_api_key: String::new(),
            client_api_key: None,
            host: default_host(),
            port: default_port(),
            deepl_api_url: default_deepl_api_url(),
            google_api_url: default_google_api_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |set: bool| if set { "<redacted>" } else { "<unset>" };
        f.debug_struct("Config")
            .field("translation_engine", &self.translation_engine)
            .field("deepl_auth_key", &redact(!self.deepl_auth_key.is_empty()))
            .field("google_api_key", &redact(!self.google_api_key.is_empty()))
            .field("client_api_key", &redact(self.client_api_key.is_some()))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("deepl_api_url", &self.deepl_api_url)
            .field("google_api_url", &self.google_api_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}
