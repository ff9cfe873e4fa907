use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

pub const BIND_ADDR_VAR: &str = "PAWCARE_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "PAWCARE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines for the log collector.
    Json,
    /// Human-readable lines for local development.
    Plain,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "plain" | "pretty" | "text" => Ok(LogFormat::Plain),
            other => Err(eyre::eyre!("unsupported log format: {other}")),
        }
    }
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset keys take their defaults;
    /// set but invalid values are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR} '{bind_addr}': {e}"))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::Json,
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
