//! Runtime configuration, read from the environment.

use std::net::SocketAddr;

use anyhow::Context;
use shaper_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "SHAPER_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "SHAPER_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Problems found while loading, reported once logging is up.
    pub warnings: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut warnings = Vec::new();

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("{BIND_ADDR_VAR}={raw_addr:?} is not a socket address"))?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using json"));
                LogFormat::default()
            }),
        };

        Ok(Self {
            bind_addr,
            log_format,
            warnings,
        })
    }
}
