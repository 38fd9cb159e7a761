use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use crate::error::ConfigError;

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_FILE: &str = "data/premier_league_winners.json";

/// Server settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: Ipv4Addr,
    pub port: u16,
    pub data_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: Ipv4Addr = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let data_file = lookup("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Ok(Self { host, port, data_file })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
