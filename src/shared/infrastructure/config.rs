use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "ACTIVITIES_HOST";
pub const PORT_VAR: &str = "ACTIVITIES_PORT";
pub const STATIC_DIR_VAR: &str = "ACTIVITIES_STATIC_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset variables fall back to the defaults; set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: HOST_VAR,
                value,
            })?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };
        let static_dir = lookup(STATIC_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
