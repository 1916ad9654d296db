use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Prefix of every environment variable the site reads.
pub const ENV_PREFIX: &str = "FOLIO_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("error parsing environment: {0}")]
    Envy(#[from] envy::Error),
}

/// Runtime settings, read from `FOLIO_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Most post pages that may hold comments at once.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Refuse top-level comments with no visible text. Replies are always
    /// refused when blank.
    #[serde(default)]
    pub reject_blank_comments: bool,
}

fn default_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_max_sessions() -> usize {
    1024
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: default_address(),
            port: default_port(),
            max_sessions: default_max_sessions(),
            reject_blank_comments: false,
        }
    }
}

impl Config {
    /// Load `.env` if there is one, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if e.not_found() {
                debug!("No .env file found");
            } else {
                return Err(e.into());
            }
        }

        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}
