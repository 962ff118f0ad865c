//! Server configuration, read from the environment (and `.env` when present).

use crate::logic::{GroupSize, PaddingPolicy};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Group size used when a calculate request does not name one.
    pub group_size: GroupSize,
    pub padding: PaddingPolicy,
    /// Seed the demo group on startup.
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            group_size: GroupSize::DEFAULT,
            padding: PaddingPolicy::default(),
            seed_demo: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// HOST, PORT, GROUP_SIZE, PADDING_POLICY, SEED_DEMO.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable lookup; unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);

        let group_size = match parse_var::<i64>(&lookup, "GROUP_SIZE")? {
            Some(n) => GroupSize::new(n).map_err(|e| ConfigError::Invalid {
                var: "GROUP_SIZE",
                value: n.to_string(),
                reason: e.to_string(),
            })?,
            None => defaults.group_size,
        };
        let padding = parse_var(&lookup, "PADDING_POLICY")?.unwrap_or(defaults.padding);
        let seed_demo = parse_var(&lookup, "SEED_DEMO")?.unwrap_or(defaults.seed_demo);

        Ok(Self {
            host,
            port,
            group_size,
            padding,
            seed_demo,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
