use anyhow::{Context, Result};
use std::{env, path::PathBuf};

use crate::crypto::DEFAULT_KEY_LENGTH;

pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone)]
pub struct Config {
    pub key_length: usize,
    pub env_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self {
            key_length: lookup("KEYGEN_KEY_LENGTH")
                .unwrap_or_else(|| DEFAULT_KEY_LENGTH.to_string())
                .trim()
                .parse()
                .context("KEYGEN_KEY_LENGTH must be a valid integer")?,
            env_file: lookup("KEYGEN_ENV_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
        };

        if config.key_length == 0 {
            return Err(anyhow::anyhow!("KEYGEN_KEY_LENGTH must be greater than zero"));
        }

        Ok(config)
    }
}
