use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_MEDIA_URL: &str = "/media/";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Directory the local blob store writes uploads to.
    pub media_root: String,
    /// Public URL prefix of uploads, always ending in `/`.
    pub media_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            media_root: env_or("MEDIA_ROOT", DEFAULT_MEDIA_ROOT),
            media_url: with_trailing_slash(env_or("MEDIA_URL", DEFAULT_MEDIA_URL)),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
