//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("AUTH_BACKEND_URL must be an http(s) URL, got `{0}`")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin that owns `/api/auth/login`. Logins answer 503 when absent.
    pub auth_backend_url: Option<String>,
    pub auth_backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_BACKEND_URL`: http(s) origin the login proxy forwards to
    /// - `AUTH_BACKEND_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let auth_backend_url = parse_backend_url(std::env::var("AUTH_BACKEND_URL").ok().as_deref())?;
        let auth_backend_timeout_secs =
            env_parse_u64("AUTH_BACKEND_TIMEOUT_SECS", DEFAULT_AUTH_BACKEND_TIMEOUT_SECS);

        Ok(Self { port, auth_backend_url, auth_backend_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
