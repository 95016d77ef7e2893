use anyhow::{Context, Result};

/// Matches axum's built-in `DefaultBodyLimit`.
const DEFAULT_MAX_BODY_BYTES: &str = "2097152";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Upper bound on the `POST /data` request body, in bytes.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Ok(Self {
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            max_body_bytes: optional("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)
                .parse()
                .context("MAX_BODY_BYTES must be a non-negative integer")?,
        })
    }

    /// `host:port` as shown in logs and the startup notice.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
