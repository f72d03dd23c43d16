//! Startup configuration read once from the process environment.

use std::env;

/// Server configuration. `NASA_API_KEY` is required; the process refuses
/// to start without it so a misconfigured deployment fails immediately
/// rather than on the first proxied request.
pub struct Config {
    pub api_key: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("NASA_API_KEY")
            .map_err(|_| anyhow::anyhow!("NASA_API_KEY is not set; refusing to start"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        Ok(Self {
            api_key,
            host,
            port,
        })
    }
}
