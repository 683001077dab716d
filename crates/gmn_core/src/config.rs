use std::env;

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GameSpot API credential. An empty key is tolerated here; the
    /// upstream will reject requests and surface as a 502.
    pub api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key = env::var("GAMESPOT_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("GAMESPOT_API_KEY is not set; listing requests will fail upstream");
        }

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { api_key, port }
    }
}
