use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream_base_url: String,
    pub host: String,
    pub port: u16,
    pub upstream_timeout_secs: u64,

    // API auth (optional — when unset, protected routes are open for dev)
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .map_err(|_| anyhow::anyhow!("UPSTREAM_BASE_URL must be set"))?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),
            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    /// Returns true if protected routes require a Bearer token.
    pub fn auth_enabled(&self) -> bool {
        self.api_token.is_some()
    }
}
