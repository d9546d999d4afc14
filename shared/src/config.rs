use anyhow::Result;

pub struct AppConfig {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let api = ApiConfig {
            base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            token: std::env::var("API_TOKEN").unwrap_or_default(),
            timeout_secs: std::env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        };
        let refresh = RefreshConfig {
            interval_secs: std::env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        };
        Ok(Self { api, refresh })
    }
}

pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    pub timeout_secs: u64,
}

pub struct RefreshConfig {
    pub interval_secs: u64,
}
