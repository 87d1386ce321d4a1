//! Server configuration

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    /// Key for the hosted model. The extraction flow is disabled when absent.
    pub gemini_api_key: Option<String>,
    pub model: String,
    pub location: String,
    /// Service API key. Auth is disabled when absent.
    pub api_key: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    pub log_level: String,
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".into()),
            location: std::env::var("VERTEX_LOCATION").unwrap_or_else(|_| "us-central1".into()),
            api_key: std::env::var("API_KEY").ok(),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            rate_limit_rps: std::env::var("RATE_LIMIT_RPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            metrics_enabled: std::env::var("METRICS_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
