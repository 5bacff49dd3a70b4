use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory where submission images are stored.
    pub upload_dir: PathBuf,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Vision service configuration.
    pub vision: VisionConfig,
}

/// Connection settings for the external label-detection service.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Annotate endpoint URL.
    pub api_url: String,
    /// API key for the service.
    pub api_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                   |
    /// |------------------------|----------|---------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`                 |
    /// | `PORT`                 | no       | `3000`                    |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173`   |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                      |
    /// | `UPLOAD_DIR`           | no       | `storage/uploads`         |
    /// | `JWT_SECRET`           | **yes**  | --                        |
    /// | `VISION_API_URL`       | **yes**  | --                        |
    /// | `VISION_API_KEY`       | **yes**  | --                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "storage/uploads".into()));

        let jwt = JwtConfig::from_env();
        let vision = VisionConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            jwt,
            vision,
        }
    }
}

impl VisionConfig {
    /// Load vision service settings from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `VISION_API_URL` or `VISION_API_KEY` is not set.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("VISION_API_URL").expect("VISION_API_URL must be set in the environment");
        let api_key =
            std::env::var("VISION_API_KEY").expect("VISION_API_KEY must be set in the environment");
        Self { api_url, api_key }
    }
}
