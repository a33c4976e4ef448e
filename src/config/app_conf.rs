use crate::config::ConfigError;
use std::env;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// The single origin the CORS layer allows.
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(s) => s
                .parse()
                .map_err(|_| ConfigError::ParseError(format!("Invalid APP_PORT: {}", s)))?,
            Err(_) => 8000,
        };
        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        if allowed_origin.is_empty() {
            return Err(ConfigError::InvalidValue(
                "ALLOWED_ORIGIN must not be empty".to_string(),
            ));
        }
        Ok(AppConfig {
            host,
            port,
            allowed_origin,
        })
    }
}
