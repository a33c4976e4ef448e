pub mod app_conf;
pub mod store_conf;

pub use app_conf::AppConfig;
pub use store_conf::StoreConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
