//! Startup and serving errors.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
