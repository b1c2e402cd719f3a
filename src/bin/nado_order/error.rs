//! Error types for the order tool.

use nado_sdk::{appendix::AppendixError, eip712::SigningError, nonce::NonceError};

use crate::config::ConfigError;

/// Main error type for the order tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment configuration error: {0}")]
    EnvConfig(#[from] envy::Error),

    #[error("Appendix error: {0}")]
    Appendix(#[from] AppendixError),

    #[error("Nonce error: {0}")]
    Nonce(#[from] NonceError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
