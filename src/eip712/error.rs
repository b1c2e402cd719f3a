use thiserror::Error;

use crate::{appendix::AppendixError, nonce::NonceError, num::NumError};

/// Error mapping or signing an EIP712 request.
#[derive(Debug, Error)]
pub enum SigningError {
    /// No signer configured, nothing was sent anywhere.
    #[error("signer is not configured")]
    MissingSigner,

    #[error("subaccount name '{0}' exceeds 12 bytes")]
    SubaccountNameTooLong(String),

    #[error("{field} does not fit in int128")]
    ValueOutOfRange { field: &'static str },

    #[error("signer error: {0}")]
    Signer(#[from] alloy::signers::Error),

    #[error("appendix error: {0}")]
    Appendix(#[from] AppendixError),

    #[error("nonce error: {0}")]
    Nonce(#[from] NonceError),

    #[error("numeric error: {0}")]
    Num(#[from] NumError),
}
