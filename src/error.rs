use crate::{
    appendix::AppendixError, eip712::SigningError, nonce::NonceError, num::NumError,
    wire::WireError,
};

/// Any error produced while building, signing or decoding an order.
///
/// None of them is transient, an order that failed must not be submitted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("numeric error: {0}")]
    Num(#[from] NumError),

    #[error("appendix error: {0}")]
    Appendix(#[from] AppendixError),

    #[error("nonce error: {0}")]
    Nonce(#[from] NonceError),

    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("wire error: {0}")]
    Wire(#[from] WireError),
}

pub type Result<T> = std::result::Result<T, Error>;
