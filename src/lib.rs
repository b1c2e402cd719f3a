//! Nado order SDK core.
//!
//! # Overview
//!
//! Builds the signed parts of Nado orders without any transport attached.
//!
//! Use [`types::OrderAppendix`] to describe execution behavior and pack it
//! with the [`appendix::AppendixCodec`] of your [`Chain`]. Generate an
//! [`nonce::OrderNonce`], map everything with [`eip712::Eip712Builder`] and
//! sign it with [`eip712::OrderSigner`]. [`wire`] has the engine payloads
//! the signed order is sent with.
//!
//! Decoding engine responses runs the other way: [`wire::OrderWire`] back to
//! typed-data values, [`appendix::AppendixCodec::unpack_str`] for the
//! appendix and [`nonce::recv_time_from_nonce`] for the nonce.
//!
//! See `./tests` for examples.
//!
//! # Limitations/follow-ups
//!
//! * Appendix layout has to be picked per deployment, packed values carry
//!   the layout version but are never auto-detected.
//!
//! * Only `place_order` and `place_isolated_order` have engine payloads,
//!   other requests are mapped and signed only.

pub mod appendix;
pub mod eip712;
pub mod error;
pub mod nonce;
pub mod num;
pub mod types;
pub mod wire;

use alloy::primitives::Address;

pub use error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Chain the venue is operating on.
pub struct Chain {
    chain_id: u64,
    endpoint: Address,
    appendix_layout: appendix::AppendixLayout,
}

impl Chain {
    /// Local node with the V1 appendix layout.
    pub fn local(endpoint: Address) -> Self {
        Self::custom(1337, endpoint, appendix::AppendixLayout::V1)
    }

    pub fn custom(
        chain_id: u64,
        endpoint: Address,
        appendix_layout: appendix::AppendixLayout,
    ) -> Self {
        Self {
            chain_id,
            endpoint,
            appendix_layout,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Endpoint contract verifying every signed request but orders.
    pub fn endpoint(&self) -> Address {
        self.endpoint
    }

    pub fn appendix_layout(&self) -> appendix::AppendixLayout {
        self.appendix_layout
    }

    pub fn appendix_codec(&self) -> appendix::AppendixCodec {
        appendix::AppendixCodec::new(self.appendix_layout)
    }
}
