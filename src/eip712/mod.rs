//! EIP712 value mapping, digests and signing for Nado requests.
//!
//! Orders are verified against a per-product address derived from the
//! product id, every other request against the endpoint contract of the
//! chain. Both share the `Nado` / `0.0.1` domain.
//!
//! The order digest doubles as the order identifier for cancellations and
//! lookups, it depends only on the values passed in.

mod error;
mod sender;
mod signer;
mod structs;
mod values;

use alloy::primitives::{Address, B256, U256};
use alloy_sol_types::{Eip712Domain, SolStruct, eip712_domain};

pub use error::SigningError;
pub use sender::{PackedSender, SUBACCOUNT_NAME_BYTES, SenderEncoder};
pub use signer::{OrderSigner, SignedOrder, SignedRequest};
pub use structs::*;
pub use values::{Eip712Builder, IsolatedOrderParams, OrderParams};

use crate::types::ProductId;

pub const DOMAIN_NAME: &str = "Nado";
pub const DOMAIN_VERSION: &str = "0.0.1";

/// Signing domain for requests verified by `verifying_contract`.
pub fn nado_domain(chain_id: u64, verifying_contract: Address) -> Eip712Domain {
    eip712_domain! {
        name: DOMAIN_NAME,
        version: DOMAIN_VERSION,
        chain_id: chain_id,
        verifying_contract: verifying_contract,
    }
}

/// Verifying contract of orders on `product_id`, the id zero-extended to
/// 20 bytes.
pub fn order_verifying_address(product_id: ProductId) -> Address {
    Address::from_word(B256::from(U256::from(product_id)))
}

/// Digest of a `place_order` or `place_isolated_order` message.
pub fn order_digest<T: SolStruct>(order: &T, chain_id: u64, product_id: ProductId) -> B256 {
    order.eip712_signing_hash(&nado_domain(chain_id, order_verifying_address(product_id)))
}

/// Digest of a request verified by the endpoint contract.
pub fn request_digest<T: SolStruct>(request: &T, chain_id: u64, endpoint: Address) -> B256 {
    request.eip712_signing_hash(&nado_domain(chain_id, endpoint))
}
