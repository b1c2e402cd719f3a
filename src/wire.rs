//! Engine `execute` payloads for signed orders.
//!
//! Integers travel as decimal strings and byte fields as `0x` hex, the
//! engine rejects JSON numbers for anything wider than 53 bits.

use std::str::FromStr;

use alloy::primitives::{B256, hex};
use serde::{Deserialize, Serialize};

use crate::{
    eip712::{EIP712IsolatedOrderValues, EIP712OrderValues, SignedOrder},
    types::{ProductId, RequestId},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Order values as sent to and returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWire {
    pub sender: String,
    #[serde(rename = "priceX18")]
    pub price_x18: String,
    pub amount: String,
    pub expiration: String,
    pub nonce: String,
    pub appendix: String,
}

/// Isolated order values, the order fields plus margin at x18.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsolatedOrderWire {
    #[serde(flatten)]
    pub order: OrderWire,
    pub margin: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderPayload {
    pub product_id: ProductId,
    pub order: OrderWire,
    pub signature: String,
    pub id: Option<RequestId>,
    /// Engine defaults to `true`.
    pub spot_leverage: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceIsolatedOrderPayload {
    pub product_id: ProductId,
    pub isolated_order: IsolatedOrderWire,
    pub signature: String,
    pub id: Option<RequestId>,
    /// Engine defaults to `false`.
    pub borrow_margin: Option<bool>,
}

/// Body of an engine `execute` request, keyed by request type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteRequest {
    PlaceOrder(PlaceOrderPayload),
    PlaceIsolatedOrder(PlaceIsolatedOrderPayload),
}

impl From<&EIP712OrderValues> for OrderWire {
    fn from(order: &EIP712OrderValues) -> Self {
        Self {
            sender: order.sender.to_string(),
            price_x18: order.priceX18.to_string(),
            amount: order.amount.to_string(),
            expiration: order.expiration.to_string(),
            nonce: order.nonce.to_string(),
            appendix: order.appendix.to_string(),
        }
    }
}

impl TryFrom<&OrderWire> for EIP712OrderValues {
    type Error = WireError;

    fn try_from(wire: &OrderWire) -> Result<Self, Self::Error> {
        Ok(Self {
            sender: parse::<B256>("sender", &wire.sender)?,
            priceX18: parse("priceX18", &wire.price_x18)?,
            amount: parse("amount", &wire.amount)?,
            expiration: parse("expiration", &wire.expiration)?,
            nonce: parse("nonce", &wire.nonce)?,
            appendix: parse("appendix", &wire.appendix)?,
        })
    }
}

impl From<&EIP712IsolatedOrderValues> for IsolatedOrderWire {
    fn from(order: &EIP712IsolatedOrderValues) -> Self {
        Self {
            order: OrderWire {
                sender: order.sender.to_string(),
                price_x18: order.priceX18.to_string(),
                amount: order.amount.to_string(),
                expiration: order.expiration.to_string(),
                nonce: order.nonce.to_string(),
                appendix: order.appendix.to_string(),
            },
            margin: order.margin.to_string(),
        }
    }
}

impl TryFrom<&IsolatedOrderWire> for EIP712IsolatedOrderValues {
    type Error = WireError;

    fn try_from(wire: &IsolatedOrderWire) -> Result<Self, Self::Error> {
        let order = EIP712OrderValues::try_from(&wire.order)?;
        Ok(Self {
            sender: order.sender,
            priceX18: order.priceX18,
            amount: order.amount,
            expiration: order.expiration,
            nonce: order.nonce,
            appendix: order.appendix,
            margin: parse("margin", &wire.margin)?,
        })
    }
}

impl PlaceOrderPayload {
    pub fn new(signed: &SignedOrder, id: Option<RequestId>, spot_leverage: Option<bool>) -> Self {
        Self {
            product_id: signed.product_id,
            order: OrderWire::from(&signed.order),
            signature: hex::encode_prefixed(signed.signature.as_bytes()),
            id,
            spot_leverage,
        }
    }
}

impl PlaceIsolatedOrderPayload {
    pub fn new(
        signed: &SignedOrder<EIP712IsolatedOrderValues>,
        id: Option<RequestId>,
        borrow_margin: Option<bool>,
    ) -> Self {
        Self {
            product_id: signed.product_id,
            isolated_order: IsolatedOrderWire::from(&signed.order),
            signature: hex::encode_prefixed(signed.signature.as_bytes()),
            id,
            borrow_margin,
        }
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, WireError> {
    value.parse().map_err(|_| WireError::InvalidField {
        field,
        value: value.to_string(),
    })
}
