//! Command handlers, each returns its result as JSON.

use alloy::signers::local::PrivateKeySigner;
use nado_sdk::{
    appendix::AppendixCodec,
    eip712::{Eip712Builder, OrderParams, OrderSigner, order_digest},
    nonce::OrderNonce,
    types::{OrderAppendix, Subaccount},
    wire::{ExecuteRequest, PlaceOrderPayload},
};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    config::{Command, EnvConfig, OrderArgs},
    error::Result,
};

pub async fn run(command: Command, env: &EnvConfig) -> Result<Value> {
    match command {
        Command::Pack(args) => {
            let codec = AppendixCodec::new(env.appendix_layout()?);
            let appendix = args.to_appendix()?;
            let packed = codec.pack(&appendix)?;
            info!(packed, version = codec.layout().version(), "appendix packed");
            Ok(json!({ "appendix": packed.to_string() }))
        }
        Command::Unpack { appendix } => {
            let codec = AppendixCodec::new(env.appendix_layout()?);
            Ok(appendix_json(&codec.unpack_str(&appendix)?))
        }
        Command::Nonce { recv_time_ms } => {
            let nonce = match recv_time_ms {
                Some(recv_time_ms) => OrderNonce::at(recv_time_ms)?,
                None => OrderNonce::generate()?,
            };
            Ok(json!({
                "nonce": nonce.to_string(),
                "recv_time_ms": nonce.recv_time_ms(),
            }))
        }
        Command::RecvTime { nonce } => Ok(json!({ "recv_time_ms": nonce.recv_time_ms() })),
        Command::Digest(args) => {
            let chain = env.chain()?;
            let signer = env.signer()?;
            let params = order_params(&args, env, signer.as_ref())?;
            let order = Eip712Builder::new().order(&params)?;
            let digest = order_digest(&order, chain.chain_id(), args.product_id);
            Ok(json!({
                "digest": digest.to_string(),
                "nonce": params.nonce.to_string(),
                "appendix": params.appendix.to_string(),
            }))
        }
        Command::Sign(args) => {
            let chain = env.chain()?;
            let signer = env.signer()?;
            let params = order_params(&args, env, signer.as_ref())?;
            let signed = OrderSigner::new(chain, signer)
                .sign_order(args.product_id, &params)
                .await?;
            info!(digest = %signed.digest, product_id = args.product_id, "order signed");
            let request = ExecuteRequest::PlaceOrder(PlaceOrderPayload::new(&signed, None, None));
            Ok(json!({
                "digest": signed.digest.to_string(),
                "request": serde_json::to_value(&request)?,
            }))
        }
    }
}

fn order_params(
    args: &OrderArgs,
    env: &EnvConfig,
    signer: Option<&PrivateKeySigner>,
) -> Result<OrderParams> {
    let owner = args.owner(signer.map(|s| s.address()))?;
    let codec = AppendixCodec::new(env.appendix_layout()?);
    let nonce = match args.nonce {
        Some(nonce) => nonce,
        None => OrderNonce::generate()?,
    };
    Ok(OrderParams {
        subaccount: Subaccount::new(owner, args.subaccount.clone()),
        expiration: args.expiration,
        price: args.price()?,
        amount: args.amount,
        nonce,
        appendix: codec.pack(&args.appendix.to_appendix()?)?,
    })
}

fn appendix_json(appendix: &OrderAppendix) -> Value {
    json!({
        "order_type": appendix.order_execution_type(),
        "trigger_type": appendix.trigger_type(),
        "reduce_only": appendix.reduce_only(),
        "isolated": appendix.isolated().map(|isolated| json!({
            "margin": isolated.margin().to_string(),
        })),
        "twap": appendix.twap().map(|twap| json!({
            "num_orders": twap.num_orders(),
            "slippage_frac": twap.slippage_frac().to_string(),
        })),
    })
}
