use alloy::{
    primitives::{Address, address},
    signers::local::PrivateKeySigner,
};
use fastnum::{udec64, udec128};
use nado_sdk::{
    Chain,
    appendix::AppendixLayout,
    eip712::{self, EIP712OrderValues, IsolatedOrderParams, OrderParams, OrderSigner},
    nonce::{self, OrderNonce},
    types::{OrderAppendix, OrderExecutionType, Subaccount, TriggerType},
    wire::{ExecuteRequest, PlaceIsolatedOrderPayload, PlaceOrderPayload},
};

const ENDPOINT: Address = address!("0x05ec92D78ED421f3D3Ada77FFdE167106565974E");

/// Builds, signs and serializes a TWAP order, then decodes the engine
/// payload back into the same order.
#[tokio::test]
async fn test_twap_order_round_trip() -> nado_sdk::Result<()> {
    let chain = Chain::local(ENDPOINT);
    let codec = chain.appendix_codec();
    let wallet = PrivateKeySigner::random();
    let owner = wallet.address();
    let signer = OrderSigner::new(chain, Some(wallet));

    let appendix = OrderAppendix::new(OrderExecutionType::Ioc)
        .with_trigger(TriggerType::Twap)
        .with_reduce_only(true)
        .with_twap(12, udec64!(0.0025));
    let nonce = OrderNonce::generate()?;
    let params = OrderParams {
        subaccount: Subaccount::new(owner, "default"),
        expiration: 4611687701117784255,
        price: udec128!(3100.25),
        amount: 2_500_000_000_000_000_000,
        nonce,
        appendix: codec.pack(&appendix)?,
    };

    let signed = signer.sign_order(3, &params).await?;
    assert_eq!(
        signed
            .signature
            .recover_address_from_prehash(&signed.digest)
            .unwrap(),
        owner
    );

    let request = ExecuteRequest::PlaceOrder(PlaceOrderPayload::new(&signed, Some(1), Some(false)));
    let json = serde_json::to_string(&request).unwrap();

    // Engine side: decode the payload and check every part of the order.
    let ExecuteRequest::PlaceOrder(payload) = serde_json::from_str(&json).unwrap() else {
        panic!("expected place_order");
    };
    let order = EIP712OrderValues::try_from(&payload.order)?;
    assert_eq!(order, signed.order);
    assert_eq!(
        eip712::order_digest(&order, signer.chain().chain_id(), payload.product_id),
        signed.digest
    );
    assert_eq!(codec.unpack_str(&payload.order.appendix)?, appendix);
    assert_eq!(
        nonce::recv_time_from_nonce(&payload.order.nonce)?,
        nonce.recv_time_ms()
    );
    assert_eq!(payload.spot_leverage, Some(false));
    Ok(())
}

/// Isolated order on the V0 layout keeps the full x18 margin.
#[tokio::test]
async fn test_isolated_order_on_v0_layout() -> nado_sdk::Result<()> {
    let chain = Chain::custom(763373, ENDPOINT, AppendixLayout::V0);
    let codec = chain.appendix_codec();
    let wallet = PrivateKeySigner::random();
    let owner = wallet.address();
    let signer = OrderSigner::new(chain, Some(wallet));

    let appendix = OrderAppendix::new(OrderExecutionType::PostOnly)
        .with_isolated(udec128!(250.123456789012345678));
    let params = IsolatedOrderParams {
        order: OrderParams {
            subaccount: Subaccount::new(owner, "default"),
            expiration: 1_900_000_000,
            price: udec128!(0.5),
            amount: -1_000_000_000_000_000_000,
            nonce: OrderNonce::at(1_700_000_000_000)?,
            appendix: codec.pack(&appendix)?,
        },
        margin: udec128!(250.123456789012345678),
    };

    let signed = signer.sign_isolated_order(7, &params).await?;
    assert_eq!(signed.order.margin, 250_123_456_789_012_345_678);

    let payload = PlaceIsolatedOrderPayload::new(&signed, None, Some(true));
    let decoded = codec.unpack(payload.isolated_order.order.appendix.parse().unwrap())?;
    assert_eq!(
        decoded.isolated().unwrap().margin(),
        udec128!(250.123456789012345678)
    );

    // The same margin loses everything below x6 on the V1 layout.
    let v1 = Chain::local(ENDPOINT).appendix_codec();
    let decoded = v1.unpack(v1.pack(&appendix)?)?;
    assert_eq!(decoded.isolated().unwrap().margin(), udec128!(250.123456));
    Ok(())
}

/// Digests identify orders: identical inputs give identical digests, any
/// change in the inputs gives another one.
#[test]
fn test_digest_identifies_order() -> nado_sdk::Result<()> {
    let builder = eip712::Eip712Builder::new();
    let params = OrderParams {
        subaccount: Subaccount::new(ENDPOINT, "default"),
        expiration: 1_900_000_000,
        price: udec128!(100),
        amount: 1,
        nonce: OrderNonce::new(1_700_000_000_000, 1)?,
        appendix: Chain::local(ENDPOINT)
            .appendix_codec()
            .pack(&OrderAppendix::new(OrderExecutionType::Fok))?,
    };
    let order = builder.order(&params)?;
    let digest = eip712::order_digest(&order, 1337, 1);
    assert_eq!(eip712::order_digest(&builder.order(&params)?, 1337, 1), digest);

    let other = builder.order(&OrderParams {
        nonce: OrderNonce::new(1_700_000_000_000, 2)?,
        ..params.clone()
    })?;
    assert_ne!(eip712::order_digest(&other, 1337, 1), digest);
    Ok(())
}
