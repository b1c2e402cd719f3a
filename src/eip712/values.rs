use alloy::primitives::{Address, B256, U256};
use fastnum::UD128;

use super::{
    BurnNlp, Cancellation, CancellationProducts, EIP712IsolatedOrderValues, EIP712OrderValues,
    LeaderboardAuthentication, LinkSigner, LiquidateSubaccount, ListTriggerOrders, MintNlp,
    PackedSender, SenderEncoder, SigningError, TransferQuote, WithdrawCollateral,
};
use crate::{
    nonce::OrderNonce,
    num::Converter,
    types::{LiquidationMode, ProductId, Subaccount},
};

/// Order parameters in display units, as the caller builds them.
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct OrderParams {
    pub subaccount: Subaccount,
    /// Expiration time in seconds.
    pub expiration: u64,
    /// Limit price.
    #[debug("{price}")]
    pub price: UD128,
    /// Positive for buy, negative for sell, already at x18.
    pub amount: i128,
    pub nonce: OrderNonce,
    /// Packed order appendix, see [`crate::appendix::AppendixCodec::pack`].
    pub appendix: u128,
}

/// Isolated order parameters, margin in display units.
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct IsolatedOrderParams {
    pub order: OrderParams,
    #[debug("{margin}")]
    pub margin: UD128,
}

/// Maps request parameters to the typed-data values the venue hashes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eip712Builder<E = PackedSender> {
    encoder: E,
}

impl Eip712Builder<PackedSender> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: SenderEncoder> Eip712Builder<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    pub fn sender(&self, subaccount: &Subaccount) -> Result<B256, SigningError> {
        self.encoder.encode(subaccount)
    }

    /// Values for `place_order`, price rescaled to x18.
    pub fn order(&self, params: &OrderParams) -> Result<EIP712OrderValues, SigningError> {
        Ok(EIP712OrderValues {
            sender: self.sender(&params.subaccount)?,
            priceX18: to_x18_i128("price", params.price)?,
            amount: params.amount,
            expiration: params.expiration,
            nonce: params.nonce.as_u64(),
            appendix: params.appendix,
        })
    }

    /// Values for `place_isolated_order`, price and margin rescaled to x18.
    pub fn isolated_order(
        &self,
        params: &IsolatedOrderParams,
    ) -> Result<EIP712IsolatedOrderValues, SigningError> {
        let order = self.order(&params.order)?;
        Ok(EIP712IsolatedOrderValues {
            sender: order.sender,
            priceX18: order.priceX18,
            amount: order.amount,
            expiration: order.expiration,
            nonce: order.nonce,
            appendix: order.appendix,
            margin: to_x18_i128("margin", params.margin)?,
        })
    }

    /// Values for `cancel_orders`, `digests` pair up with `product_ids`.
    pub fn cancel_orders(
        &self,
        subaccount: &Subaccount,
        product_ids: Vec<ProductId>,
        digests: Vec<B256>,
        nonce: OrderNonce,
    ) -> Result<Cancellation, SigningError> {
        Ok(Cancellation {
            sender: self.sender(subaccount)?,
            productIds: product_ids,
            digests,
            nonce: nonce.as_u64(),
        })
    }

    pub fn cancel_product_orders(
        &self,
        subaccount: &Subaccount,
        product_ids: Vec<ProductId>,
        nonce: OrderNonce,
    ) -> Result<CancellationProducts, SigningError> {
        Ok(CancellationProducts {
            sender: self.sender(subaccount)?,
            productIds: product_ids,
            nonce: nonce.as_u64(),
        })
    }

    /// Values for `withdraw_collateral`, `amount` at x18. `nonce` is the
    /// subaccount's transaction nonce reported by the engine.
    pub fn withdraw_collateral(
        &self,
        subaccount: &Subaccount,
        product_id: ProductId,
        amount: u128,
        nonce: u64,
    ) -> Result<WithdrawCollateral, SigningError> {
        Ok(WithdrawCollateral {
            sender: self.sender(subaccount)?,
            productId: product_id,
            amount,
            nonce,
        })
    }

    /// Values for `liquidate_subaccount`. `amount` is at x18, negative to
    /// liquidate a short position.
    pub fn liquidate_subaccount(
        &self,
        subaccount: &Subaccount,
        liquidatee: &Subaccount,
        mode: LiquidationMode,
        health_group: u32,
        amount: i128,
        nonce: u64,
    ) -> Result<LiquidateSubaccount, SigningError> {
        Ok(LiquidateSubaccount {
            sender: self.sender(subaccount)?,
            liquidatee: self.sender(liquidatee)?,
            mode: mode.code(),
            healthGroup: health_group,
            amount,
            nonce,
        })
    }

    /// Values for `link_signer`, the linked wallet goes in as a subaccount
    /// with an empty name. [`Address::ZERO`] revokes the current one.
    pub fn link_signer(
        &self,
        subaccount: &Subaccount,
        signer: Address,
        nonce: u64,
    ) -> Result<LinkSigner, SigningError> {
        Ok(LinkSigner {
            sender: self.sender(subaccount)?,
            signer: self.sender(&Subaccount::new(signer, ""))?,
            nonce,
        })
    }

    /// Values for `transfer_quote` to another subaccount of the same owner.
    pub fn transfer_quote(
        &self,
        subaccount: &Subaccount,
        recipient_name: &str,
        amount: u128,
        nonce: u64,
    ) -> Result<TransferQuote, SigningError> {
        Ok(TransferQuote {
            sender: self.sender(subaccount)?,
            recipient: self.sender(&Subaccount::new(subaccount.owner(), recipient_name))?,
            amount,
            nonce,
        })
    }

    pub fn list_trigger_orders(
        &self,
        subaccount: &Subaccount,
        recv_time_ms: u64,
    ) -> Result<ListTriggerOrders, SigningError> {
        Ok(ListTriggerOrders {
            sender: self.sender(subaccount)?,
            recvTime: recv_time_ms,
        })
    }

    /// Values for `leaderboard_authentication`, `expiration` in seconds.
    pub fn leaderboard_authentication(
        &self,
        subaccount: &Subaccount,
        expiration: u64,
    ) -> Result<LeaderboardAuthentication, SigningError> {
        Ok(LeaderboardAuthentication {
            sender: self.sender(subaccount)?,
            expiration,
        })
    }

    pub fn mint_nlp(
        &self,
        subaccount: &Subaccount,
        quote_amount: u128,
        nonce: u64,
    ) -> Result<MintNlp, SigningError> {
        Ok(MintNlp {
            sender: self.sender(subaccount)?,
            quoteAmount: quote_amount,
            nonce,
        })
    }

    pub fn burn_nlp(
        &self,
        subaccount: &Subaccount,
        nlp_amount: u128,
        nonce: u64,
    ) -> Result<BurnNlp, SigningError> {
        Ok(BurnNlp {
            sender: self.sender(subaccount)?,
            nlpAmount: nlp_amount,
            nonce,
        })
    }
}

fn to_x18_i128(field: &'static str, value: UD128) -> Result<i128, SigningError> {
    let scaled: U256 = Converter::X18.scale_up(value)?;
    i128::try_from(scaled.saturating_to::<u128>())
        .map_err(|_| SigningError::ValueOutOfRange { field })
}
