use alloy::{
    primitives::{B256, Signature},
    signers::Signer,
};
use alloy_sol_types::SolStruct;
use tracing::debug;

use super::{
    EIP712IsolatedOrderValues, EIP712OrderValues, Eip712Builder, IsolatedOrderParams, OrderParams,
    PackedSender, SenderEncoder, SigningError, order_digest, request_digest,
};
use crate::{Chain, types::ProductId};

/// Order values together with their digest and signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedOrder<T = EIP712OrderValues> {
    pub product_id: ProductId,
    pub order: T,
    /// Order identifier used by cancellations.
    pub digest: B256,
    pub signature: Signature,
}

/// Non-order request values with their signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest<T> {
    pub request: T,
    pub digest: B256,
    pub signature: Signature,
}

/// Signs Nado requests for one chain with an optional signer.
///
/// Without a signer only the digests are available, any signing call
/// fails with [`SigningError::MissingSigner`] before the values are mapped.
#[derive(Clone, Debug)]
pub struct OrderSigner<S, E = PackedSender> {
    chain: Chain,
    builder: Eip712Builder<E>,
    signer: Option<S>,
}

impl<S: Signer + Send + Sync> OrderSigner<S, PackedSender> {
    pub fn new(chain: Chain, signer: Option<S>) -> Self {
        Self::with_builder(chain, Eip712Builder::new(), signer)
    }
}

impl<S: Signer + Send + Sync, E: SenderEncoder> OrderSigner<S, E> {
    pub fn with_builder(chain: Chain, builder: Eip712Builder<E>, signer: Option<S>) -> Self {
        Self {
            chain,
            builder,
            signer,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn builder(&self) -> &Eip712Builder<E> {
        &self.builder
    }

    pub fn signer(&self) -> Option<&S> {
        self.signer.as_ref()
    }

    pub async fn sign_order(
        &self,
        product_id: ProductId,
        params: &OrderParams,
    ) -> Result<SignedOrder, SigningError> {
        let signer = self.signer.as_ref().ok_or(SigningError::MissingSigner)?;
        let order = self.builder.order(params)?;
        let digest = order_digest(&order, self.chain.chain_id(), product_id);
        let signature = signer.sign_hash(&digest).await?;
        debug!(product_id, %digest, nonce = order.nonce, appendix = order.appendix, "signed order");
        Ok(SignedOrder {
            product_id,
            order,
            digest,
            signature,
        })
    }

    pub async fn sign_isolated_order(
        &self,
        product_id: ProductId,
        params: &IsolatedOrderParams,
    ) -> Result<SignedOrder<EIP712IsolatedOrderValues>, SigningError> {
        let signer = self.signer.as_ref().ok_or(SigningError::MissingSigner)?;
        let order = self.builder.isolated_order(params)?;
        let digest = order_digest(&order, self.chain.chain_id(), product_id);
        let signature = signer.sign_hash(&digest).await?;
        debug!(product_id, %digest, nonce = order.nonce, "signed isolated order");
        Ok(SignedOrder {
            product_id,
            order,
            digest,
            signature,
        })
    }

    /// Sign a request verified by the endpoint contract, values come from
    /// one of the [`Eip712Builder`] mappings.
    pub async fn sign_request<T: SolStruct + Send + Sync>(
        &self,
        request: T,
    ) -> Result<SignedRequest<T>, SigningError> {
        let signer = self.signer.as_ref().ok_or(SigningError::MissingSigner)?;
        let digest = request_digest(&request, self.chain.chain_id(), self.chain.endpoint());
        let signature = signer.sign_hash(&digest).await?;
        debug!(%digest, primary_type = T::NAME, "signed request");
        Ok(SignedRequest {
            request,
            digest,
            signature,
        })
    }
}
