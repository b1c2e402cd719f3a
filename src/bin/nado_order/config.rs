//! Configuration for the order tool.
//!
//! Configuration comes from two sources:
//! - Environment variables prefixed with `NADO_` (via .env file or shell):
//!   chain, endpoint, appendix layout and signing key
//! - CLI arguments: the command and the order to work on

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use clap::{Args, Parser, Subcommand};
use fastnum::{UD64, UD128, decimal::Context};
use nado_sdk::{
    Chain,
    appendix::AppendixLayout,
    nonce::OrderNonce,
    types::{OrderAppendix, OrderExecutionType, ProductId, TriggerType},
};

/// Environment configuration (chain details, credentials).
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// Chain ID of the venue deployment
    pub chain_id: Option<u64>,

    /// Endpoint contract address
    pub endpoint: Option<String>,

    /// Appendix layout version of the deployment (default: 1)
    pub appendix_version: Option<u8>,

    /// Private key for signing orders
    pub private_key: Option<String>,
}

impl EnvConfig {
    /// Load `NADO_*` environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("NADO_").from_env()
    }

    pub fn appendix_layout(&self) -> Result<AppendixLayout, ConfigError> {
        let version = self.appendix_version.unwrap_or(1);
        AppendixLayout::from_version(version).ok_or(ConfigError::UnknownAppendixVersion(version))
    }

    pub fn chain(&self) -> Result<Chain, ConfigError> {
        let chain_id = self
            .chain_id
            .ok_or(ConfigError::Missing("NADO_CHAIN_ID"))?;
        let endpoint: Address = self
            .endpoint
            .as_deref()
            .ok_or(ConfigError::Missing("NADO_ENDPOINT"))?
            .parse()
            .map_err(|_| ConfigError::InvalidAddress("NADO_ENDPOINT".to_string()))?;
        Ok(Chain::custom(chain_id, endpoint, self.appendix_layout()?))
    }

    /// Signer from `NADO_PRIVATE_KEY`, none when unset.
    pub fn signer(&self) -> Result<Option<PrivateKeySigner>, ConfigError> {
        self.private_key
            .as_deref()
            .map(|key| key.parse().map_err(|_| ConfigError::InvalidPrivateKey))
            .transpose()
    }
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "nado-order")]
#[command(about = "Pack, inspect, hash and sign Nado orders")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pack an order appendix
    Pack(AppendixArgs),

    /// Unpack a decimal-string order appendix
    Unpack { appendix: String },

    /// Generate an order nonce
    Nonce {
        /// Recv time in milliseconds (default: now + 90s)
        #[arg(long)]
        recv_time_ms: Option<u64>,
    },

    /// Extract the recv time from an order nonce
    RecvTime { nonce: OrderNonce },

    /// Compute the digest of an order
    Digest(OrderArgs),

    /// Sign an order and print the engine payload
    Sign(OrderArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AppendixArgs {
    /// Execution type: default, ioc, fok or post_only
    #[arg(long, default_value = "default")]
    pub order_type: OrderExecutionType,

    /// Trigger type: price, twap or twap_custom_amounts
    #[arg(long)]
    pub trigger: Option<TriggerType>,

    #[arg(long)]
    pub reduce_only: bool,

    /// Isolated margin in quote units (e.g., 100.5)
    #[arg(long)]
    pub margin: Option<String>,

    /// Number of TWAP orders
    #[arg(long)]
    pub twap_orders: Option<u32>,

    /// Maximum slippage of each TWAP order (e.g., 0.005)
    #[arg(long)]
    pub twap_slippage: Option<String>,
}

impl AppendixArgs {
    pub fn to_appendix(&self) -> Result<OrderAppendix, ConfigError> {
        let mut appendix =
            OrderAppendix::new(self.order_type).with_reduce_only(self.reduce_only);
        if let Some(trigger) = self.trigger {
            appendix = appendix.with_trigger(trigger);
        }
        if let Some(margin) = &self.margin {
            let margin = UD128::from_str(margin, Context::default())
                .map_err(|_| ConfigError::InvalidDecimal("margin".to_string()))?;
            appendix = appendix.with_isolated(margin);
        }
        match (self.twap_orders, &self.twap_slippage) {
            (Some(num_orders), Some(slippage)) => {
                let slippage = UD64::from_str(slippage, Context::default())
                    .map_err(|_| ConfigError::InvalidDecimal("twap_slippage".to_string()))?;
                appendix = appendix.with_twap(num_orders, slippage);
            }
            (None, None) => {}
            _ => return Err(ConfigError::IncompleteTwap),
        }
        Ok(appendix)
    }
}

#[derive(Clone, Debug, Args)]
pub struct OrderArgs {
    #[arg(long)]
    pub product_id: ProductId,

    /// Subaccount owner (default: signer address)
    #[arg(long)]
    pub owner: Option<String>,

    /// Subaccount name
    #[arg(long, default_value = "default")]
    pub subaccount: String,

    /// Limit price in quote units
    #[arg(long)]
    pub price: String,

    /// Amount at x18, negative to sell
    #[arg(long, allow_hyphen_values = true)]
    pub amount: i128,

    /// Expiration time in seconds
    #[arg(long)]
    pub expiration: u64,

    /// Order nonce (default: generated)
    #[arg(long)]
    pub nonce: Option<OrderNonce>,

    #[command(flatten)]
    pub appendix: AppendixArgs,
}

impl OrderArgs {
    pub fn price(&self) -> Result<UD128, ConfigError> {
        UD128::from_str(&self.price, Context::default())
            .map_err(|_| ConfigError::InvalidDecimal("price".to_string()))
    }

    /// Owner from the arguments, falling back to `signer`.
    pub fn owner(&self, signer: Option<Address>) -> Result<Address, ConfigError> {
        match &self.owner {
            Some(owner) => owner
                .parse()
                .map_err(|_| ConfigError::InvalidAddress(owner.clone())),
            None => signer.ok_or(ConfigError::Missing("--owner or NADO_PRIVATE_KEY")),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Unknown appendix version: {0}")]
    UnknownAppendixVersion(u8),

    #[error("Invalid decimal value for {0}")]
    InvalidDecimal(String),

    #[error("TWAP requires both --twap-orders and --twap-slippage")]
    IncompleteTwap,
}
