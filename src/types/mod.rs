mod appendix;
mod liquidation;
mod order;
mod subaccount;

pub use appendix::{IsolatedFields, OrderAppendix, TwapFields};
pub use liquidation::LiquidationMode;
pub use order::{OrderExecutionType, TriggerType};
pub use subaccount::Subaccount;

/// ID of a spot or perp product.
pub type ProductId = u32;

/// Client-side ID echoed back by the engine with execute responses.
pub type RequestId = u64;
