//! Error types for order appendix packing and unpacking.

use thiserror::Error;

use crate::num::NumError;

/// Error type for appendix codec operations.
///
/// Every variant means a programming or version mismatch, an order that
/// produced one must not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppendixError {
    /// Order type bits do not match any known execution type.
    #[error("unknown order type: {0}")]
    UnknownOrderType(u8),

    /// Trigger bits do not match any known trigger type.
    #[error("unknown trigger type: {0}")]
    UnknownTriggerType(u8),

    /// Packed appendix was produced by another layout generation.
    #[error("appendix version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: u8, found: u8 },

    /// Reserved padding is not zero.
    #[error("reserved appendix bits are set: {0:#x}")]
    ReservedBitsSet(u64),

    /// Field value does not fit its allotted bit width.
    #[error("{field} does not fit in {bits} bits")]
    ValueOutOfRange { field: &'static str, bits: usize },

    /// Both isolated margin and TWAP parameters are set.
    #[error("order cannot be both isolated and TWAP")]
    ConflictingPayload,

    /// TWAP parameters are set without a TWAP trigger.
    #[error("TWAP parameters require a twap or twap_custom_amounts trigger")]
    TwapTriggerRequired,

    /// Isolated order carries a TWAP trigger, the value region can hold only one.
    #[error("isolated order cannot use a TWAP trigger")]
    IsolatedTwap,

    /// Packed value is wider than the layout.
    #[error("packed appendix exceeds {bits} bits")]
    Overflow { bits: usize },

    /// Packed value is not a decimal integer.
    #[error("invalid packed appendix: {0}")]
    InvalidInteger(String),

    #[error("numeric error: {0}")]
    Num(#[from] NumError),
}

/// Result type for appendix codec operations.
pub type AppendixResult<T> = Result<T, AppendixError>;
