use alloy::primitives::U256;
use tracing::trace;

use super::{
    AppendixError, AppendixLayout, AppendixResult,
    bits::{fits_width, mask_to_width},
    layout::{ISOLATED_BITS, ORDER_TYPE_BITS, REDUCE_ONLY_BITS, TRIGGER_BITS, VERSION_BITS},
    value,
};
use crate::types::{OrderAppendix, OrderExecutionType, TriggerType};

/// Decomposed bit-field view of a packed appendix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedOrderAppendixBits {
    /// Mode-specific payload, 96 or 64 bits depending on the layout.
    pub value: U256,
    /// Padding, always zero.
    pub reserved: u64,
    pub trigger: u8,
    pub reduce_only: bool,
    pub order_type: u8,
    pub isolated: bool,
    pub version: u8,
}

/// Packs [`OrderAppendix`] into the `uint128` carried by signed orders and back.
///
/// Bound to one [`AppendixLayout`] at construction, pick the layout the
/// venue deployment runs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppendixCodec {
    layout: AppendixLayout,
}

impl AppendixCodec {
    pub const fn new(layout: AppendixLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> AppendixLayout {
        self.layout
    }

    /// Pack an appendix, validating that every field fits its width.
    pub fn pack(&self, appendix: &OrderAppendix) -> AppendixResult<u128> {
        let bits = self.to_bits(appendix)?;
        let packed = self.join(&bits);
        trace!(
            %packed,
            version = self.layout.version(),
            order_type = %appendix.order_execution_type(),
            "packed order appendix"
        );
        Ok(packed.saturating_to::<u128>())
    }

    /// Unpack an appendix produced with this codec's layout.
    pub fn unpack(&self, packed: u128) -> AppendixResult<OrderAppendix> {
        self.from_bits(&self.split(U256::from(packed))?)
    }

    /// Unpack a decimal-string appendix as found in engine and trigger responses.
    pub fn unpack_str(&self, packed: &str) -> AppendixResult<OrderAppendix> {
        let packed = U256::from_str_radix(packed.trim(), 10)
            .map_err(|_| AppendixError::InvalidInteger(packed.to_string()))?;
        self.from_bits(&self.split(packed)?)
    }

    /// Map an appendix to its raw bit fields.
    pub fn to_bits(&self, appendix: &OrderAppendix) -> AppendixResult<PackedOrderAppendixBits> {
        let value = match (appendix.twap(), appendix.isolated()) {
            (Some(_), Some(_)) => return Err(AppendixError::ConflictingPayload),
            (Some(twap), None) => {
                if !appendix.trigger_type().is_some_and(|t| t.is_twap()) {
                    return Err(AppendixError::TwapTriggerRequired);
                }
                value::pack_twap_value(twap, &self.layout)?
            }
            (None, Some(isolated)) => {
                if appendix.trigger_type().is_some_and(|t| t.is_twap()) {
                    return Err(AppendixError::IsolatedTwap);
                }
                value::pack_isolated(isolated, &self.layout)?
            }
            (None, None) => U256::ZERO,
        };

        Ok(PackedOrderAppendixBits {
            value,
            reserved: 0,
            trigger: appendix.trigger_type().map(|t| t.code()).unwrap_or_default(),
            reduce_only: appendix.reduce_only(),
            order_type: appendix.order_execution_type().code(),
            isolated: appendix.isolated().is_some(),
            version: self.layout.version(),
        })
    }

    /// Join bit fields into the packed integer, most significant field first.
    ///
    /// Every field is masked to its width, oversized values are truncated.
    pub fn join(&self, bits: &PackedOrderAppendixBits) -> U256 {
        let mut packed = mask_to_width(bits.value, self.layout.value_bits());
        packed = push(packed, U256::from(bits.reserved), self.layout.reserved_bits());
        packed = push(packed, U256::from(bits.trigger), TRIGGER_BITS);
        packed = push(packed, U256::from(bits.reduce_only as u8), REDUCE_ONLY_BITS);
        packed = push(packed, U256::from(bits.order_type), ORDER_TYPE_BITS);
        packed = push(packed, U256::from(bits.isolated as u8), ISOLATED_BITS);
        push(packed, U256::from(bits.version), VERSION_BITS)
    }

    /// Split a packed integer into bit fields, least significant field first.
    pub fn split(&self, packed: U256) -> AppendixResult<PackedOrderAppendixBits> {
        if !fits_width(packed, self.layout.total_bits()) {
            return Err(AppendixError::Overflow {
                bits: self.layout.total_bits(),
            });
        }
        let mut rest = packed;
        let version = pop(&mut rest, VERSION_BITS).saturating_to::<u8>();
        let isolated = pop(&mut rest, ISOLATED_BITS) == U256::from(1);
        let order_type = pop(&mut rest, ORDER_TYPE_BITS).saturating_to::<u8>();
        let reduce_only = pop(&mut rest, REDUCE_ONLY_BITS) == U256::from(1);
        let trigger = pop(&mut rest, TRIGGER_BITS).saturating_to::<u8>();
        let reserved = pop(&mut rest, self.layout.reserved_bits()).saturating_to::<u64>();
        let value = mask_to_width(rest, self.layout.value_bits());

        Ok(PackedOrderAppendixBits {
            value,
            reserved,
            trigger,
            reduce_only,
            order_type,
            isolated,
            version,
        })
    }

    fn from_bits(&self, bits: &PackedOrderAppendixBits) -> AppendixResult<OrderAppendix> {
        if bits.version != self.layout.version() {
            return Err(AppendixError::VersionMismatch {
                expected: self.layout.version(),
                found: bits.version,
            });
        }
        if bits.reserved != 0 {
            return Err(AppendixError::ReservedBitsSet(bits.reserved));
        }

        let order_execution_type = OrderExecutionType::try_from(bits.order_type)?;
        let trigger_type = TriggerType::from_code(bits.trigger)?;
        let (isolated, twap) = if bits.isolated {
            (Some(value::unpack_isolated(bits.value, &self.layout)?), None)
        } else if trigger_type.is_some_and(|t| t.is_twap()) {
            (None, Some(value::unpack_twap_value(bits.value, &self.layout)?))
        } else {
            (None, None)
        };

        let appendix = OrderAppendix::from_parts(
            order_execution_type,
            trigger_type,
            bits.reduce_only,
            isolated,
            twap,
        );
        trace!(?appendix, "unpacked order appendix");
        Ok(appendix)
    }
}

fn push(acc: U256, field: U256, width: usize) -> U256 {
    (acc << width) | mask_to_width(field, width)
}

fn pop(rest: &mut U256, width: usize) -> U256 {
    let field = mask_to_width(*rest, width);
    *rest >>= width;
    field
}
