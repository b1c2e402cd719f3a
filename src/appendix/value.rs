//! Codecs for the mode-specific value region of the appendix.

use alloy::primitives::U256;

use super::{
    AppendixError, AppendixLayout, AppendixResult,
    bits::{fits_width, mask_to_width},
};
use crate::{
    num::Converter,
    types::{IsolatedFields, TwapFields},
};

const NUM_ORDERS_BITS: usize = 32;
const SLIPPAGE_BITS: usize = 32;

/// Pack TWAP parameters into 64 bits.
///
/// ```text
/// | num_orders | slippage_x6 |
/// | 63..32     | 31..0       |
/// ```
pub fn pack_twap(twap: &TwapFields) -> AppendixResult<U256> {
    let slippage_x6 = Converter::X6.scale_up(twap.slippage_frac())?;
    if !fits_width(slippage_x6, SLIPPAGE_BITS) {
        return Err(AppendixError::ValueOutOfRange {
            field: "slippage_frac",
            bits: SLIPPAGE_BITS,
        });
    }
    Ok((U256::from(twap.num_orders()) << SLIPPAGE_BITS) | slippage_x6)
}

/// Inverse of [`pack_twap`], bits above 64 are ignored.
pub fn unpack_twap(value: U256) -> AppendixResult<TwapFields> {
    let num_orders = mask_to_width(value >> SLIPPAGE_BITS, NUM_ORDERS_BITS);
    let slippage_x6 = mask_to_width(value, SLIPPAGE_BITS);
    Ok(TwapFields::new(
        num_orders.saturating_to::<u32>(),
        Converter::X6.scale_down::<1>(slippage_x6)?,
    ))
}

/// Pack isolated margin at the layout's precision over the whole value region.
pub fn pack_isolated(isolated: &IsolatedFields, layout: &AppendixLayout) -> AppendixResult<U256> {
    let margin = layout.margin_converter().scale_up(isolated.margin())?;
    if !fits_width(margin, layout.value_bits()) {
        return Err(AppendixError::ValueOutOfRange {
            field: "margin",
            bits: layout.value_bits(),
        });
    }
    Ok(margin)
}

pub fn unpack_isolated(value: U256, layout: &AppendixLayout) -> AppendixResult<IsolatedFields> {
    let margin = mask_to_width(value, layout.value_bits());
    Ok(IsolatedFields::new(
        layout.margin_converter().scale_down::<2>(margin)?,
    ))
}

/// Place packed TWAP parameters inside the layout's value region.
pub(crate) fn pack_twap_value(twap: &TwapFields, layout: &AppendixLayout) -> AppendixResult<U256> {
    Ok(pack_twap(twap)? << layout.twap_offset())
}

pub(crate) fn unpack_twap_value(value: U256, layout: &AppendixLayout) -> AppendixResult<TwapFields> {
    unpack_twap(value >> layout.twap_offset())
}
