use alloy::primitives::{U256, ruint::UintTryFrom};

/// Truncate `value` to its `bit_width` least significant bits.
///
/// Takes a [`U256`] or any native integer. Never fails, anything above the
/// width is dropped and a negative integer keeps the bit pattern of its
/// own width.
pub fn mask_to_width<T>(value: T, bit_width: usize) -> U256
where
    U256: UintTryFrom<T>,
{
    let value = U256::wrapping_from(value);
    if bit_width >= U256::BITS {
        value
    } else if bit_width == 0 {
        U256::ZERO
    } else {
        value & (U256::MAX >> (U256::BITS - bit_width))
    }
}

/// Whether `value` fits into `bit_width` bits without truncation.
pub fn fits_width(value: U256, bit_width: usize) -> bool {
    value.bit_len() <= bit_width
}
