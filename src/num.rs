use alloy::primitives::U256;
use fastnum::{
    bint,
    decimal::{Context, RoundingMode, UnsignedDecimal},
};

/// Error converting between decimal and fixed-point wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    /// Scaled value does not fit the target integer.
    #[error("{value} does not fit after scaling by 10^{decimals}")]
    Overflow { value: String, decimals: u8 },
}

/// Fixed-point to decimal converter.
///
/// Scaling up always rounds toward zero, the venue recomputes signed hashes
/// from the same integers so the direction has to match bit-for-bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Converter {
    decimals: u8,
}

impl Converter {
    /// Default venue precision for prices, amounts and margins.
    pub const X18: Self = Self::new(18);

    /// Wire precision of TWAP slippage and v1 isolated margin.
    pub const X6: Self = Self::new(6);

    pub const fn new(decimals: u8) -> Self {
        Self { decimals }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Multiply `value` by 10^decimals, dropping digits beyond the precision.
    pub fn scale_up<const N: usize>(&self, value: UnsignedDecimal<N>) -> Result<U256, NumError> {
        let overflow = || NumError::Overflow {
            value: value.to_string(),
            decimals: self.decimals,
        };
        let unscaled = U256::try_from_le_slice(value.digits().to_radix_le(256).as_slice())
            .ok_or_else(overflow)?;
        let shift = self.decimals as i32 - value.fractional_digits_count() as i32;
        if shift >= 0 {
            pow10(shift.unsigned_abs())
                .and_then(|factor| unscaled.checked_mul(factor))
                .ok_or_else(overflow)
        } else {
            // Divisor larger than U256 means everything is below the precision.
            Ok(pow10(shift.unsigned_abs())
                .map(|divisor| unscaled / divisor)
                .unwrap_or(U256::ZERO))
        }
    }

    /// Interpret `value` as a fixed-point number with `decimals` precision.
    pub fn scale_down<const N: usize>(&self, value: U256) -> Result<UnsignedDecimal<N>, NumError> {
        let unscaled =
            bint::UInt::<N>::from_le_slice(value.as_le_slice()).ok_or(NumError::Overflow {
                value: value.to_string(),
                decimals: self.decimals,
            })?;
        Ok(UnsignedDecimal::<N>::from_parts(
            unscaled,
            -(self.decimals as i32),
            Context::default().with_rounding_mode(RoundingMode::Floor),
        ))
    }
}

fn pow10(exp: u32) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exp))
}
