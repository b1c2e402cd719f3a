use crate::num::Converter;

pub const TRIGGER_BITS: usize = 2;
pub const REDUCE_ONLY_BITS: usize = 1;
pub const ORDER_TYPE_BITS: usize = 2;
pub const ISOLATED_BITS: usize = 1;
pub const VERSION_BITS: usize = 8;

/// Width of the packed TWAP parameters: 32 bits of order count and
/// 32 bits of x6 slippage.
pub const TWAP_BITS: usize = 64;

const FLAG_BITS: usize = TRIGGER_BITS + REDUCE_ONLY_BITS + ORDER_TYPE_BITS + ISOLATED_BITS;

/// Bit layout of one appendix generation.
///
/// ```text
/// |   value   | reserved | trigger | reduceOnly | orderType | isolated | version |
/// | value_bits| reserved | 2 bits  | 1 bit      | 2 bits    | 1 bit    | 8 bits  |
/// ```
///
/// | Layout | value | reserved | margin | TWAP position in value |
/// |--------|-------|----------|--------|------------------------|
/// | V0     | 96    | 18       | x18    | bits 95..32            |
/// | V1     | 64    | 50       | x6     | bits 63..0             |
///
/// The two are wire-incompatible. A deployment uses exactly one, the codec
/// never tries to guess the layout from the packed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AppendixLayout {
    version: u8,
    value_bits: usize,
    reserved_bits: usize,
    margin: Converter,
}

impl AppendixLayout {
    /// 96-bit value region, isolated margin stored at x18.
    pub const V0: Self = Self {
        version: 0,
        value_bits: 96,
        reserved_bits: 18,
        margin: Converter::X18,
    };

    /// 64-bit value region, isolated margin rescaled to x6.
    pub const V1: Self = Self {
        version: 1,
        value_bits: 64,
        reserved_bits: 50,
        margin: Converter::X6,
    };

    /// Layout for a version byte.
    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            0 => Some(Self::V0),
            1 => Some(Self::V1),
            _ => None,
        }
    }

    /// Version byte stored in the 8 least significant bits.
    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn value_bits(&self) -> usize {
        self.value_bits
    }

    pub fn reserved_bits(&self) -> usize {
        self.reserved_bits
    }

    /// Wire precision of isolated margin.
    pub fn margin_converter(&self) -> Converter {
        self.margin
    }

    /// Offset of the packed TWAP parameters inside the value region.
    pub fn twap_offset(&self) -> usize {
        self.value_bits - TWAP_BITS
    }

    pub fn total_bits(&self) -> usize {
        self.value_bits + self.reserved_bits + FLAG_BITS + VERSION_BITS
    }
}
