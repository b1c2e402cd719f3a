//! Tests for the order appendix codec.

use alloy::primitives::U256;
use fastnum::{udec64, udec128};

use super::*;
use crate::types::{OrderAppendix, OrderExecutionType, TriggerType};

const V0: AppendixCodec = AppendixCodec::new(AppendixLayout::V0);
const V1: AppendixCodec = AppendixCodec::new(AppendixLayout::V1);

/// Pack with the codec, unpack and compare the whole appendix.
macro_rules! assert_round_trip {
    ($codec:expr, $appendix:expr => $packed:expr) => {
        let appendix = $appendix;
        let packed = $codec.pack(&appendix).expect("pack");
        assert_eq!(packed, $packed, "packed value");
        let unpacked = $codec.unpack(packed).expect("unpack");
        assert_eq!(unpacked, appendix, "round trip of {packed}");
    };
    ($codec:expr, $appendix:expr) => {
        let appendix = $appendix;
        let packed = $codec.pack(&appendix).expect("pack");
        let unpacked = $codec.unpack(packed).expect("unpack");
        assert_eq!(unpacked, appendix, "round trip of {packed}");
    };
}

fn price_order() -> OrderAppendix {
    OrderAppendix::new(OrderExecutionType::Default).with_trigger(TriggerType::Price)
}

// ============================================================================
// V0: 96-bit value region, x18 margin
// ============================================================================

#[test]
fn test_v0_plain_appendix() {
    assert_round_trip!(V0, price_order() => 4096);
}

#[test]
fn test_v0_reduce_only() {
    assert_round_trip!(V0, price_order().with_reduce_only(true) => 6144);
}

#[test]
fn test_v0_isolated_margin() {
    assert_round_trip!(
        V0,
        price_order().with_isolated(udec128!(123456.789012345678901234))
            => 530242871277196831127717244047616
    );
}

#[test]
fn test_v0_twap() {
    let appendix = OrderAppendix::new(OrderExecutionType::Default)
        .with_trigger(TriggerType::Twap)
        .with_twap(10, udec64!(0.005));
    assert_round_trip!(V0, appendix => 792281717376363744483197591552);

    let twap = *V0.unpack(792281717376363744483197591552).unwrap().twap().unwrap();
    assert_eq!(twap.num_orders(), 10);
    assert_eq!(twap.slippage_frac(), udec64!(0.005));
}

#[test]
fn test_v0_max_isolated() {
    // 2^96 - 1 at x18
    let appendix = OrderAppendix::new(OrderExecutionType::PostOnly)
        .with_reduce_only(true)
        .with_isolated(udec128!(79228162514.264337593543950335));
    assert_round_trip!(V0, appendix => 340282366920938463463374607427473248000);
}

#[test]
fn test_v0_max_twap() {
    let appendix = OrderAppendix::new(OrderExecutionType::PostOnly)
        .with_trigger(TriggerType::TwapCustomAmounts)
        .with_reduce_only(true)
        .with_twap(u32::MAX, udec64!(0.000001));
    assert_round_trip!(V0, appendix => 340282366841710300967557013911933828608);
}

// ============================================================================
// V1: 64-bit value region, x6 margin
// ============================================================================

#[test]
fn test_v1_plain_appendix() {
    assert_round_trip!(V1, price_order() => 4097);
}

#[test]
fn test_v1_reduce_only() {
    assert_round_trip!(V1, price_order().with_reduce_only(true) => 6145);
}

#[test]
fn test_v1_isolated_margin() {
    assert_round_trip!(
        V1,
        price_order().with_isolated(udec128!(12345.678901)) => 227737579102942800187821658369
    );
}

#[test]
fn test_v1_twap() {
    let appendix = OrderAppendix::new(OrderExecutionType::Default)
        .with_trigger(TriggerType::Twap)
        .with_twap(10, udec64!(0.005));
    assert_round_trip!(V1, appendix => 792281717376363744483197591553);
}

#[test]
fn test_v1_max_isolated_is_floored_to_x6() {
    let appendix = OrderAppendix::new(OrderExecutionType::PostOnly)
        .with_reduce_only(true)
        .with_isolated(udec128!(18.446744073709551615));
    let packed = V1.pack(&appendix).unwrap();
    assert_eq!(packed, 340282365561237229015142145);

    let unpacked = V1.unpack(packed).unwrap();
    assert_eq!(unpacked.order_execution_type(), OrderExecutionType::PostOnly);
    assert_eq!(unpacked.trigger_type(), None);
    assert!(unpacked.reduce_only());
    assert_eq!(unpacked.isolated().unwrap().margin(), udec128!(18.446744));
    assert!(unpacked.twap().is_none());
}

#[test]
fn test_v1_max_twap() {
    let appendix = OrderAppendix::new(OrderExecutionType::PostOnly)
        .with_trigger(TriggerType::TwapCustomAmounts)
        .with_reduce_only(true)
        .with_twap(u32::MAX, udec64!(0.000001));
    assert_round_trip!(V1, appendix => 340282366841710300967557013911933828609);
}

// ============================================================================
// Both layouts
// ============================================================================

#[test]
fn test_all_execution_types() {
    for codec in [V0, V1] {
        for t in OrderExecutionType::ALL {
            assert_round_trip!(codec, OrderAppendix::new(t).with_trigger(TriggerType::Price));
            assert_round_trip!(codec, OrderAppendix::new(t).with_reduce_only(true));
        }
    }
}

#[test]
fn test_all_trigger_types() {
    for codec in [V0, V1] {
        let unpacked = codec
            .unpack(codec.pack(&OrderAppendix::new(OrderExecutionType::Ioc)).unwrap())
            .unwrap();
        assert_eq!(unpacked.trigger_type(), None);

        for t in TriggerType::ALL {
            let appendix = OrderAppendix::new(OrderExecutionType::Default).with_trigger(t);
            let unpacked = codec.unpack(codec.pack(&appendix).unwrap()).unwrap();
            assert_eq!(unpacked.trigger_type(), Some(t));
        }
    }
}

#[test]
fn test_twap_trigger_without_parameters_decodes_zeroes() {
    let appendix = OrderAppendix::new(OrderExecutionType::Default).with_trigger(TriggerType::Twap);
    let unpacked = V1.unpack(V1.pack(&appendix).unwrap()).unwrap();
    let twap = unpacked.twap().unwrap();
    assert_eq!(twap.num_orders(), 0);
    assert_eq!(twap.slippage_frac(), udec64!(0));
}

#[test]
fn test_bit_positions() {
    let appendix = OrderAppendix::new(OrderExecutionType::Fok)
        .with_trigger(TriggerType::TwapCustomAmounts)
        .with_reduce_only(true)
        .with_twap(1, udec64!(0.000002));
    let bits = V0.to_bits(&appendix).unwrap();
    assert_eq!(bits.trigger, 3);
    assert!(bits.reduce_only);
    assert_eq!(bits.order_type, 2);
    assert!(!bits.isolated);
    assert_eq!(bits.version, 0);

    let packed = V0.join(&bits);
    assert_eq!(V0.split(packed).unwrap(), bits);
    // order type sits at bits 10..9
    assert_eq!((packed >> 9) & U256::from(0b11), U256::from(2));
    // TWAP sits at bits 127..64 in V0
    assert_eq!(packed >> 96, U256::from(1));
    assert_eq!((packed >> 64) & U256::from(u32::MAX), U256::from(2));
}

#[test]
fn test_join_truncates_oversized_fields() {
    let bits = PackedOrderAppendixBits {
        trigger: 0b101,
        order_type: 0b110,
        version: 1,
        ..Default::default()
    };
    let split = V1.split(V1.join(&bits)).unwrap();
    assert_eq!(split.trigger, 0b01);
    assert_eq!(split.order_type, 0b10);
}

#[test]
fn test_unpack_str() {
    let unpacked = V1.unpack_str("792281717376363744483197591553").unwrap();
    assert_eq!(unpacked.trigger_type(), Some(TriggerType::Twap));
    assert_eq!(unpacked.twap().unwrap().num_orders(), 10);

    assert_eq!(
        V1.unpack_str("0x1001"),
        Err(AppendixError::InvalidInteger("0x1001".to_string()))
    );
    assert_eq!(
        V1.unpack_str("340282366920938463463374607431768211456"),
        Err(AppendixError::Overflow { bits: 128 })
    );
}

// ============================================================================
// Strictness
// ============================================================================

#[test]
fn test_version_mismatch() {
    assert_eq!(
        V0.unpack(4097),
        Err(AppendixError::VersionMismatch {
            expected: 0,
            found: 1
        })
    );
    assert_eq!(
        V1.unpack(4096),
        Err(AppendixError::VersionMismatch {
            expected: 1,
            found: 0
        })
    );
}

#[test]
fn test_reserved_bits_set() {
    assert_eq!(V0.unpack(1 << 14), Err(AppendixError::ReservedBitsSet(1)));
    assert_eq!(
        V1.unpack((1 << 63) | 1),
        Err(AppendixError::ReservedBitsSet(1 << 49))
    );
}

#[test]
fn test_conflicting_payload() {
    let appendix = OrderAppendix::new(OrderExecutionType::Default)
        .with_trigger(TriggerType::Twap)
        .with_twap(2, udec64!(0.01))
        .with_isolated(udec128!(100));
    assert_eq!(V0.pack(&appendix), Err(AppendixError::ConflictingPayload));
}

#[test]
fn test_twap_requires_twap_trigger() {
    let appendix = price_order().with_twap(2, udec64!(0.01));
    assert_eq!(V1.pack(&appendix), Err(AppendixError::TwapTriggerRequired));

    let appendix = OrderAppendix::new(OrderExecutionType::Default).with_twap(2, udec64!(0.01));
    assert_eq!(V1.pack(&appendix), Err(AppendixError::TwapTriggerRequired));
}

#[test]
fn test_isolated_rejects_twap_trigger() {
    let appendix = OrderAppendix::new(OrderExecutionType::Default)
        .with_trigger(TriggerType::TwapCustomAmounts)
        .with_isolated(udec128!(1));
    assert_eq!(V1.pack(&appendix), Err(AppendixError::IsolatedTwap));
}

#[test]
fn test_isolated_flag_wins_over_twap_trigger() {
    // Isolated flag with a TWAP trigger never comes out of pack, but if the
    // venue sends one the value region is read as margin.
    let bits = PackedOrderAppendixBits {
        value: U256::from(5_000_000u64),
        trigger: TriggerType::Twap.code(),
        isolated: true,
        version: 1,
        ..Default::default()
    };
    let unpacked = V1.unpack(V1.join(&bits).saturating_to()).unwrap();
    assert_eq!(unpacked.isolated().unwrap().margin(), udec128!(5));
    assert!(unpacked.twap().is_none());
}

#[test]
fn test_margin_out_of_range() {
    let appendix = price_order().with_isolated(udec128!(18446744073709.551616));
    assert_eq!(
        V1.pack(&appendix),
        Err(AppendixError::ValueOutOfRange {
            field: "margin",
            bits: 64
        })
    );

    // 2^96 x18 units overflow V0 but fit V1 once floored to x6.
    let appendix = price_order().with_isolated(udec128!(79228162514.264337593543950336));
    assert_eq!(
        V0.pack(&appendix),
        Err(AppendixError::ValueOutOfRange {
            field: "margin",
            bits: 96
        })
    );
    let unpacked = V1.unpack(V1.pack(&appendix).unwrap()).unwrap();
    assert_eq!(
        unpacked.isolated().unwrap().margin(),
        udec128!(79228162514.264337)
    );
}
