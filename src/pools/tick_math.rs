//! Q64.96 sqrt price at a tick, bit-exact with the on-chain TickMath library.

use crate::errors::PoolError;
use alloy_primitives::{U256, uint};

pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = -MIN_TICK;

pub const MIN_SQRT_RATIO: U256 = uint!(4295128739_U256);
pub const MAX_SQRT_RATIO: U256 = uint!(1461446703485210103287273052203988822378723970342_U256);

// sqrt(1.0001)^-(2^i) in Q128.128 for i = 1..=19; bit 0 is handled separately
const RATIO_MULTIPLIERS: [(u32, u128); 19] = [
    (0x2, 0xfff97272373d413259a46990580e213a),
    (0x4, 0xfff2e50f5f656932ef12357cf3c7fdcc),
    (0x8, 0xffe5caca7e10e4e61c3624eaa0941cd0),
    (0x10, 0xffcb9843d60f6159c9db58835c926644),
    (0x20, 0xff973b41fa98c081472e6896dfb254c0),
    (0x40, 0xff2ea16466c96a3843ec78b326b52861),
    (0x80, 0xfe5dee046a99a2a811c461f1969c3053),
    (0x100, 0xfcbe86c7900a88aedcffc83b479aa3a4),
    (0x200, 0xf987a7253ac413176f2b074cf7815e54),
    (0x400, 0xf3392b0822b70005940c7a398e4b70f3),
    (0x800, 0xe7159475a2c29b7443b29c7fa6e889d9),
    (0x1000, 0xd097f3bdfd2022b8845ad8f792aa5825),
    (0x2000, 0xa9f746462d870fdf8a65dc1f90e061e5),
    (0x4000, 0x70d869a156d2a1b890bb3df62baf32f7),
    (0x8000, 0x31be135f97d08fd981231505542fcfa6),
    (0x10000, 0x9aa508b5b7a84e1c677de54f3e99bc9),
    (0x20000, 0x5d6af8dedb81196699c329225ee604),
    (0x40000, 0x2216e584f5fa1ea926041bedfe98),
    (0x80000, 0x48a170391f7dc42444e8fa2),
];

const TICK_ONE_RATIO: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

fn mul_shift(val: U256, mul_by: u128) -> U256 {
    (val * U256::from(mul_by)) >> 128
}

/// Returns the sqrt ratio as a Q64.96 for the given tick, i.e. sqrt(1.0001)^tick * 2^96.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, PoolError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(PoolError::TickOutOfRange(tick));
    }
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 { U256::from(TICK_ONE_RATIO) } else { U256::from(1) << 128 };
    for (bit, multiplier) in RATIO_MULTIPLIERS {
        if abs_tick & bit != 0 {
            ratio = mul_shift(ratio, multiplier);
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // back to Q96, rounding up
    let q32: U256 = U256::from(1) << 32;
    let round_up = if (ratio % q32).is_zero() { U256::ZERO } else { U256::from(1) };
    Ok((ratio >> 32) + round_up)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
    }

    #[test]
    fn test_tick_zero() {
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), U256::from(1) << 96);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK - 1), Err(PoolError::TickOutOfRange(MIN_TICK - 1)));
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK + 1), Err(PoolError::TickOutOfRange(MAX_TICK + 1)));
    }

    #[test]
    fn test_monotonic() {
        let mut previous = get_sqrt_ratio_at_tick(-1000).unwrap();
        for tick in -999..1000 {
            let current = get_sqrt_ratio_at_tick(tick).unwrap();
            assert!(current > previous, "tick {tick}");
            previous = current;
        }
    }

    #[test]
    fn test_negative_tick_price_below_one() {
        let q96 = U256::from(1) << 96;
        assert!(get_sqrt_ratio_at_tick(-69633).unwrap() < q96);
        assert!(get_sqrt_ratio_at_tick(69633).unwrap() > q96);
    }
}
