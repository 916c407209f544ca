use super::pool::{Pool, PoolClass, PoolWrapper};
use super::tick_math::get_sqrt_ratio_at_tick;
use crate::errors::PoolError;
use crate::token::TokenWrapper;
use alloy_primitives::{Address, U256};
use std::sync::Arc;

/// Fees are in hundredths of a bip and must stay below 100%.
pub const MAX_FEE: u32 = 1_000_000;

/// A concentrated-liquidity pool snapshot at its current tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct V3Pool {
    address: Option<Address>,
    token0: TokenWrapper,
    token1: TokenWrapper,
    fee: u32,
    sqrt_ratio_x96: U256,
    liquidity: u128,
    tick_current: i32,
}

impl V3Pool {
    /// Create a pool from two tokens in any order. The sqrt price must lie within the current tick.
    pub fn new(
        token_a: TokenWrapper,
        token_b: TokenWrapper,
        fee: u32,
        sqrt_ratio_x96: U256,
        liquidity: u128,
        tick_current: i32,
        address: Option<Address>,
    ) -> Result<Self, PoolError> {
        if fee >= MAX_FEE {
            return Err(PoolError::InvalidFee(fee.to_string()));
        }

        let lower = get_sqrt_ratio_at_tick(tick_current)?;
        let upper = get_sqrt_ratio_at_tick(tick_current.checked_add(1).ok_or(PoolError::TickOutOfRange(tick_current))?)?;
        if sqrt_ratio_x96 < lower || sqrt_ratio_x96 > upper {
            return Err(PoolError::PriceBounds);
        }

        let (token0, token1) = if token_a.sorts_before(&token_b)? { (token_a, token_b) } else { (token_b, token_a) };
        Ok(V3Pool { address, token0, token1, fee, sqrt_ratio_x96, liquidity, tick_current })
    }

    pub fn sqrt_ratio_x96(&self) -> U256 {
        self.sqrt_ratio_x96
    }

    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    pub fn tick_current(&self) -> i32 {
        self.tick_current
    }
}

impl Pool for V3Pool {
    fn get_class(&self) -> PoolClass {
        PoolClass::UniswapV3
    }

    fn get_address(&self) -> Option<Address> {
        self.address
    }

    fn get_fee(&self) -> u32 {
        self.fee
    }

    fn token0(&self) -> &TokenWrapper {
        &self.token0
    }

    fn token1(&self) -> &TokenWrapper {
        &self.token1
    }
}

impl From<V3Pool> for PoolWrapper {
    fn from(pool: V3Pool) -> Self {
        PoolWrapper::new(Arc::new(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::tick_math::MAX_TICK;
    use crate::token::Token;
    use alloy_primitives::uint;

    const SQRT_RATIO: U256 = uint!(2437312313659959819381354528_U256);
    const TICK: i32 = -69633;

    fn tokens() -> (TokenWrapper, TokenWrapper) {
        (Arc::new(Token::repeat_byte(1, 2)), Arc::new(Token::repeat_byte(1, 1)))
    }

    #[test]
    fn test_new_pool() -> eyre::Result<()> {
        let (high, low) = tokens();
        let pool = V3Pool::new(high.clone(), low.clone(), 500, SQRT_RATIO, 10272714736694327408, TICK, None)?;

        assert_eq!(pool.token0(), &low);
        assert_eq!(pool.token1(), &high);
        assert_eq!(pool.get_fee(), 500);
        assert_eq!(pool.get_class(), PoolClass::UniswapV3);
        assert_eq!(pool.tick_current(), TICK);
        assert_eq!(pool.liquidity(), 10272714736694327408);
        Ok(())
    }

    #[test]
    fn test_price_bounds() {
        let (high, low) = tokens();
        let result = V3Pool::new(high, low, 500, SQRT_RATIO, 1, 0, None);
        assert_eq!(result, Err(PoolError::PriceBounds));
    }

    #[test]
    fn test_sqrt_ratio_at_tick_is_in_bounds() -> eyre::Result<()> {
        let (high, low) = tokens();
        let sqrt_ratio = get_sqrt_ratio_at_tick(100)?;
        assert!(V3Pool::new(high, low, 3000, sqrt_ratio, 0, 100, None).is_ok());
        Ok(())
    }

    #[test]
    fn test_invalid_fee_and_tick() {
        let (high, low) = tokens();
        assert_eq!(
            V3Pool::new(high.clone(), low.clone(), MAX_FEE, SQRT_RATIO, 1, TICK, None),
            Err(PoolError::InvalidFee(MAX_FEE.to_string()))
        );
        assert_eq!(
            V3Pool::new(high, low, 500, SQRT_RATIO, 1, MAX_TICK, None),
            Err(PoolError::TickOutOfRange(MAX_TICK + 1))
        );
    }
}
