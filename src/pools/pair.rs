use super::pool::{Pool, PoolClass, PoolWrapper};
use crate::errors::PoolError;
use crate::token::{Token, TokenWrapper};
use alloy_primitives::{Address, U256};
use std::sync::Arc;

/// Constant-product fee, 0.3%.
pub const V2_FEE: u32 = 3000;

/// A Uniswap V2 style constant-product pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    address: Option<Address>,
    token0: TokenWrapper,
    token1: TokenWrapper,
    reserve0: U256,
    reserve1: U256,
}

impl Pair {
    /// Create a pair from two `(token, reserve)` sides given in any order.
    pub fn new(reserve_a: (TokenWrapper, U256), reserve_b: (TokenWrapper, U256), address: Option<Address>) -> Result<Self, PoolError> {
        let (first, second) = if reserve_a.0.sorts_before(&reserve_b.0)? { (reserve_a, reserve_b) } else { (reserve_b, reserve_a) };
        Ok(Pair { address, token0: first.0, token1: second.0, reserve0: first.1, reserve1: second.1 })
    }

    pub fn reserve0(&self) -> U256 {
        self.reserve0
    }

    pub fn reserve1(&self) -> U256 {
        self.reserve1
    }

    /// Reserve held for `token`, if the pair contains it.
    pub fn reserve_of(&self, token: &Token) -> Option<U256> {
        if self.token0.as_ref() == token {
            Some(self.reserve0)
        } else if self.token1.as_ref() == token {
            Some(self.reserve1)
        } else {
            None
        }
    }
}

impl Pool for Pair {
    fn get_class(&self) -> PoolClass {
        PoolClass::UniswapV2
    }

    fn get_address(&self) -> Option<Address> {
        self.address
    }

    fn get_fee(&self) -> u32 {
        V2_FEE
    }

    fn token0(&self) -> &TokenWrapper {
        &self.token0
    }

    fn token1(&self) -> &TokenWrapper {
        &self.token1
    }
}

impl From<Pair> for PoolWrapper {
    fn from(pair: Pair) -> Self {
        PoolWrapper::new(Arc::new(pair))
    }
}
