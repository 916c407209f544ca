use crate::token::{Token, TokenWrapper};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, Deserialize, Serialize, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolClass {
    UniswapV2,
    UniswapV3,
}

/// A liquidity pool between two tokens that a route can hop through.
pub trait Pool: Sync + Send {
    fn get_class(&self) -> PoolClass;

    /// Pool contract address as reported by the quote, if any.
    fn get_address(&self) -> Option<Address>;

    /// Fee in hundredths of a bip.
    fn get_fee(&self) -> u32;

    /// The lower-sorted token.
    fn token0(&self) -> &TokenWrapper;

    /// The higher-sorted token.
    fn token1(&self) -> &TokenWrapper;

    fn get_chain_id(&self) -> u64 {
        self.token0().get_chain_id()
    }

    fn get_tokens(&self) -> Vec<Address> {
        vec![self.token0().get_address(), self.token1().get_address()]
    }

    fn involves_token(&self, token: &Token) -> bool {
        self.token0().as_ref() == token || self.token1().as_ref() == token
    }

    /// The token on the other side of the pool, or `None` if `token` is not in the pool.
    fn other_token(&self, token: &Token) -> Option<&TokenWrapper> {
        if self.token0().as_ref() == token {
            Some(self.token1())
        } else if self.token1().as_ref() == token {
            Some(self.token0())
        } else {
            None
        }
    }
}

/// Type-erased pool used by routes that mix pool classes.
pub struct PoolWrapper {
    pub pool: Arc<dyn Pool>,
}

impl Display for PoolWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.get_address() {
            Some(address) => write!(f, "{}(fee={})@{}", self.get_class(), self.get_fee(), address),
            None => write!(f, "{}(fee={})@{}/{}", self.get_class(), self.get_fee(), self.token0(), self.token1()),
        }
    }
}

impl Debug for PoolWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl PoolWrapper {
    pub fn new(pool: Arc<dyn Pool>) -> Self {
        PoolWrapper { pool }
    }
}

impl Clone for PoolWrapper {
    fn clone(&self) -> Self {
        Self { pool: self.pool.clone() }
    }
}

impl Deref for PoolWrapper {
    type Target = dyn Pool;

    fn deref(&self) -> &Self::Target {
        self.pool.deref()
    }
}

impl Pool for PoolWrapper {
    fn get_class(&self) -> PoolClass {
        self.pool.get_class()
    }

    fn get_address(&self) -> Option<Address> {
        self.pool.get_address()
    }

    fn get_fee(&self) -> u32 {
        self.pool.get_fee()
    }

    fn token0(&self) -> &TokenWrapper {
        self.pool.token0()
    }

    fn token1(&self) -> &TokenWrapper {
        self.pool.token1()
    }
}
