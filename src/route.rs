use crate::currency::Currency;
use crate::errors::RouteError;
use crate::pools::{Pair, Pool, PoolWrapper, V3Pool};
use crate::token::TokenWrapper;
use std::fmt::{Display, Formatter};

pub type V2Route = Route<Pair>;
pub type V3Route = Route<V3Pool>;
pub type MixedRoute = Route<PoolWrapper>;

/// An ordered list of pools from `input` to `output`.
///
/// `input` and `output` may be native currencies; `token_path` always holds the wrapped
/// tokens actually traded through the pools, so it has one more element than `pools`.
#[derive(Clone, Debug)]
pub struct Route<P: Pool> {
    pools: Vec<P>,
    token_path: Vec<TokenWrapper>,
    input: Currency,
    output: Currency,
}

impl<P: Pool> Route<P> {
    pub fn new(pools: Vec<P>, input: Currency, output: Currency) -> Result<Self, RouteError> {
        let first = pools.first().ok_or(RouteError::NoPools)?;
        let chain_id = first.get_chain_id();
        if pools.iter().any(|pool| pool.get_chain_id() != chain_id) {
            return Err(RouteError::ChainIds);
        }

        let wrapped_input = input.wrapped();
        if !first.involves_token(wrapped_input) {
            return Err(RouteError::Input(wrapped_input.get_address()));
        }
        let wrapped_output = output.wrapped();
        // non-empty, checked above
        if !pools[pools.len() - 1].involves_token(wrapped_output) {
            return Err(RouteError::Output(wrapped_output.get_address()));
        }

        // take the pool's own token so the path carries the hop's metadata
        let mut current = if first.token0().as_ref() == wrapped_input { first.token0().clone() } else { first.token1().clone() };
        let mut token_path = Vec::with_capacity(pools.len() + 1);
        token_path.push(current.clone());
        for (hop, pool) in pools.iter().enumerate() {
            let next = pool.other_token(&current).ok_or(RouteError::Path(hop))?.clone();
            token_path.push(next.clone());
            current = next;
        }

        Ok(Route { pools, token_path, input, output })
    }

    pub fn pools(&self) -> &[P] {
        &self.pools
    }

    pub fn token_path(&self) -> &[TokenWrapper] {
        &self.token_path
    }

    /// Alias of [`Route::token_path`], the name V2 routes traditionally use.
    pub fn path(&self) -> &[TokenWrapper] {
        &self.token_path
    }

    pub fn input(&self) -> &Currency {
        &self.input
    }

    pub fn output(&self) -> &Currency {
        &self.output
    }

    pub fn get_chain_id(&self) -> u64 {
        self.token_path[0].get_chain_id()
    }

    /// The hop count of the route
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl<P: Pool> Display for Route<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Route({} -> {}, path={:?}, pools={:?})",
            self.input,
            self.output,
            self.token_path.iter().map(|t| t.get_symbol()).collect::<Vec<String>>(),
            self.pools.iter().map(|p| format!("{}:{}", p.get_class(), p.get_fee())).collect::<Vec<String>>()
        )
    }
}
