use alloy_primitives::Address;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount `{0}`")]
    Invalid(String),
    #[error("{places} decimal places exceed currency decimals {decimals}")]
    DecimalsExceeded { places: u8, decimals: u8 },
    #[error("significant digits must be greater than zero")]
    ZeroSignificantDigits,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token address `{0}`")]
    InvalidAddress(String),
    #[error("invalid token decimals `{0}`")]
    InvalidDecimals(String),
    #[error("invalid fee bps `{0}`")]
    InvalidFeeBps(String),
    #[error("tokens are on different chains ({0} != {1})")]
    ChainMismatch(u64, u64),
    #[error("token {0} compared with itself")]
    SameAddress(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("invalid fee `{0}`")]
    InvalidFee(String),
    #[error("invalid tick `{0}`")]
    InvalidTick(String),
    #[error("tick {0} out of range")]
    TickOutOfRange(i32),
    #[error("invalid sqrt ratio `{0}`")]
    InvalidSqrtRatio(String),
    #[error("invalid liquidity `{0}`")]
    InvalidLiquidity(String),
    #[error("sqrt ratio outside of current tick bounds")]
    PriceBounds,
    #[error(transparent)]
    Amount(#[from] AmountError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route has no pools")]
    NoPools,
    #[error("pools are not on the same chain")]
    ChainIds,
    #[error("first pool does not involve input token {0}")]
    Input(Address),
    #[error("last pool does not involve output token {0}")]
    Output(Address),
    #[error("pool at hop {0} does not continue the token path")]
    Path(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteParseError {
    #[error("quote has no routes")]
    NoRoutes,
    #[error("expected route to have at least one pair or pool")]
    EmptyRoute,
    #[error("expected tokenIn on first hop and tokenOut on last hop")]
    MissingTokens,
    #[error("expected both amountIn and amountOut to be present")]
    MissingAmounts,
    #[error("unsupported hop type in route")]
    UnsupportedHop,
    #[error("no native currency known for chain {0}")]
    UnsupportedChain(u64),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Amount(#[from] AmountError),
}
