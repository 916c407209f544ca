// Value layer: tokens, currencies and amounts
pub mod constants;
pub mod currency;
pub mod currency_amount;
pub mod errors;
pub mod token;

// Pool and route layer
pub mod pools;
pub mod route;

// Quote parsing
pub mod parser;
pub mod quote;
pub mod trade;

// Config
pub mod config;
pub mod utils;

pub use config::{ChainConfig, RoutingConfigSection};
pub use constants::{SwapRouterNativeAsset, currency_address_for_swap_quote, is_swap_router_native_asset};
pub use currency::{Currency, NativeCurrency, NativeCurrencyRegistry};
pub use currency_amount::{CurrencyAmount, Percent, Rounding};
pub use errors::{AmountError, PoolError, RouteError, RouteParseError, TokenError};
pub use parser::{ParsedRoute, RouteParser, RouteProtocol, TradeRoute, compute_routes};
pub use pools::{Pair, Pool, PoolClass, PoolWrapper, V3Pool};
pub use quote::{Hop, Quote, RouteCandidate};
pub use route::{MixedRoute, Route, V2Route, V3Route};
pub use token::{Token, TokenWrapper};
pub use trade::{ClassicRoutes, ClassicTradeDetails, RouteWithAmounts, SwapFeeInfo, classic_trade_details};
pub use utils::{LoadConfigError, OptionalRoutingConfigLoader, RoutingConfigLoader, RoutingConfigLoaderSync};
