//! Turns the hop lists of a classic quote into typed routes with their trade amounts.

mod hop;


pub use hop::{parse_pair, parse_pool_or_pair, parse_token, parse_v3_pool};

use crate::currency::{Currency, NativeCurrencyRegistry};
use crate::currency_amount::CurrencyAmount;
use crate::errors::RouteParseError;
use crate::pools::PoolWrapper;
use crate::quote::{Hop, Quote, RouteCandidate};
use crate::route::{MixedRoute, V2Route, V3Route};
use crate::token::TokenWrapper;
use std::sync::LazyLock;
use strum_macros::Display;
use tracing::{debug, warn};

static DEFAULT_PARSER: LazyLock<RouteParser> = LazyLock::new(RouteParser::default);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum RouteProtocol {
    V2,
    V3,
    Mixed,
}

/// Classify a candidate by the pool kinds it traverses. Unknown hops make it mixed.
pub fn classify(candidate: &[Hop]) -> RouteProtocol {
    let mut only_v2 = true;
    let mut only_v3 = true;
    for hop in candidate {
        match hop {
            Hop::V2(_) => only_v3 = false,
            Hop::V3(_) => only_v2 = false,
            Hop::Unknown => {
                only_v2 = false;
                only_v3 = false;
            }
        }
    }
    match (only_v2, only_v3) {
        (true, _) => RouteProtocol::V2,
        (false, true) => RouteProtocol::V3,
        (false, false) => RouteProtocol::Mixed,
    }
}

#[derive(Clone, Debug)]
pub enum TradeRoute {
    V2(V2Route),
    V3(V3Route),
    Mixed(MixedRoute),
}

impl TradeRoute {
    pub fn protocol(&self) -> RouteProtocol {
        match self {
            TradeRoute::V2(_) => RouteProtocol::V2,
            TradeRoute::V3(_) => RouteProtocol::V3,
            TradeRoute::Mixed(_) => RouteProtocol::Mixed,
        }
    }

    pub fn token_path(&self) -> &[TokenWrapper] {
        match self {
            TradeRoute::V2(route) => route.token_path(),
            TradeRoute::V3(route) => route.token_path(),
            TradeRoute::Mixed(route) => route.token_path(),
        }
    }

    pub fn input(&self) -> &Currency {
        match self {
            TradeRoute::V2(route) => route.input(),
            TradeRoute::V3(route) => route.input(),
            TradeRoute::Mixed(route) => route.input(),
        }
    }

    pub fn output(&self) -> &Currency {
        match self {
            TradeRoute::V2(route) => route.output(),
            TradeRoute::V3(route) => route.output(),
            TradeRoute::Mixed(route) => route.output(),
        }
    }

    /// Pool count
    pub fn len(&self) -> usize {
        match self {
            TradeRoute::V2(route) => route.len(),
            TradeRoute::V3(route) => route.len(),
            TradeRoute::Mixed(route) => route.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One route of a quote together with the amounts it trades.
///
/// Exactly one of [`ParsedRoute::routev2`], [`ParsedRoute::routev3`] and
/// [`ParsedRoute::mixed_route`] returns `Some`.
#[derive(Clone, Debug)]
pub struct ParsedRoute {
    pub route: TradeRoute,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
}

impl ParsedRoute {
    pub fn routev2(&self) -> Option<&V2Route> {
        match &self.route {
            TradeRoute::V2(route) => Some(route),
            _ => None,
        }
    }

    pub fn routev3(&self) -> Option<&V3Route> {
        match &self.route {
            TradeRoute::V3(route) => Some(route),
            _ => None,
        }
    }

    pub fn mixed_route(&self) -> Option<&MixedRoute> {
        match &self.route {
            TradeRoute::Mixed(route) => Some(route),
            _ => None,
        }
    }

    pub fn protocol(&self) -> RouteProtocol {
        self.route.protocol()
    }
}

/// Parses quotes against a set of known native currencies.
#[derive(Clone, Debug, Default)]
pub struct RouteParser {
    registry: NativeCurrencyRegistry,
}

impl RouteParser {
    pub fn new(registry: NativeCurrencyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &NativeCurrencyRegistry {
        &self.registry
    }

    /// Parse every route of `quote`, or `None` when the quote is absent, has no routes or any
    /// route is malformed.
    pub fn compute_routes(&self, input_is_native: bool, output_is_native: bool, quote: Option<&Quote>) -> Option<Vec<ParsedRoute>> {
        let quote = quote?;
        match self.try_compute_routes(input_is_native, output_is_native, &quote.routes) {
            Ok(routes) => Some(routes),
            Err(RouteParseError::NoRoutes) => {
                debug!("Quote has no routes");
                None
            }
            Err(e) => {
                warn!("Failed to parse quote routes: {}", e);
                None
            }
        }
    }

    /// Like [`RouteParser::compute_routes`] but reports why parsing failed.
    ///
    /// The trade currencies come from the first candidate only and are shared by all routes.
    pub fn try_compute_routes(
        &self,
        input_is_native: bool,
        output_is_native: bool,
        routes: &[RouteCandidate],
    ) -> Result<Vec<ParsedRoute>, RouteParseError> {
        let first = routes.first().ok_or(RouteParseError::NoRoutes)?;
        let (currency_in, currency_out) = self.trade_currencies(input_is_native, output_is_native, first)?;

        let parsed = routes
            .iter()
            .map(|candidate| parse_candidate(candidate, &currency_in, &currency_out))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} routes {} -> {}", parsed.len(), currency_in, currency_out);
        Ok(parsed)
    }

    /// The input and output currencies of a trade, taken from the ends of `candidate`.
    pub fn trade_currencies(
        &self,
        input_is_native: bool,
        output_is_native: bool,
        candidate: &[Hop],
    ) -> Result<(Currency, Currency), RouteParseError> {
        let (first, last) = match (candidate.first(), candidate.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(RouteParseError::EmptyRoute),
        };
        let (token_in, token_out) = match (first.token_in(), last.token_out()) {
            (Some(token_in), Some(token_out)) => (token_in, token_out),
            _ => return Err(RouteParseError::MissingTokens),
        };

        let currency_in = if input_is_native {
            self.registry.native_on_chain(token_in.chain_id)?.into()
        } else {
            parse_token(token_in)?.into()
        };
        let currency_out = if output_is_native {
            self.registry.native_on_chain(token_out.chain_id)?.into()
        } else {
            parse_token(token_out)?.into()
        };
        Ok((currency_in, currency_out))
    }
}

fn parse_candidate(candidate: &[Hop], currency_in: &Currency, currency_out: &Currency) -> Result<ParsedRoute, RouteParseError> {
    let (first, last) = match (candidate.first(), candidate.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(RouteParseError::EmptyRoute),
    };
    let (raw_in, raw_out) = match (first.amount_in(), last.amount_out()) {
        (Some(raw_in), Some(raw_out)) if !raw_in.is_empty() && !raw_out.is_empty() => (raw_in, raw_out),
        _ => return Err(RouteParseError::MissingAmounts),
    };

    let route = match classify(candidate) {
        RouteProtocol::V2 => {
            let pairs = candidate
                .iter()
                .map(|hop| match hop {
                    Hop::V2(pool) => parse_pair(pool),
                    _ => Err(RouteParseError::UnsupportedHop),
                })
                .collect::<Result<Vec<_>, _>>()?;
            TradeRoute::V2(V2Route::new(pairs, currency_in.clone(), currency_out.clone())?)
        }
        RouteProtocol::V3 => {
            let pools = candidate
                .iter()
                .map(|hop| match hop {
                    Hop::V3(pool) => parse_v3_pool(pool),
                    _ => Err(RouteParseError::UnsupportedHop),
                })
                .collect::<Result<Vec<_>, _>>()?;
            TradeRoute::V3(V3Route::new(pools, currency_in.clone(), currency_out.clone())?)
        }
        RouteProtocol::Mixed => {
            let pools = candidate.iter().map(parse_pool_or_pair).collect::<Result<Vec<PoolWrapper>, _>>()?;
            TradeRoute::Mixed(MixedRoute::new(pools, currency_in.clone(), currency_out.clone())?)
        }
    };

    Ok(ParsedRoute {
        route,
        input_amount: CurrencyAmount::from_raw_amount(currency_in.clone(), raw_in)?,
        output_amount: CurrencyAmount::from_raw_amount(currency_out.clone(), raw_out)?,
    })
}

/// Parse the routes of `quote` using the built-in native currencies.
pub fn compute_routes(input_is_native: bool, output_is_native: bool, quote: Option<&Quote>) -> Option<Vec<ParsedRoute>> {
    DEFAULT_PARSER.compute_routes(input_is_native, output_is_native, quote)
}
