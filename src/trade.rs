//! Classic trade details derived from a quote.

use crate::currency_amount::{CurrencyAmount, Percent};
use crate::parser::{ParsedRoute, RouteParser, TradeRoute};
use crate::quote::Quote;
use crate::route::{MixedRoute, V2Route, V3Route};
use alloy_primitives::{Address, U256};
use std::str::FromStr;
use tracing::warn;

/// The interface fee taken from the output of a trade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapFeeInfo {
    pub recipient: Address,
    pub percent: Percent,
    pub amount: U256,
}

#[derive(Clone, Debug, Default)]
pub struct ClassicTradeDetails {
    pub gas_use_estimate: Option<f64>,
    pub gas_use_estimate_usd: Option<f64>,
    pub block_number: Option<String>,
    pub routes: Option<Vec<ParsedRoute>>,
    pub swap_fee: Option<SwapFeeInfo>,
}

impl ClassicTradeDetails {
    pub fn usd_cost_per_gas(&self) -> Option<f64> {
        usd_cost_per_gas(self.gas_use_estimate_usd, self.gas_use_estimate)
    }

    pub fn split_routes(&self) -> ClassicRoutes {
        self.routes.as_deref().map(split_routes).unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct RouteWithAmounts<R> {
    pub route: R,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
}

/// Parsed routes grouped by protocol, each group in quote order.
#[derive(Clone, Debug, Default)]
pub struct ClassicRoutes {
    pub v2_routes: Vec<RouteWithAmounts<V2Route>>,
    pub v3_routes: Vec<RouteWithAmounts<V3Route>>,
    pub mixed_routes: Vec<RouteWithAmounts<MixedRoute>>,
}

impl ClassicRoutes {
    pub fn len(&self) -> usize {
        self.v2_routes.len() + self.v3_routes.len() + self.mixed_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn split_routes(routes: &[ParsedRoute]) -> ClassicRoutes {
    let mut split = ClassicRoutes::default();
    for parsed in routes {
        let input_amount = parsed.input_amount.clone();
        let output_amount = parsed.output_amount.clone();
        match &parsed.route {
            TradeRoute::V2(route) => split.v2_routes.push(RouteWithAmounts { route: route.clone(), input_amount, output_amount }),
            TradeRoute::V3(route) => split.v3_routes.push(RouteWithAmounts { route: route.clone(), input_amount, output_amount }),
            TradeRoute::Mixed(route) => split.mixed_routes.push(RouteWithAmounts { route: route.clone(), input_amount, output_amount }),
        }
    }
    split
}

/// Swap fee of a quote. Needs non-zero bips, a recipient and an amount.
pub fn swap_fee(quote: &Quote) -> Option<SwapFeeInfo> {
    let bips = quote.portion_bips.filter(|bips| *bips != 0)?;
    let recipient = quote.portion_recipient.as_deref().filter(|recipient| !recipient.is_empty())?;
    let amount = quote.portion_amount.as_deref().filter(|amount| !amount.is_empty())?;

    let recipient = match Address::from_str(recipient) {
        Ok(recipient) => recipient,
        Err(e) => {
            warn!("Invalid portion recipient {}: {}", recipient, e);
            return None;
        }
    };
    let amount = match U256::from_str(amount) {
        Ok(amount) => amount,
        Err(e) => {
            warn!("Invalid portion amount {}: {}", amount, e);
            return None;
        }
    };

    Some(SwapFeeInfo { recipient, percent: Percent::from_bips(bips), amount })
}

/// USD paid per unit of gas, `None` when either estimate is missing or zero.
pub fn usd_cost_per_gas(gas_use_estimate_usd: Option<f64>, gas_use_estimate: Option<f64>) -> Option<f64> {
    match (gas_use_estimate_usd, gas_use_estimate) {
        (Some(usd), Some(gas)) if usd != 0.0 && gas != 0.0 => Some(usd / gas),
        _ => None,
    }
}

fn parse_estimate(raw: Option<&str>) -> Option<f64> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("Invalid gas estimate {}", raw);
            None
        }
    }
}

pub fn classic_trade_details(parser: &RouteParser, input_is_native: bool, output_is_native: bool, quote: &Quote) -> ClassicTradeDetails {
    ClassicTradeDetails {
        gas_use_estimate: parse_estimate(quote.gas_use_estimate.as_deref()),
        gas_use_estimate_usd: parse_estimate(quote.gas_use_estimate_usd.as_deref()),
        block_number: quote.block_number.clone(),
        routes: parser.compute_routes(input_is_native, output_is_native, Some(quote)),
        swap_fee: swap_fee(quote),
    }
}
