//! Wire model of a classic quote returned by the routing service.

use serde::{Deserialize, Serialize};

/// Token decimals arrive either as a JSON number or as a numeric string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawDecimals {
    Number(u64),
    Text(String),
}

impl From<u8> for RawDecimals {
    fn from(decimals: u8) -> Self {
        RawDecimals::Number(decimals as u64)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInRoute {
    pub address: String,
    pub chain_id: u64,
    pub decimals: RawDecimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_fee_bps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_fee_bps: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct V2Reserve {
    pub token: TokenInRoute,
    pub quotient: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct V2PoolInRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub token_in: Option<TokenInRoute>,
    #[serde(default)]
    pub token_out: Option<TokenInRoute>,
    pub reserve0: V2Reserve,
    pub reserve1: V2Reserve,
    #[serde(default)]
    pub amount_in: Option<String>,
    #[serde(default)]
    pub amount_out: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct V3PoolInRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub token_in: Option<TokenInRoute>,
    #[serde(default)]
    pub token_out: Option<TokenInRoute>,
    pub fee: String,
    pub sqrt_ratio_x96: String,
    pub liquidity: String,
    pub tick_current: String,
    #[serde(default)]
    pub amount_in: Option<String>,
    #[serde(default)]
    pub amount_out: Option<String>,
}

/// One pool traversal of a route candidate, discriminated by the `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Hop {
    #[serde(rename = "v2-pool")]
    V2(V2PoolInRoute),
    #[serde(rename = "v3-pool")]
    V3(V3PoolInRoute),
    #[serde(other)]
    Unknown,
}

impl Hop {
    pub fn token_in(&self) -> Option<&TokenInRoute> {
        match self {
            Hop::V2(pool) => pool.token_in.as_ref(),
            Hop::V3(pool) => pool.token_in.as_ref(),
            Hop::Unknown => None,
        }
    }

    pub fn token_out(&self) -> Option<&TokenInRoute> {
        match self {
            Hop::V2(pool) => pool.token_out.as_ref(),
            Hop::V3(pool) => pool.token_out.as_ref(),
            Hop::Unknown => None,
        }
    }

    pub fn amount_in(&self) -> Option<&str> {
        match self {
            Hop::V2(pool) => pool.amount_in.as_deref(),
            Hop::V3(pool) => pool.amount_in.as_deref(),
            Hop::Unknown => None,
        }
    }

    pub fn amount_out(&self) -> Option<&str> {
        match self {
            Hop::V2(pool) => pool.amount_out.as_deref(),
            Hop::V3(pool) => pool.amount_out.as_deref(),
            Hop::Unknown => None,
        }
    }
}

/// An ordered list of hops from the trade input to the trade output.
pub type RouteCandidate = Vec<Hop>;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_decimals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price_wei: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_use_estimate: Option<String>,
    #[serde(default, rename = "gasUseEstimateUSD", skip_serializing_if = "Option::is_none")]
    pub gas_use_estimate_usd: Option<String>,
    #[serde(default, rename = "route", alias = "routes")]
    pub routes: Vec<RouteCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_bips: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion_amount: Option<String>,
}

impl Quote {
    pub fn new(routes: Vec<RouteCandidate>) -> Self {
        Self { routes, ..Quote::default() }
    }
}
