use crate::currency_amount::parse_raw_amount;
use crate::errors::{PoolError, RouteParseError, TokenError};
use crate::pools::{Pair, PoolWrapper, V3Pool};
use crate::quote::{Hop, RawDecimals, TokenInRoute, V2PoolInRoute, V3PoolInRoute};
use crate::token::Token;
use alloy_primitives::{Address, U256};
use std::str::FromStr;
use std::sync::Arc;

const MAX_DECIMALS: u64 = 255;

/// Build a [`Token`] from its wire descriptor. Fees stay `None` when absent or empty.
pub fn parse_token(token: &TokenInRoute) -> Result<Token, TokenError> {
    let address = Address::from_str(token.address.trim()).map_err(|_| TokenError::InvalidAddress(token.address.clone()))?;
    let decimals = parse_decimals(&token.decimals)?;
    let buy_fee_bps = parse_fee_bps(token.buy_fee_bps.as_deref())?;
    let sell_fee_bps = parse_fee_bps(token.sell_fee_bps.as_deref())?;

    Ok(Token::new_with_data(token.chain_id, address, decimals, token.symbol.clone(), token.name.clone()).with_fees(buy_fee_bps, sell_fee_bps))
}

fn parse_decimals(decimals: &RawDecimals) -> Result<u8, TokenError> {
    let value = match decimals {
        RawDecimals::Number(n) => *n,
        RawDecimals::Text(s) => s.trim().parse::<u64>().map_err(|_| TokenError::InvalidDecimals(s.clone()))?,
    };
    if value >= MAX_DECIMALS {
        return Err(TokenError::InvalidDecimals(value.to_string()));
    }
    // < 255, fits
    Ok(value as u8)
}

fn parse_fee_bps(fee: Option<&str>) -> Result<Option<U256>, TokenError> {
    match fee {
        None => Ok(None),
        Some(fee) if fee.trim().is_empty() => Ok(None),
        Some(fee) => parse_raw_amount(fee).map(Some).map_err(|_| TokenError::InvalidFeeBps(fee.to_string())),
    }
}

fn parse_pool_address(address: Option<&str>) -> Option<Address> {
    address.and_then(|address| Address::from_str(address).ok())
}

pub fn parse_pair(pool: &V2PoolInRoute) -> Result<Pair, RouteParseError> {
    let token0 = Arc::new(parse_token(&pool.reserve0.token)?);
    let token1 = Arc::new(parse_token(&pool.reserve1.token)?);
    let reserve0 = parse_raw_amount(&pool.reserve0.quotient).map_err(PoolError::from)?;
    let reserve1 = parse_raw_amount(&pool.reserve1.quotient).map_err(PoolError::from)?;

    Ok(Pair::new((token0, reserve0), (token1, reserve1), parse_pool_address(pool.address.as_deref()))?)
}

pub fn parse_v3_pool(pool: &V3PoolInRoute) -> Result<V3Pool, RouteParseError> {
    let (token_in, token_out) = match (&pool.token_in, &pool.token_out) {
        (Some(token_in), Some(token_out)) => (token_in, token_out),
        _ => return Err(RouteParseError::MissingTokens),
    };
    let fee = pool.fee.trim().parse::<u32>().map_err(|_| PoolError::InvalidFee(pool.fee.clone()))?;
    let sqrt_ratio_x96 = parse_raw_amount(&pool.sqrt_ratio_x96).map_err(|_| PoolError::InvalidSqrtRatio(pool.sqrt_ratio_x96.clone()))?;
    let liquidity = pool.liquidity.trim().parse::<u128>().map_err(|_| PoolError::InvalidLiquidity(pool.liquidity.clone()))?;
    let tick_current = pool.tick_current.trim().parse::<i32>().map_err(|_| PoolError::InvalidTick(pool.tick_current.clone()))?;

    Ok(V3Pool::new(
        Arc::new(parse_token(token_in)?),
        Arc::new(parse_token(token_out)?),
        fee,
        sqrt_ratio_x96,
        liquidity,
        tick_current,
        parse_pool_address(pool.address.as_deref()),
    )?)
}

pub fn parse_pool_or_pair(hop: &Hop) -> Result<PoolWrapper, RouteParseError> {
    match hop {
        Hop::V2(pool) => Ok(parse_pair(pool)?.into()),
        Hop::V3(pool) => Ok(parse_v3_pool(pool)?.into()),
        Hop::Unknown => Err(RouteParseError::UnsupportedHop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::{Pool, PoolClass};
    use crate::quote::V2Reserve;

    fn descriptor(address: &str, decimals: RawDecimals) -> TokenInRoute {
        TokenInRoute {
            address: address.to_string(),
            chain_id: 1,
            decimals,
            symbol: Some("TKN".to_string()),
            name: None,
            buy_fee_bps: None,
            sell_fee_bps: None,
        }
    }

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    #[test]
    fn test_parse_token() -> eyre::Result<()> {
        let mut raw = descriptor(DAI, RawDecimals::Text("18".to_string()));
        raw.sell_fee_bps = Some("150".to_string());
        raw.buy_fee_bps = Some(String::new());

        let token = parse_token(&raw)?;
        assert_eq!(token.get_decimals(), 18);
        assert_eq!(token.get_address(), Address::from_str(DAI)?);
        assert_eq!(token.symbol(), Some("TKN"));
        assert_eq!(token.buy_fee_bps(), None);
        assert_eq!(token.sell_fee_bps(), Some(U256::from(150)));
        Ok(())
    }

    #[test]
    fn test_parse_token_zero_fee_is_kept() -> eyre::Result<()> {
        let mut raw = descriptor(DAI, 18u8.into());
        raw.buy_fee_bps = Some("0".to_string());
        assert_eq!(parse_token(&raw)?.buy_fee_bps(), Some(U256::ZERO));
        Ok(())
    }

    #[test]
    fn test_parse_token_errors() {
        assert_eq!(parse_token(&descriptor("0x1234", 18u8.into())), Err(TokenError::InvalidAddress("0x1234".to_string())));
        assert_eq!(
            parse_token(&descriptor(DAI, RawDecimals::Number(255))),
            Err(TokenError::InvalidDecimals("255".to_string()))
        );
        assert_eq!(
            parse_token(&descriptor(DAI, RawDecimals::Text("six".to_string()))),
            Err(TokenError::InvalidDecimals("six".to_string()))
        );

        let mut raw = descriptor(DAI, 18u8.into());
        raw.sell_fee_bps = Some("abc".to_string());
        assert_eq!(parse_token(&raw), Err(TokenError::InvalidFeeBps("abc".to_string())));
    }

    #[test]
    fn test_parse_pair() -> eyre::Result<()> {
        let pool = V2PoolInRoute {
            address: Some("not-an-address".to_string()),
            token_in: None,
            token_out: None,
            reserve0: V2Reserve { token: descriptor(USDC, 6u8.into()), quotient: "200".to_string() },
            reserve1: V2Reserve { token: descriptor(DAI, 18u8.into()), quotient: "100".to_string() },
            amount_in: None,
            amount_out: None,
        };

        let pair = parse_pair(&pool)?;
        // DAI (0x6B..) sorts before USDC (0xA0..)
        assert_eq!(pair.token0().get_address(), Address::from_str(DAI)?);
        assert_eq!(pair.reserve0(), U256::from(100));
        assert_eq!(pair.get_address(), None);

        let wrapper = parse_pool_or_pair(&Hop::V2(pool))?;
        assert_eq!(wrapper.get_class(), PoolClass::UniswapV2);
        Ok(())
    }

    #[test]
    fn test_parse_v3_pool_errors() {
        let pool = V3PoolInRoute {
            address: None,
            token_in: Some(descriptor(DAI, 18u8.into())),
            token_out: Some(descriptor(USDC, 6u8.into())),
            fee: "500".to_string(),
            sqrt_ratio_x96: "2437312313659959819381354528".to_string(),
            liquidity: "10272714736694327408".to_string(),
            tick_current: "-69633".to_string(),
            amount_in: None,
            amount_out: None,
        };
        assert!(parse_v3_pool(&pool).is_ok());

        let bad_tick = V3PoolInRoute { tick_current: "abc".to_string(), ..pool.clone() };
        assert_eq!(parse_v3_pool(&bad_tick).unwrap_err(), RouteParseError::Pool(PoolError::InvalidTick("abc".to_string())));

        let wrong_price = V3PoolInRoute { tick_current: "0".to_string(), ..pool.clone() };
        assert_eq!(parse_v3_pool(&wrong_price).unwrap_err(), RouteParseError::Pool(PoolError::PriceBounds));

        let missing = V3PoolInRoute { token_out: None, ..pool };
        assert_eq!(parse_v3_pool(&missing).unwrap_err(), RouteParseError::MissingTokens);

        assert_eq!(parse_pool_or_pair(&Hop::Unknown).unwrap_err(), RouteParseError::UnsupportedHop);
    }
}
