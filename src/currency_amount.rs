use crate::currency::Currency;
use crate::errors::AmountError;
use alloy_primitives::U256;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

pub const BIPS_BASE: u32 = 10_000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    #[default]
    RoundDown,
    RoundHalfUp,
    RoundUp,
}

/// Parse a raw integer amount. Accepts decimal or `0x` prefixed strings.
pub fn parse_raw_amount(raw: &str) -> Result<U256, AmountError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AmountError::Empty);
    }
    U256::from_str(raw).map_err(|_| AmountError::Invalid(raw.to_string()))
}

/// An amount of a currency in its smallest unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    raw: U256,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, raw: U256) -> Self {
        Self { currency, raw }
    }

    pub fn from_raw_amount(currency: Currency, raw: &str) -> Result<Self, AmountError> {
        Ok(Self::new(currency, parse_raw_amount(raw)?))
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn to_significant(&self, significant_digits: usize, rounding: Rounding) -> Result<String, AmountError> {
        format_significant(self.raw, self.currency.get_decimals(), significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u8, rounding: Rounding) -> Result<String, AmountError> {
        let decimals = self.currency.get_decimals();
        if decimal_places > decimals {
            return Err(AmountError::DecimalsExceeded { places: decimal_places, decimals });
        }
        Ok(format_fixed(self.raw, decimals, decimal_places, rounding))
    }

    pub fn to_exact(&self) -> String {
        format_scaled(&self.raw.to_string(), self.currency.get_decimals())
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency.get_symbol())
    }
}

/// A percentage expressed in basis points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Percent {
    bips: u32,
}

impl Percent {
    pub fn from_bips(bips: u32) -> Self {
        Self { bips }
    }

    pub fn bips(&self) -> u32 {
        self.bips
    }

    /// (numerator, denominator) of the fraction this percent represents.
    pub fn as_fraction(&self) -> (u32, u32) {
        (self.bips, BIPS_BASE)
    }

    /// Apply the percent to a raw amount, rounding down.
    pub fn apply(&self, raw: U256) -> U256 {
        raw * U256::from(self.bips) / U256::from(BIPS_BASE)
    }

    /// Percent value with up to two decimals, e.g. 25 bips -> "0.25".
    pub fn to_exact(&self) -> String {
        format_scaled(&self.bips.to_string(), 2)
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.to_exact())
    }
}

pub(crate) fn format_significant(raw: U256, decimals: u8, significant_digits: usize, rounding: Rounding) -> Result<String, AmountError> {
    if significant_digits == 0 {
        return Err(AmountError::ZeroSignificantDigits);
    }
    if raw.is_zero() {
        return Ok("0".to_string());
    }
    let rounded = round_digits(&raw.to_string(), significant_digits, rounding);
    Ok(format_scaled(&rounded, decimals))
}

pub(crate) fn format_fixed(raw: U256, decimals: u8, decimal_places: u8, rounding: Rounding) -> String {
    let dropped = (decimals - decimal_places) as usize;
    let digits = raw.to_string();
    // pad so at least one digit survives the cut
    let padded = format!("{:0>width$}", digits, width = dropped + 1);
    let rounded = round_digits(&padded, padded.len() - dropped, rounding);
    let kept = &rounded[..rounded.len() - dropped];

    let places = decimal_places as usize;
    let kept = format!("{:0>width$}", kept, width = places + 1);
    let (int_part, frac_part) = kept.split_at(kept.len() - places);
    let int_part = trim_leading_zeros(int_part);
    if places == 0 { int_part.to_string() } else { format!("{}.{}", int_part, frac_part) }
}

/// Round an integer digit string to `keep` leading digits. The result keeps the same scale:
/// dropped digits become zeros and a carry may add one leading digit.
fn round_digits(digits: &str, keep: usize, rounding: Rounding) -> String {
    if keep >= digits.len() {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(keep);
    let round_up = match rounding {
        Rounding::RoundDown => false,
        Rounding::RoundHalfUp => tail.as_bytes()[0] >= b'5',
        Rounding::RoundUp => tail.bytes().any(|b| b != b'0'),
    };
    let head = if round_up { increment_digits(head) } else { head.to_string() };
    format!("{}{}", head, "0".repeat(tail.len()))
}

fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Place the decimal point `decimals` digits from the right and strip trailing zeros.
fn format_scaled(digits: &str, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals == 0 {
        return trim_leading_zeros(digits).to_string();
    }
    let padded = format!("{:0>width$}", digits, width = decimals + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let int_part = trim_leading_zeros(int_part);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() { int_part.to_string() } else { format!("{}.{}", int_part, frac_part) }
}

fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;
    use alloy_primitives::Address;

    fn amount(decimals: u8, raw: &str) -> CurrencyAmount {
        CurrencyAmount::from_raw_amount(Token::new(1, Address::repeat_byte(1), decimals).into(), raw).unwrap()
    }

    #[test]
    fn test_from_raw_amount() {
        assert_eq!(amount(6, "1000000").raw(), U256::from(1_000_000));
        assert_eq!(amount(6, "0x10").raw(), U256::from(16));

        let currency: Currency = Token::repeat_byte(1, 1).into();
        assert_eq!(CurrencyAmount::from_raw_amount(currency.clone(), ""), Err(AmountError::Empty));
        assert_eq!(CurrencyAmount::from_raw_amount(currency.clone(), "-5"), Err(AmountError::Invalid("-5".to_string())));
        assert_eq!(CurrencyAmount::from_raw_amount(currency.clone(), "1.5"), Err(AmountError::Invalid("1.5".to_string())));
        let too_big = format!("{}0", U256::MAX);
        assert!(CurrencyAmount::from_raw_amount(currency, &too_big).is_err());
    }

    #[test]
    fn test_to_significant() {
        assert_eq!(amount(6, "1000000").to_significant(6, Rounding::RoundDown).unwrap(), "1");
        assert_eq!(amount(6, "200000000").to_significant(6, Rounding::RoundDown).unwrap(), "200");
        assert_eq!(amount(18, "1000000000000000000").to_significant(6, Rounding::RoundDown).unwrap(), "1");
        assert_eq!(amount(6, "1234567").to_significant(3, Rounding::RoundDown).unwrap(), "1.23");
        assert_eq!(amount(6, "1235567").to_significant(3, Rounding::RoundHalfUp).unwrap(), "1.24");
        assert_eq!(amount(6, "1230001").to_significant(3, Rounding::RoundUp).unwrap(), "1.24");
        assert_eq!(amount(0, "1234567").to_significant(6, Rounding::RoundDown).unwrap(), "1234560");
        assert_eq!(amount(10, "1234567").to_significant(6, Rounding::RoundDown).unwrap(), "0.000123456");
        assert_eq!(amount(2, "9999").to_significant(2, Rounding::RoundHalfUp).unwrap(), "100");
        assert_eq!(amount(6, "0").to_significant(6, Rounding::RoundDown).unwrap(), "0");
        assert_eq!(amount(6, "1").to_significant(0, Rounding::RoundDown), Err(AmountError::ZeroSignificantDigits));
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(amount(6, "1234567").to_fixed(2, Rounding::RoundDown).unwrap(), "1.23");
        assert_eq!(amount(6, "1235567").to_fixed(2, Rounding::RoundHalfUp).unwrap(), "1.24");
        assert_eq!(amount(6, "999").to_fixed(2, Rounding::RoundUp).unwrap(), "0.01");
        assert_eq!(amount(6, "999").to_fixed(2, Rounding::RoundDown).unwrap(), "0.00");
        assert_eq!(amount(6, "1500000").to_fixed(0, Rounding::RoundHalfUp).unwrap(), "2");
        assert_eq!(amount(6, "1500000").to_fixed(6, Rounding::RoundDown).unwrap(), "1.500000");
        assert_eq!(
            amount(6, "1").to_fixed(7, Rounding::RoundDown),
            Err(AmountError::DecimalsExceeded { places: 7, decimals: 6 })
        );
    }

    #[test]
    fn test_to_exact() {
        assert_eq!(amount(6, "1500000").to_exact(), "1.5");
        assert_eq!(amount(6, "1").to_exact(), "0.000001");
        assert_eq!(amount(0, "42").to_exact(), "42");
        assert_eq!(amount(18, "0").to_exact(), "0");
    }

    #[test]
    fn test_percent() {
        let percent = Percent::from_bips(25);
        assert_eq!(percent.to_exact(), "0.25");
        assert_eq!(percent.to_string(), "0.25%");
        assert_eq!(percent.as_fraction(), (25, 10_000));
        assert_eq!(percent.apply(U256::from(1_000_000)), U256::from(2_500));
        assert_eq!(Percent::from_bips(10_000).to_exact(), "100");
    }
}
