use crate::errors::TokenError;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    buy_fee_bps: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sell_fee_bps: Option<U256>,
}

pub type TokenWrapper = Arc<Token>;

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chain_id.cmp(&other.chain_id).then_with(|| self.address.cmp(&other.address))
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:#})", self.get_symbol(), self.address)
    }
}

impl Token {
    pub fn new(chain_id: u64, address: Address, decimals: u8) -> Token {
        Token { chain_id, address, decimals, ..Token::default() }
    }

    pub fn new_with_data(chain_id: u64, address: Address, decimals: u8, symbol: Option<String>, name: Option<String>) -> Token {
        Token { chain_id, address, decimals, symbol, name, ..Token::default() }
    }

    /// Attach fee-on-transfer information. `None` keeps the fee unknown rather than zero.
    pub fn with_fees(mut self, buy_fee_bps: Option<U256>, sell_fee_bps: Option<U256>) -> Token {
        self.buy_fee_bps = buy_fee_bps;
        self.sell_fee_bps = sell_fee_bps;
        self
    }

    // For testing purposes
    pub fn repeat_byte(chain_id: u64, byte: u8) -> Token {
        Token::new(chain_id, Address::repeat_byte(byte), 18)
    }

    pub fn get_chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_symbol(&self) -> String {
        self.symbol.clone().unwrap_or(self.address.to_string())
    }

    pub fn get_name(&self) -> String {
        self.name.clone().unwrap_or(self.address.to_string())
    }

    pub fn buy_fee_bps(&self) -> Option<U256> {
        self.buy_fee_bps
    }

    pub fn sell_fee_bps(&self) -> Option<U256> {
        self.sell_fee_bps
    }

    pub fn get_exp(&self) -> U256 {
        U256::from(10).pow(U256::from(self.decimals))
    }

    /// Returns true if this token sorts before `other` by address. Both tokens must be on the same chain and differ.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::ChainMismatch(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            return Err(TokenError::SameAddress(self.address));
        }
        Ok(self.address < other.address)
    }

    /// Field-by-field comparison, unlike `==` which only looks at chain and address.
    pub fn strict_eq(&self, other: &Token) -> bool {
        self == other
            && self.decimals == other.decimals
            && self.symbol == other.symbol
            && self.name == other.name
            && self.buy_fee_bps == other.buy_fee_bps
            && self.sell_fee_bps == other.sell_fee_bps
    }
}
