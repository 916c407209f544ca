use crate::constants::{NATIVE_ASSETS, NATIVE_DECIMALS, NativeAssetInfo, SwapRouterNativeAsset};
use crate::errors::RouteParseError;
use crate::token::Token;
use alloy_primitives::Address;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The chain's native asset (e.g. ETH), carrying the ERC-20 token that wraps it.
#[derive(Clone, Debug)]
pub struct NativeCurrency {
    chain_id: u64,
    symbol: String,
    name: String,
    wrapped: Token,
}

impl PartialEq for NativeCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Eq for NativeCurrency {}

impl NativeCurrency {
    pub fn new(chain_id: u64, symbol: impl Into<String>, name: impl Into<String>, wrapped: Token) -> Self {
        Self { chain_id, symbol: symbol.into(), name: name.into(), wrapped }
    }

    pub fn get_chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wrapped(&self) -> &Token {
        &self.wrapped
    }
}

impl From<&NativeAssetInfo> for NativeCurrency {
    fn from(info: &NativeAssetInfo) -> Self {
        let wrapped = Token::new_with_data(
            info.chain_id,
            info.wrapped_address,
            NATIVE_DECIMALS,
            Some(info.wrapped_symbol.to_string()),
            Some(info.wrapped_name.to_string()),
        );
        NativeCurrency::new(info.chain_id, info.native_symbol, info.native_name, wrapped)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Native(native) => write!(f, "{}", native.symbol()),
            Currency::Token(token) => write!(f, "{}", token),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    pub fn get_chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.get_chain_id(),
            Currency::Token(token) => token.get_chain_id(),
        }
    }

    pub fn get_decimals(&self) -> u8 {
        match self {
            Currency::Native(_) => NATIVE_DECIMALS,
            Currency::Token(token) => token.get_decimals(),
        }
    }

    pub fn get_symbol(&self) -> String {
        match self {
            Currency::Native(native) => native.symbol().to_string(),
            Currency::Token(token) => token.get_symbol(),
        }
    }

    /// The token form of this currency: the wrapper for a native currency, itself otherwise.
    pub fn wrapped(&self) -> &Token {
        match self {
            Currency::Native(native) => native.wrapped(),
            Currency::Token(token) => token,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Native(_) => None,
        }
    }

    /// The address to send to the quote service: a native placeholder symbol or the token address.
    pub fn address_for_swap_quote(&self) -> String {
        match self {
            Currency::Native(native) => SwapRouterNativeAsset::for_chain(native.get_chain_id()).to_string(),
            Currency::Token(token) => token.get_address().to_checksum(None),
        }
    }
}

/// Native currencies by chain id.
#[derive(Clone, Debug)]
pub struct NativeCurrencyRegistry {
    natives: HashMap<u64, NativeCurrency>,
}

impl Default for NativeCurrencyRegistry {
    fn default() -> Self {
        Self { natives: NATIVE_ASSETS.iter().map(|info| (info.chain_id, NativeCurrency::from(info))).collect() }
    }
}

impl NativeCurrencyRegistry {
    pub fn empty() -> Self {
        Self { natives: HashMap::new() }
    }

    /// Add or replace the native currency of a chain.
    pub fn insert(&mut self, native: NativeCurrency) -> Option<NativeCurrency> {
        self.natives.insert(native.get_chain_id(), native)
    }

    pub fn with_native(mut self, native: NativeCurrency) -> Self {
        self.insert(native);
        self
    }

    pub fn get(&self, chain_id: u64) -> Option<&NativeCurrency> {
        self.natives.get(&chain_id)
    }

    pub fn native_on_chain(&self, chain_id: u64) -> Result<NativeCurrency, RouteParseError> {
        self.get(chain_id).cloned().ok_or(RouteParseError::UnsupportedChain(chain_id))
    }

    pub fn is_wrapped_native(&self, chain_id: u64, address: Address) -> bool {
        self.get(chain_id).is_some_and(|native| native.wrapped().get_address() == address)
    }

    pub fn len(&self) -> usize {
        self.natives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.natives.is_empty()
    }
}
