use alloy_primitives::{Address, address};
use crate::currency::Currency;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

pub const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// Decimals of every chain-native asset we support.
pub const NATIVE_DECIMALS: u8 = 18;

#[non_exhaustive]
pub struct ChainId;

impl ChainId {
    pub const MAINNET: u64 = 1;
    pub const OPTIMISM: u64 = 10;
    pub const BNB: u64 = 56;
    pub const POLYGON: u64 = 137;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM_ONE: u64 = 42161;
    pub const AVALANCHE: u64 = 43114;
    pub const SEPOLIA: u64 = 11155111;
}

#[non_exhaustive]
pub struct WrappedNativeAddress;

impl WrappedNativeAddress {
    pub const MAINNET: Address = WETH;
    // OP stack predeploy
    pub const OPTIMISM: Address = address!("0x4200000000000000000000000000000000000006");
    pub const BASE: Address = address!("0x4200000000000000000000000000000000000006");
    pub const ARBITRUM_ONE: Address = address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1");
    pub const POLYGON: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
    pub const BNB: Address = address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c");
    pub const AVALANCHE: Address = address!("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7");
    pub const SEPOLIA: Address = address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14");
}

/// Static description of a chain's native asset and its ERC-20 wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeAssetInfo {
    pub chain_id: u64,
    pub native_symbol: &'static str,
    pub native_name: &'static str,
    pub wrapped_address: Address,
    pub wrapped_symbol: &'static str,
    pub wrapped_name: &'static str,
}

pub const NATIVE_ASSETS: &[NativeAssetInfo] = &[
    NativeAssetInfo {
        chain_id: ChainId::MAINNET,
        native_symbol: "ETH",
        native_name: "Ether",
        wrapped_address: WrappedNativeAddress::MAINNET,
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAssetInfo {
        chain_id: ChainId::OPTIMISM,
        native_symbol: "ETH",
        native_name: "Ether",
        wrapped_address: WrappedNativeAddress::OPTIMISM,
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAssetInfo {
        chain_id: ChainId::BNB,
        native_symbol: "BNB",
        native_name: "BNB",
        wrapped_address: WrappedNativeAddress::BNB,
        wrapped_symbol: "WBNB",
        wrapped_name: "Wrapped BNB",
    },
    NativeAssetInfo {
        chain_id: ChainId::POLYGON,
        native_symbol: "MATIC",
        native_name: "Polygon Matic",
        wrapped_address: WrappedNativeAddress::POLYGON,
        wrapped_symbol: "WMATIC",
        wrapped_name: "Wrapped MATIC",
    },
    NativeAssetInfo {
        chain_id: ChainId::BASE,
        native_symbol: "ETH",
        native_name: "Ether",
        wrapped_address: WrappedNativeAddress::BASE,
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAssetInfo {
        chain_id: ChainId::ARBITRUM_ONE,
        native_symbol: "ETH",
        native_name: "Ether",
        wrapped_address: WrappedNativeAddress::ARBITRUM_ONE,
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
    NativeAssetInfo {
        chain_id: ChainId::AVALANCHE,
        native_symbol: "AVAX",
        native_name: "Avalanche",
        wrapped_address: WrappedNativeAddress::AVALANCHE,
        wrapped_symbol: "WAVAX",
        wrapped_name: "Wrapped AVAX",
    },
    NativeAssetInfo {
        chain_id: ChainId::SEPOLIA,
        native_symbol: "ETH",
        native_name: "Ether",
        wrapped_address: WrappedNativeAddress::SEPOLIA,
        wrapped_symbol: "WETH",
        wrapped_name: "Wrapped Ether",
    },
];

/// Placeholder "addresses" the swap router uses for native currencies in quote requests.
#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SwapRouterNativeAsset {
    Eth,
    Matic,
    Bnb,
    Avax,
    Mon,
}

impl SwapRouterNativeAsset {
    pub fn for_chain(chain_id: u64) -> Self {
        match chain_id {
            ChainId::POLYGON => SwapRouterNativeAsset::Matic,
            ChainId::BNB => SwapRouterNativeAsset::Bnb,
            ChainId::AVALANCHE => SwapRouterNativeAsset::Avax,
            _ => SwapRouterNativeAsset::Eth,
        }
    }
}

/// Check if a request token address is one of the native placeholders (case sensitive).
pub fn is_swap_router_native_asset(address: &str) -> bool {
    SwapRouterNativeAsset::from_str(address).is_ok()
}

/// The token address to send in a quote request for `currency`.
pub fn currency_address_for_swap_quote(currency: &Currency) -> String {
    currency.address_for_swap_quote()
}
