use crate::constants::NATIVE_DECIMALS;
use crate::currency::{NativeCurrency, NativeCurrencyRegistry};
use crate::parser::RouteParser;
use crate::token::Token;
use crate::utils::config_loader::{
    LoadConfigError, OptionalRoutingConfigLoader, RoutingConfigLoader, RoutingConfigLoaderSync, load_from_file, load_from_file_sync,
};
use alloy_primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

#[derive(Clone, Deserialize, Debug)]
pub struct RoutingConfigRoot {
    pub routing: RoutingConfigSection,
}

#[derive(Clone, Deserialize, Debug)]
struct OptionalRoutingConfigRoot {
    routing: Option<RoutingConfigSection>,
}

/// Native currency of a chain, as written in the `[[routing.chains]]` table.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub native_symbol: String,
    pub native_name: String,
    pub wrapped_address: Address,
    pub wrapped_symbol: String,
    pub wrapped_name: String,
}

impl From<&ChainConfig> for NativeCurrency {
    fn from(chain: &ChainConfig) -> Self {
        let wrapped = Token::new_with_data(
            chain.chain_id,
            chain.wrapped_address,
            NATIVE_DECIMALS,
            Some(chain.wrapped_symbol.clone()),
            Some(chain.wrapped_name.clone()),
        );
        NativeCurrency::new(chain.chain_id, chain.native_symbol.clone(), chain.native_name.clone(), wrapped)
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfigSection {
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

impl RoutingConfigSection {
    pub fn with_chain(mut self, chain: ChainConfig) -> Self {
        self.chains.push(chain);
        self
    }

    /// The built-in native currencies with the configured chains added or replaced.
    pub fn registry(&self) -> NativeCurrencyRegistry {
        let mut registry = NativeCurrencyRegistry::default();
        for chain in &self.chains {
            if registry.insert(chain.into()).is_some() {
                debug!("Native currency for chain {} overridden by config", chain.chain_id);
            }
        }
        registry
    }

    pub fn parser(&self) -> RouteParser {
        RouteParser::new(self.registry())
    }
}

#[async_trait]
impl RoutingConfigLoader for RoutingConfigSection {
    type SectionType = RoutingConfigSection;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: RoutingConfigRoot = load_from_file(file_name).await?;
        Ok(root.routing)
    }
}

impl RoutingConfigLoaderSync for RoutingConfigSection {
    type SectionType = RoutingConfigSection;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: RoutingConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.routing)
    }
}

#[async_trait]
impl OptionalRoutingConfigLoader for RoutingConfigSection {
    type SectionType = RoutingConfigSection;

    async fn load_optional_section_from_file(file_name: String) -> Result<Option<Self::SectionType>, LoadConfigError> {
        let root: OptionalRoutingConfigRoot = load_from_file(file_name).await?;
        Ok(root.routing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ChainId, WETH};
    use crate::utils::config_loader::load_from_str;
    use alloy_primitives::address;
    use std::path::PathBuf;

    const CONFIG: &str = r#"
[routing]

[[routing.chains]]
chain_id = 10143
native_symbol = "MON"
native_name = "Monad"
wrapped_address = "0x760AfE86e5de5fa0Ee542fc7B7B713e1c5425701"
wrapped_symbol = "WMON"
wrapped_name = "Wrapped Monad"

[[routing.chains]]
chain_id = 1
native_symbol = "ETH"
native_name = "Ether"
wrapped_address = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
wrapped_symbol = "WETH9"
wrapped_name = "Wrapped Ether"
"#;

    fn write_config(name: &str, contents: &str) -> eyre::Result<PathBuf> {
        let path = std::env::temp_dir().join(format!("route-parser-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    #[test]
    fn test_registry_from_config() -> eyre::Result<()> {
        let root: RoutingConfigRoot = load_from_str(CONFIG)?;
        assert_eq!(root.routing.chains.len(), 2);

        let registry = root.routing.registry();
        let mon = registry.native_on_chain(10143)?;
        assert_eq!(mon.symbol(), "MON");
        assert_eq!(mon.wrapped().get_address(), address!("0x760AfE86e5de5fa0Ee542fc7B7B713e1c5425701"));
        assert_eq!(mon.wrapped().get_decimals(), NATIVE_DECIMALS);

        let eth = registry.native_on_chain(ChainId::MAINNET)?;
        assert_eq!(eth.wrapped().get_address(), WETH);
        assert_eq!(eth.wrapped().symbol(), Some("WETH9"));

        // built-in chains stay available
        assert!(registry.get(ChainId::POLYGON).is_some());
        Ok(())
    }

    #[test]
    fn test_empty_section_is_default_registry() -> eyre::Result<()> {
        let root: RoutingConfigRoot = load_from_str("[routing]\n")?;
        assert!(root.routing.chains.is_empty());
        assert_eq!(root.routing.registry().len(), NativeCurrencyRegistry::default().len());
        Ok(())
    }

    #[test]
    fn test_with_chain_builds_parser() -> eyre::Result<()> {
        let section = RoutingConfigSection::default().with_chain(ChainConfig {
            chain_id: 999,
            native_symbol: "FOO".to_string(),
            native_name: "Foo".to_string(),
            wrapped_address: Address::repeat_byte(9),
            wrapped_symbol: "WFOO".to_string(),
            wrapped_name: "Wrapped Foo".to_string(),
        });
        let parser = section.parser();
        assert_eq!(parser.registry().native_on_chain(999)?.symbol(), "FOO");
        Ok(())
    }

    #[test]
    fn test_invalid_wrapped_address() {
        let config = CONFIG.replace("0x760AfE86e5de5fa0Ee542fc7B7B713e1c5425701", "0x1234");
        assert!(matches!(load_from_str::<RoutingConfigRoot>(&config), Err(LoadConfigError::TomlError(_))));
    }

    #[test]
    fn test_load_section_sync() -> eyre::Result<()> {
        let path = write_config("sync", CONFIG)?;
        let section = RoutingConfigSection::load_section_from_file_sync(path.to_string_lossy().to_string())?;
        std::fs::remove_file(&path)?;

        assert_eq!(section.chains[0].native_symbol, "MON");
        Ok(())
    }

    #[tokio::test]
    async fn test_load_section_async() -> eyre::Result<()> {
        let path = write_config("async", CONFIG)?;
        let file_name = path.to_string_lossy().to_string();

        let section = RoutingConfigSection::load_section_from_file(file_name.clone()).await?;
        assert_eq!(section.chains.len(), 2);

        let optional = RoutingConfigSection::load_optional_section_from_file(file_name).await?;
        assert!(optional.is_some());
        std::fs::remove_file(&path)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_optional_section_missing() -> eyre::Result<()> {
        let path = write_config("optional", "[other]\nkey = 1\n")?;
        let file_name = path.to_string_lossy().to_string();

        assert!(RoutingConfigSection::load_optional_section_from_file(file_name.clone()).await?.is_none());
        assert!(RoutingConfigSection::load_section_from_file(file_name).await.is_err());
        std::fs::remove_file(&path)?;
        Ok(())
    }
}
