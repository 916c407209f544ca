use async_trait::async_trait;
use dotenvy::dotenv;
use regex::{Captures, Regex};
use serde::de::DeserializeOwned;
use std::{env, fs};
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
    #[error("Error loading config: {0}")]
    ConfigError(String),
}

#[async_trait]
pub trait RoutingConfigLoader {
    type SectionType;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError>;
}

pub trait RoutingConfigLoaderSync {
    type SectionType;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError>;
}

/// Loader for sections that may be missing from the file.
#[async_trait]
pub trait OptionalRoutingConfigLoader {
    type SectionType;

    async fn load_optional_section_from_file(file_name: String) -> Result<Option<Self::SectionType>, LoadConfigError>;
}

pub async fn load_from_file<T: DeserializeOwned>(file_name: String) -> Result<T, LoadConfigError> {
    dotenv().ok();
    let contents = tokio::fs::read_to_string(file_name).await?;
    load_from_str(&contents)
}

pub fn load_from_file_sync<T: DeserializeOwned>(file_name: String) -> Result<T, LoadConfigError> {
    dotenv().ok();
    let contents = fs::read_to_string(file_name)?;
    load_from_str(&contents)
}

/// Parse TOML after expanding `${VAR}` placeholders from the environment.
pub fn load_from_str<T: DeserializeOwned>(contents: &str) -> Result<T, LoadConfigError> {
    let contents = expand_vars(contents)?;
    let config: T = toml::from_str(&contents)?;
    Ok(config)
}

fn expand_vars(raw_config: &str) -> Result<String, LoadConfigError> {
    expand_vars_with(raw_config, |name| env::var(name).ok())
}

/// Replace `${NAME}` with `lookup(NAME)`. Unknown names are left as they are.
pub fn expand_vars_with<F>(raw_config: &str, lookup: F) -> Result<String, LoadConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)\}")?;
    Ok(re
        .replace_all(raw_config, |caps: &Captures| match lookup(&caps[1]) {
            Some(val) => val,
            None => caps[0].to_string(),
        })
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Section {
        name: String,
        chain_id: u64,
    }

    #[test]
    fn test_expand_vars_with() -> eyre::Result<()> {
        let lookup = |name: &str| (name == "CHAIN_ID").then(|| "137".to_string());

        assert_eq!(expand_vars_with("chain_id = ${CHAIN_ID}", lookup)?, "chain_id = 137");
        assert_eq!(expand_vars_with("name = \"${MISSING}\"", lookup)?, "name = \"${MISSING}\"");
        assert_eq!(expand_vars_with("price = $5", lookup)?, "price = $5");
        Ok(())
    }

    #[test]
    fn test_load_from_str() -> eyre::Result<()> {
        let section: Section = load_from_str("name = \"polygon\"\nchain_id = 137\n")?;
        assert_eq!(section.name, "polygon");
        assert_eq!(section.chain_id, 137);

        let err = load_from_str::<Section>("name = ").unwrap_err();
        assert!(matches!(err, LoadConfigError::TomlError(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_from_file::<Section>("does/not/exist.toml".to_string()).await.unwrap_err();
        assert!(matches!(err, LoadConfigError::IoError(_)));
    }
}
