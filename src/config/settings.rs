use crate::convert::{ConvertError, Converter, StaticRates, UnitCatalog, UnitCategory};
use crate::tools::password::DEFAULT_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "omnitools.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ConvertError),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Currency basket override
    #[serde(default)]
    pub currency: Option<CurrencyConfig>,

    // Extra linear categories
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub password: PasswordConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    #[serde(default = "default_pivot")]
    pub pivot: String,
    // Ordered code -> rate pairs
    pub rates: toml::Table,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub name: String,
    pub units: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    #[serde(default = "default_password_length")]
    pub length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_password_length(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    // tracing EnvFilter directive, e.g. "warn" or "omnitools=debug"
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_pivot() -> String {
    "USD".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".omnitools")
}

fn default_password_length() -> usize {
    DEFAULT_LENGTH
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.build_converter()?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load_from_file(default)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Converter with configured categories and currency rates
    pub fn build_converter(&self) -> Result<Converter, ConvertError> {
        let mut catalog = UnitCatalog::default();
        for category in &self.categories {
            catalog.add(UnitCategory::linear(
                category.name.clone(),
                category.units.clone(),
            )?)?;
        }

        let rates = match &self.currency {
            Some(currency) => {
                let mut rates = Vec::with_capacity(currency.rates.len());
                for (code, value) in &currency.rates {
                    let rate = match value {
                        toml::Value::Float(f) => *f,
                        toml::Value::Integer(i) => *i as f64,
                        _ => f64::NAN,
                    };
                    rates.push((code.clone(), rate));
                }
                StaticRates::new(currency.pivot.clone(), rates)?
            }
            None => StaticRates::default(),
        };

        Ok(Converter::with_parts(catalog, Box::new(rates)))
    }
}
