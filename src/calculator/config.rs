use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use super::units::{DEFAULT_CONTRACT_MULTIPLIER, DEFAULT_DAY_COUNT_BASIS};
use crate::pricing::OptionType;

/// Pre-filled form values, all in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default = "default_ticker")]
    pub ticker: String,
    #[serde(default = "default_strike_price")]
    pub strike_price: f64,
    #[serde(default = "default_maturity_days")]
    pub maturity_days: u32,
    /// Percent, e.g. 5.0 for 5%
    #[serde(default = "default_risk_free_rate_percent")]
    pub risk_free_rate_percent: f64,
    /// Percent, e.g. 20.0 for 20%
    #[serde(default = "default_volatility_percent")]
    pub volatility_percent: f64,
    /// Percent
    #[serde(default)]
    pub dividend_yield_percent: f64,
    #[serde(default = "default_option_type")]
    pub option_type: OptionType,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            ticker: default_ticker(),
            strike_price: default_strike_price(),
            maturity_days: default_maturity_days(),
            risk_free_rate_percent: default_risk_free_rate_percent(),
            volatility_percent: default_volatility_percent(),
            dividend_yield_percent: 0.0,
            option_type: default_option_type(),
        }
    }
}

/// Main configuration struct for the calculator
///
/// # Example
///
/// ```rust
/// use bs_pricer::CalculatorConfig;
///
/// let config = CalculatorConfig::from_toml_str(r#"
///     contract_multiplier = 10.0
///
///     [defaults]
///     ticker = "MSFT"
///
///     [quotes]
///     MSFT = 412.5
/// "#)?;
/// assert_eq!(config.day_count_basis, 365.0);
/// assert_eq!(config.defaults.ticker, "MSFT");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Days per year used to turn a maturity in days into years
    #[serde(default = "default_day_count_basis")]
    pub day_count_basis: f64,

    /// Options per contract for the total-cost line
    #[serde(default = "default_contract_multiplier")]
    pub contract_multiplier: f64,

    #[serde(default)]
    pub defaults: InputDefaults,

    /// Optional symbol -> last price table for offline use
    #[serde(default)]
    pub quotes: BTreeMap<String, f64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            day_count_basis: default_day_count_basis(),
            contract_multiplier: default_contract_multiplier(),
            defaults: InputDefaults::default(),
            quotes: BTreeMap::new(),
        }
    }
}

impl CalculatorConfig {
    /// Calendar-day basis with standard 100-option contracts
    pub fn standard() -> Self {
        Self::default()
    }

    /// Maturities counted in trading days (252 per year)
    pub fn trading_days() -> Self {
        Self {
            day_count_basis: 252.0,
            defaults: InputDefaults {
                maturity_days: 252,
                ..InputDefaults::default()
            },
            ..Self::default()
        }
    }

    /// Mini contracts covering 10 options each
    pub fn mini_contracts() -> Self {
        Self {
            contract_multiplier: 10.0,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("failed to parse calculator config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        info!(
            path = %path.display(),
            quotes = config.quotes.len(),
            "loaded calculator config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.day_count_basis.is_finite() && self.day_count_basis > 0.0) {
            bail!("day_count_basis must be positive, got {}", self.day_count_basis);
        }
        if !(self.contract_multiplier.is_finite() && self.contract_multiplier > 0.0) {
            bail!(
                "contract_multiplier must be positive, got {}",
                self.contract_multiplier
            );
        }
        for (symbol, price) in &self.quotes {
            if !(price.is_finite() && *price > 0.0) {
                bail!("quote for {symbol} must be positive, got {price}");
            }
        }
        Ok(())
    }
}

fn default_day_count_basis() -> f64 {
    DEFAULT_DAY_COUNT_BASIS
}

fn default_contract_multiplier() -> f64 {
    DEFAULT_CONTRACT_MULTIPLIER
}

fn default_ticker() -> String {
    "AAPL".to_string()
}

fn default_strike_price() -> f64 {
    100.0
}

fn default_maturity_days() -> u32 {
    365
}

fn default_risk_free_rate_percent() -> f64 {
    5.0
}

fn default_volatility_percent() -> f64 {
    20.0
}

fn default_option_type() -> OptionType {
    OptionType::Call
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.defaults.ticker, "AAPL");
        assert_eq!(config.defaults.maturity_days, 365);
        assert_eq!(config.defaults.option_type, OptionType::Call);
    }

    #[test]
    fn partial_defaults_table_is_merged() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            day_count_basis = 252.0

            [defaults]
            volatility_percent = 35.0
            option_type = "put"
            "#,
        )
        .unwrap();
        assert_eq!(config.day_count_basis, 252.0);
        assert_eq!(config.contract_multiplier, 100.0);
        assert_eq!(config.defaults.volatility_percent, 35.0);
        assert_eq!(config.defaults.option_type, OptionType::Put);
        assert_eq!(config.defaults.strike_price, 100.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(CalculatorConfig::from_toml_str("day_count_basis = 0.0").is_err());
        assert!(CalculatorConfig::from_toml_str("contract_multiplier = -1.0").is_err());
        assert!(CalculatorConfig::from_toml_str("[quotes]\nAAPL = 0.0").is_err());
        assert!(CalculatorConfig::from_toml_str("[defaults]\noption_type = \"both\"").is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(CalculatorConfig::standard().contract_multiplier, 100.0);
        assert_eq!(CalculatorConfig::trading_days().day_count_basis, 252.0);
        assert_eq!(CalculatorConfig::trading_days().defaults.maturity_days, 252);
        assert_eq!(CalculatorConfig::mini_contracts().contract_multiplier, 10.0);
        for preset in [
            CalculatorConfig::standard(),
            CalculatorConfig::trading_days(),
            CalculatorConfig::mini_contracts(),
        ] {
            assert!(preset.validate().is_ok());
        }
    }
}
