use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use super::config::{CalculatorConfig, InputDefaults};
use super::quotes::{normalize_symbol, QuoteProvider};
use super::units::{contract_value, days_to_years, percent_to_decimal};
use crate::models::bs::price;
use crate::pricing::{OptionPricingRequest, OptionType};

/// One calculator submission, in the units a user types them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub ticker: String,
    pub strike_price: f64,
    pub maturity_days: u32,
    /// Percent, e.g. 5.0
    pub risk_free_rate_percent: f64,
    /// Percent, e.g. 20.0
    pub volatility_percent: f64,
    /// Percent; zero unless the underlying pays a dividend
    #[serde(default)]
    pub dividend_yield_percent: f64,
    /// "call" or "put"; parsed strictly when the input is calculated
    pub option_type: String,
}

impl CalculatorInput {
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            ticker: defaults.ticker.clone(),
            strike_price: defaults.strike_price,
            maturity_days: defaults.maturity_days,
            risk_free_rate_percent: defaults.risk_free_rate_percent,
            volatility_percent: defaults.volatility_percent,
            dividend_yield_percent: defaults.dividend_yield_percent,
            option_type: defaults.option_type.to_string(),
        }
    }
}

/// Result of one calculation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub symbol: String,
    pub underlying_price: f64,
    pub option_type: OptionType,
    /// Fair value of a single option
    pub option_price: f64,
    pub contract_multiplier: f64,
    /// `option_price * contract_multiplier`
    pub contract_cost: f64,
}

impl Calculation {
    /// The three lines shown to the user, prices rounded to cents.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Current Price of {}: ${:.2}",
            self.symbol, self.underlying_price
        )?;
        writeln!(
            f,
            "The {} option price is: ${:.2}",
            self.option_type, self.option_price
        )?;
        write!(
            f,
            "Total cost for one contract ({} options): ${:.2}",
            self.contract_multiplier, self.contract_cost
        )
    }
}

/// Ties a quote source and a configuration to the pricing engine.
pub struct Calculator<P: QuoteProvider> {
    config: CalculatorConfig,
    provider: P,
}

impl<P: QuoteProvider> Calculator<P> {
    pub fn new(config: CalculatorConfig, provider: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// A form pre-filled from the configured defaults.
    pub fn default_input(&self) -> CalculatorInput {
        CalculatorInput::from_defaults(&self.config.defaults)
    }

    /// Convert `input` to engine units and price it against the provider's
    /// last price for the ticker.
    pub fn calculate(&self, input: &CalculatorInput) -> Result<Calculation> {
        let option_type: OptionType = input
            .option_type
            .parse()
            .inspect_err(|e| warn!(error = %e, "rejected calculator input"))?;

        let symbol = normalize_symbol(&input.ticker);
        let underlying_price = self
            .provider
            .last_price(&symbol)
            .with_context(|| format!("failed to look up price for {symbol}"))?;

        let years = days_to_years(f64::from(input.maturity_days), self.config.day_count_basis);
        let rate = percent_to_decimal(input.risk_free_rate_percent);
        let sigma = percent_to_decimal(input.volatility_percent);
        let dividend = percent_to_decimal(input.dividend_yield_percent);
        debug!(%symbol, underlying_price, years, rate, sigma, dividend, "converted calculator input");

        let request = OptionPricingRequest::new(
            option_type,
            underlying_price,
            input.strike_price,
            years,
            rate,
            sigma,
        )
        .and_then(|r| r.with_dividend_yield(dividend))
        .inspect_err(|e| warn!(error = %e, %symbol, "rejected calculator input"))?;

        let option_price = price(&request)?;
        let multiplier = self.config.contract_multiplier;

        Ok(Calculation {
            symbol,
            underlying_price,
            option_type,
            option_price,
            contract_multiplier: multiplier,
            contract_cost: contract_value(option_price, multiplier),
        })
    }
}
