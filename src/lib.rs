//! # bs-pricer: Black-Scholes Fair Value for European Options
//!
//! `bs-pricer` computes the theoretical value of a European call or put with the
//! Black-Scholes(-Merton) closed form, given the underlying price, strike,
//! maturity, risk-free rate, dividend yield and volatility.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: pure, stateless closed-form pricer with strict input validation
//! - **Accurate N(x)**: standard normal CDF via the complementary error function
//! - **Calculator Layer**: percent/day-count conversion, quote lookup, per-contract cost
//! - **Strike Ladders**: price many strikes against one underlying in a single call
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price, OptionPricingRequest, OptionType};
//!
//! // Rates and volatility are decimals, maturity is in years
//! let request = OptionPricingRequest::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.20)?;
//! let value = price(&request)?;
//! assert!((value - 10.4506).abs() < 1e-4);
//! # Ok::<(), bs_pricer::PricingError>(())
//! ```
//!
//! ## Units
//!
//! The engine only accepts annualized decimals. Turning "5 %" into `0.05` or
//! "30 days" into `30.0 / 365.0` happens in [`calculator::units`], which the
//! [`Calculator`] applies before every request.
//!
//! ## Invalid inputs
//!
//! Zero or negative spot, strike, maturity or volatility, and any non-finite
//! input, fail with [`PricingError::Domain`]. So do valid inputs whose
//! discounted spot or strike overflows `f64`. Option-type text other than
//! "call"/"put" fails with [`PricingError::InvalidOptionType`]. A price is
//! never returned as NaN or infinity.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod calculator;
pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use std::cmp::Ordering;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core types
pub use error::{PricingError, PricingResult};
pub use pricing::{ChainQuote, ChainRow, MarketParameters, OptionPricingRequest, OptionType};

// Engine
pub use models::bs::{bs_call_price, bs_put_price, price, BlackScholes};
pub use models::traits::PricingEngine;
pub use models::utils::normal_cdf;

// Calculator
pub use calculator::config::{CalculatorConfig, InputDefaults};
pub use calculator::quotes::{CsvQuotes, QuoteProvider, StaticQuotes};
pub use calculator::session::{Calculation, Calculator, CalculatorInput};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured calculator settings.
///
/// - [`standard()`]: 365-day basis, 100-option contracts
/// - [`trading_days()`]: 252-day basis
/// - [`mini_contracts()`]: 10-option contracts
pub mod default_configs {
    use crate::calculator::config::CalculatorConfig;

    /// Calendar-day maturities and standard equity contracts.
    ///
    /// ```rust
    /// let config = bs_pricer::default_configs::standard();
    /// assert_eq!(config.contract_multiplier, 100.0);
    /// ```
    pub fn standard() -> CalculatorConfig {
        CalculatorConfig::standard()
    }

    /// Maturities entered in trading days, 252 per year.
    pub fn trading_days() -> CalculatorConfig {
        CalculatorConfig::trading_days()
    }

    /// Contracts covering 10 options instead of 100.
    pub fn mini_contracts() -> CalculatorConfig {
        CalculatorConfig::mini_contracts()
    }
}

/// Price a strike ladder against a single underlying price.
///
/// Every row is an independent European option sharing `market.r` and
/// `market.q`; nothing is netted or summed across rows.
///
/// # Returns
///
/// One [`ChainQuote`] per row, sorted by strike and then calls before puts.
///
/// # Errors
///
/// The first row that fails validation aborts the whole ladder with its
/// [`PricingError`]; no placeholder prices are substituted.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price_chain, ChainRow, MarketParameters, OptionType};
///
/// let rows = [105.0, 95.0, 100.0].map(|k| ChainRow {
///     option_type: OptionType::Call,
///     strike_price: k,
///     years_to_exp: 0.25,
///     volatility: 0.3,
/// });
/// let quotes = price_chain(100.0, &rows, MarketParameters { r: 0.03, q: 0.0 })?;
/// assert_eq!(quotes[0].strike_price, 95.0);
/// assert!(quotes[0].model_price > quotes[2].model_price);
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
pub fn price_chain(
    underlying_price: f64,
    rows: &[ChainRow],
    market: MarketParameters,
) -> PricingResult<Vec<ChainQuote>> {
    let mut results = Vec::with_capacity(rows.len());

    for row in rows {
        let request = OptionPricingRequest::new(
            row.option_type,
            underlying_price,
            row.strike_price,
            row.years_to_exp,
            market.r,
            row.volatility,
        )?
        .with_dividend_yield(market.q)?;

        results.push(ChainQuote {
            option_type: row.option_type,
            strike_price: row.strike_price,
            underlying_price,
            years_to_exp: row.years_to_exp,
            volatility: row.volatility,
            model_price: price(&request)?,
        });
    }

    results.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
            .then(a.option_type.cmp(&b.option_type))
    });
    Ok(results)
}
