use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, PricingResult};

/// European exercise style: right to buy (call) or sell (put) at the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts "call" or "put" in any case. Anything else is rejected rather
    /// than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

/// Inputs to a single Black-Scholes valuation.
///
/// All rates and the volatility are annualized decimals (0.05 for 5%, 0.20 for
/// 20%) and the maturity is in years. Converting from display units is the
/// caller's job; see [`crate::calculator::units`].
///
/// A request is validated on construction and cannot be mutated afterwards.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{OptionPricingRequest, OptionType};
///
/// let request = OptionPricingRequest::new(OptionType::Call, 100.0, 105.0, 0.5, 0.04, 0.25)?
///     .with_dividend_yield(0.01)?;
/// assert_eq!(request.dividend_yield(), 0.01);
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPricingRequest {
    option_type: OptionType,
    underlying_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    #[serde(default)]
    dividend_yield: f64,
    volatility: f64,
}

impl OptionPricingRequest {
    /// Build a request with a zero dividend yield.
    ///
    /// # Errors
    ///
    /// [`PricingError::Domain`] if `underlying_price`, `strike_price`,
    /// `time_to_maturity` or `volatility` is not strictly positive and finite,
    /// or if `risk_free_rate` is not finite.
    pub fn new(
        option_type: OptionType,
        underlying_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> PricingResult<Self> {
        let request = Self {
            option_type,
            underlying_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            dividend_yield: 0.0,
            volatility,
        };
        request.validate()?;
        Ok(request)
    }

    /// Replace the continuous dividend yield (decimal, annualized).
    pub fn with_dividend_yield(self, dividend_yield: f64) -> PricingResult<Self> {
        let request = Self {
            dividend_yield,
            ..self
        };
        request.validate()?;
        Ok(request)
    }

    /// Check every precondition the closed-form formula relies on.
    ///
    /// `sigma * sqrt(T)` divides `d1`, so zero maturity or zero volatility is
    /// rejected here instead of producing a non-finite price.
    pub fn validate(&self) -> PricingResult<()> {
        require_positive("underlying_price", self.underlying_price)?;
        require_positive("strike_price", self.strike_price)?;
        require_positive("time_to_maturity", self.time_to_maturity)?;
        require_positive("volatility", self.volatility)?;
        require_finite("risk_free_rate", self.risk_free_rate)?;
        require_finite("dividend_yield", self.dividend_yield)?;
        Ok(())
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

fn require_positive(field: &'static str, value: f64) -> PricingResult<()> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::positive(field, value))
    }
}

fn require_finite(field: &'static str, value: f64) -> PricingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::finite(field, value))
    }
}

/// Rate and dividend inputs shared by every row of a strike ladder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Risk-free rate, annualized decimal
    pub r: f64,
    /// Dividend yield, annualized decimal
    pub q: f64,
}

/// One contract in a strike ladder, priced against a common underlying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainRow {
    pub option_type: OptionType,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Volatility as decimal, e.g. 0.25 for 25%
    pub volatility: f64,
}

/// Priced ladder row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainQuote {
    pub option_type: OptionType,
    pub strike_price: f64,
    pub underlying_price: f64,
    pub years_to_exp: f64,
    pub volatility: f64,
    /// Black-Scholes fair value per option
    pub model_price: f64,
}
