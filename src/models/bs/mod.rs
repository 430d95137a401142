// Closed-form Black-Scholes(-Merton) value of European calls and puts with a
// continuous dividend yield. Implied volatility and Greeks are out of scope.

use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::models::traits::PricingEngine;
use crate::models::utils::{discount_factor, normal_cdf};
use crate::pricing::{OptionPricingRequest, OptionType};

/// Stateless Black-Scholes engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingEngine for BlackScholes {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn price(&self, request: &OptionPricingRequest) -> PricingResult<f64> {
        price(request)
    }
}

/// Standardized moneyness terms `(d1, d2)`.
///
/// Callers must have validated the request: `sigma * sqrt(T)` is the divisor.
/// `sigma^2` is never formed, so a huge but finite volatility still sends
/// `d1` to +inf and `d2` to -inf instead of overflowing both to +inf.
#[allow(non_snake_case)]
pub(crate) fn d1_d2(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * T.sqrt();
    let center = (S / K).ln() / sig_sqrt_t + (r - q) * T.sqrt() / sigma;
    let half_width = 0.5 * sig_sqrt_t;
    (center + half_width, center - half_width)
}

/// Fair value of one European option.
///
/// Rates and volatility must already be annualized decimals; no unit
/// conversion happens here, so `sigma = 20.0` is priced as 2000% volatility.
///
/// # Errors
///
/// [`crate::PricingError::Domain`] when S, K, T or sigma is not strictly
/// positive and finite, or r/q is non-finite. Requests built with
/// [`OptionPricingRequest::new`] already satisfy this; the check is repeated
/// for requests that arrived through deserialization. Valid inputs whose
/// discounted spot or strike overflows `f64` (e.g. `r = -800`) also fail with
/// `Domain` rather than returning NaN or infinity.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{models::bs::price, OptionPricingRequest, OptionType};
///
/// let call = OptionPricingRequest::new(OptionType::Call, 100.0, 100.0, 1.0, 0.0, 0.2)?;
/// let value = price(&call)?;
/// assert!((value - 7.9656).abs() < 1e-4);
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
#[allow(non_snake_case)]
pub fn price(request: &OptionPricingRequest) -> PricingResult<f64> {
    request.validate()?;

    let S = request.underlying_price();
    let K = request.strike_price();
    let T = request.time_to_maturity();
    let r = request.risk_free_rate();
    let q = request.dividend_yield();
    let sigma = request.volatility();

    let (d1, d2) = d1_d2(S, K, r, q, T, sigma);
    let spot_df = require_finite("discounted_spot", S * discount_factor(q, T))?;
    let strike_df = require_finite("discounted_strike", K * discount_factor(r, T))?;

    let value = match request.option_type() {
        OptionType::Call => spot_df * normal_cdf(d1) - strike_df * normal_cdf(d2),
        OptionType::Put => strike_df * normal_cdf(-d2) - spot_df * normal_cdf(-d1),
    };
    let value = require_finite("price", value)?;

    debug!(
        option_type = %request.option_type(),
        spot = S,
        strike = K,
        years = T,
        sigma,
        price = value,
        "priced option"
    );

    Ok(value)
}

fn require_finite(field: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::finite(field, value))
    }
}

/// Price of a European call. Shorthand for building a request and calling [`price`].
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> PricingResult<f64> {
    let request = OptionPricingRequest::new(OptionType::Call, S, K, T, r, sigma)?
        .with_dividend_yield(q)?;
    price(&request)
}

/// Price of a European put. Shorthand for building a request and calling [`price`].
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, q: f64, T: f64, sigma: f64) -> PricingResult<f64> {
    let request = OptionPricingRequest::new(OptionType::Put, S, K, T, r, sigma)?
        .with_dividend_yield(q)?;
    price(&request)
}
