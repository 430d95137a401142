//! Display-unit conversions performed before a request reaches the engine.

/// Calendar days per year used by the calculator unless configured otherwise.
pub const DEFAULT_DAY_COUNT_BASIS: f64 = 365.0;

/// Options covered by one standard equity contract.
pub const DEFAULT_CONTRACT_MULTIPLIER: f64 = 100.0;

/// 5.0 (percent) -> 0.05
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// Maturity in days to a year fraction on the given day-count basis.
pub fn days_to_years(days: f64, basis: f64) -> f64 {
    days / basis
}

/// Cost of one contract given the per-option price.
pub fn contract_value(option_price: f64, multiplier: f64) -> f64 {
    option_price * multiplier
}
