//! Typed failures raised by the pricing core.

/// Errors returned by the Black-Scholes engine and request construction.
///
/// The engine never recovers from these locally; they are surfaced to the
/// caller as soon as an input is found to be invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid option type {0:?}: use 'call' or 'put'")]
    InvalidOptionType(String),

    #[error("domain error: {field} must be {requirement}, got {value}")]
    Domain {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

impl PricingError {
    pub(crate) fn positive(field: &'static str, value: f64) -> Self {
        PricingError::Domain {
            field,
            requirement: "positive and finite",
            value,
        }
    }

    pub(crate) fn finite(field: &'static str, value: f64) -> Self {
        PricingError::Domain {
            field,
            requirement: "finite",
            value,
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
