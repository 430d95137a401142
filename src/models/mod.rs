pub mod bs;

/// Common traits used by pricing engines
pub mod traits {
    use crate::error::PricingResult;
    use crate::pricing::OptionPricingRequest;

    /// A closed-form pricer for a single European option.
    ///
    /// Implementations must be pure: the returned price depends on the request
    /// only, so one engine can be shared freely across threads.
    pub trait PricingEngine: Send + Sync {
        fn name(&self) -> &'static str;

        /// Fair value of one option described by `request`.
        fn price(&self, request: &OptionPricingRequest) -> PricingResult<f64>;
    }
}

/// Utility functions for option pricing and calculations
pub mod utils {
    use std::f64::consts::SQRT_2;

    /// Continuously-compounded discount factor e^(-rate * t)
    pub fn discount_factor(rate: f64, t: f64) -> f64 {
        (-rate * t).exp()
    }

    /// Standard normal cumulative distribution function.
    ///
    /// Written in terms of `erfc` so the lower tail keeps full relative
    /// precision instead of cancelling in `1 + erf(x)`.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn normal_cdf_reference_points() {
            assert_eq!(normal_cdf(0.0), 0.5);
            assert!((normal_cdf(1.96) - 0.975_002_104_851_779_5).abs() < 1e-15);
            assert!((normal_cdf(-1.0) - 0.158_655_253_931_457_05).abs() < 1e-15);
            assert!((normal_cdf(0.1) - 0.539_827_837_277_029).abs() < 1e-15);
        }

        #[test]
        fn normal_cdf_symmetry_and_tails() {
            for &x in &[0.3, 1.0, 2.5, 5.0, 8.0] {
                let sum = normal_cdf(x) + normal_cdf(-x);
                assert!((sum - 1.0).abs() < 1e-15, "N({x}) + N(-{x}) = {sum}");
            }
            // lower tail stays positive and accurate far out
            let tail = normal_cdf(-10.0);
            assert!(tail > 0.0);
            assert!((tail / 7.619_853_024_160_527e-24 - 1.0).abs() < 1e-10);
        }

        #[test]
        fn discounting() {
            assert_eq!(discount_factor(0.0, 3.0), 1.0);
            assert!((discount_factor(0.05, 1.0) - 0.951_229_424_500_714).abs() < 1e-15);
        }
    }
}
