//! Pricing request and result types shared by the engine and the calculator.

pub mod types;

pub use types::*;
