//! Calculator layer around the pricing engine.
//!
//! Everything here is input acquisition and display glue: converting the
//! percentages and day counts a user types into the decimals the engine
//! expects, looking up the underlying's last price, and formatting the
//! result per option and per contract.

pub mod config;
pub mod quotes;
pub mod session;
pub mod units;
