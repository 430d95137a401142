// demos/pricing_demo.rs

//! Calculator session: look up the underlying, convert display units and
//! price a call and a put.
//!
//! Usage:
//!     cargo run --example pricing_demo -- [config.toml] [quotes.csv]
//!
//! Without arguments the standard config and a small in-memory quote table
//! are used. A config with a `[quotes]` table supplies its own quotes.

use anyhow::Result;
use bs_pricer::{
    default_configs, Calculator, CalculatorConfig, CsvQuotes, QuoteProvider, StaticQuotes,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("Black-Scholes Option Price Calculator");
    println!("=====================================");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => default_configs::standard(),
    };

    match args.next() {
        Some(path) => run(config, CsvQuotes::from_path(path)?),
        None if !config.quotes.is_empty() => {
            let quotes = StaticQuotes::from_config(&config)?;
            run(config, quotes)
        }
        None => {
            let quotes =
                StaticQuotes::from_pairs([("AAPL", 173.03), ("MSFT", 397.84), ("SPY", 505.03)])?;
            run(config, quotes)
        }
    }
}

fn run<P: QuoteProvider>(config: CalculatorConfig, quotes: P) -> Result<()> {
    let calculator = Calculator::new(config, quotes)?;
    let mut input = calculator.default_input();

    println!(
        "\nInputs: ticker={} strike={} days={} rate={}% vol={}%",
        input.ticker,
        input.strike_price,
        input.maturity_days,
        input.risk_free_rate_percent,
        input.volatility_percent
    );

    for option_type in ["call", "put"] {
        input.option_type = option_type.to_string();
        let calculation = calculator.calculate(&input)?;
        println!("\n{}", calculation.render());
    }

    // Option type text is validated, never defaulted
    input.option_type = "straddle".to_string();
    if let Err(e) = calculator.calculate(&input) {
        println!("\nRejected input: {e}");
    }

    Ok(())
}
