// Example: chain_demo.rs
// Prices a strike ladder from a CSV file against one underlying price.
//
// Usage:
//     cargo run --example chain_demo -- <chain_csv> <underlying> [rate] [dividend]
//
// The CSV needs the columns option_type,strike_price,years_to_exp,volatility
// with volatility and rates as decimals.

use std::env;

use anyhow::{bail, Context, Result};
use bs_pricer::{price_chain, ChainRow, MarketParameters};
use csv::ReaderBuilder;

#[derive(serde::Deserialize)]
struct CsvRow {
    option_type: String,
    strike_price: f64,
    years_to_exp: f64,
    volatility: f64,
}

fn load_csv(path: &str) -> Result<Vec<ChainRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open {path}"))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: CsvRow = result?;
        rows.push(ChainRow {
            option_type: row.option_type.parse()?,
            strike_price: row.strike_price,
            years_to_exp: row.years_to_exp,
            volatility: row.volatility,
        });
    }
    Ok(rows)
}

fn parse_arg(value: Option<String>, name: &str, default: f64) -> Result<f64> {
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("{name} must be a number, got {v:?}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: chain_demo <chain_csv> <underlying> [rate] [dividend]");
    };
    let underlying = parse_arg(args.next(), "underlying", 100.0)?;
    let market = MarketParameters {
        r: parse_arg(args.next(), "rate", 0.0)?,
        q: parse_arg(args.next(), "dividend", 0.0)?,
    };

    let rows = load_csv(&path)?;
    let quotes = price_chain(underlying, &rows, market)?;

    println!("Underlying: {underlying:.2}  r={}  q={}", market.r, market.q);
    println!(
        "{:<6} {:>10} {:>8} {:>8} {:>12}",
        "Type", "Strike", "T(y)", "Vol", "Price"
    );
    println!("{}", "-".repeat(48));
    for quote in &quotes {
        println!(
            "{:<6} {:>10.2} {:>8.4} {:>8.4} {:>12.4}",
            quote.option_type.as_str(),
            quote.strike_price,
            quote.years_to_exp,
            quote.volatility,
            quote.model_price
        );
    }

    Ok(())
}
