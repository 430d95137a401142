use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::config::CalculatorConfig;

/// Source of the underlying's current price for a ticker.
///
/// Implementations only hand out positive, finite prices; unknown symbols are
/// errors, never a placeholder price.
pub trait QuoteProvider: Send + Sync {
    fn last_price(&self, symbol: &str) -> Result<f64>;
}

/// Trim and upper-case a ticker ("  aapl" -> "AAPL").
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

fn checked_price(symbol: &str, price: f64) -> Result<f64> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        bail!("quote for {symbol} is not a positive price: {price}")
    }
}

/// Fixed in-memory quotes, e.g. from the `[quotes]` table of a config file.
#[derive(Debug, Clone, Default)]
pub struct StaticQuotes {
    prices: HashMap<String, f64>,
}

impl StaticQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the price for `symbol`.
    pub fn insert(&mut self, symbol: &str, price: f64) -> Result<()> {
        let symbol = normalize_symbol(symbol);
        let price = checked_price(&symbol, price)?;
        self.prices.insert(symbol, price);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Build from symbol/price pairs; later duplicates win.
    ///
    /// Fails on the first price that is not positive and finite.
    pub fn from_pairs<S, I>(pairs: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut quotes = Self::new();
        for (symbol, price) in pairs {
            quotes.insert(symbol.as_ref(), price)?;
        }
        Ok(quotes)
    }

    /// Seed from the `[quotes]` table of a calculator config.
    pub fn from_config(config: &CalculatorConfig) -> Result<Self> {
        Self::from_pairs(config.quotes.iter().map(|(symbol, price)| (symbol, *price)))
            .context("invalid [quotes] table")
    }
}

impl QuoteProvider for StaticQuotes {
    fn last_price(&self, symbol: &str) -> Result<f64> {
        let symbol = normalize_symbol(symbol);
        self.prices
            .get(&symbol)
            .copied()
            .ok_or_else(|| anyhow!("no quote available for {symbol}"))
    }
}

/// Row of a daily price history CSV. Other columns (date, volume) are ignored.
#[derive(Debug, Deserialize)]
struct HistoryRow {
    symbol: String,
    close: f64,
}

/// Last closing price per symbol from a `symbol,date,close` history file.
///
/// Rows are read in file order and the last row for a symbol wins, so the file
/// should be sorted oldest to newest.
#[derive(Debug, Clone, Default)]
pub struct CsvQuotes {
    closes: HashMap<String, f64>,
}

impl CsvQuotes {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open quote history {}", path.display()))?;
        let quotes = Self::from_reader(file)
            .with_context(|| format!("invalid quote history {}", path.display()))?;
        info!(path = %path.display(), symbols = quotes.closes.len(), "loaded quote history");
        Ok(quotes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut closes = HashMap::new();
        for (line, result) in rdr.deserialize::<HistoryRow>().enumerate() {
            let row = result.with_context(|| format!("bad quote row {}", line + 1))?;
            let symbol = normalize_symbol(&row.symbol);
            let close = checked_price(&symbol, row.close)?;
            closes.insert(symbol, close);
        }
        Ok(Self { closes })
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.closes.keys().map(String::as_str)
    }
}

impl QuoteProvider for CsvQuotes {
    fn last_price(&self, symbol: &str) -> Result<f64> {
        let symbol = normalize_symbol(symbol);
        self.closes
            .get(&symbol)
            .copied()
            .ok_or_else(|| anyhow!("no closing price for {symbol}"))
    }
}
