use bs_pricer::{default_configs, Calculator, StaticQuotes};

fn main() -> anyhow::Result<()> {
    let quotes = StaticQuotes::from_pairs([("AAPL", 173.03)])?;

    println!("bs-pricer Default Configuration Examples\n");

    let presets = [
        ("Standard (calendar days, 100-option contracts)", default_configs::standard()),
        ("Trading days (252 per year)", default_configs::trading_days()),
        ("Mini contracts (10 options)", default_configs::mini_contracts()),
    ];

    for (i, (label, config)) in presets.into_iter().enumerate() {
        println!("{}. {}:", i + 1, label);
        println!("   Day count basis: {}", config.day_count_basis);
        println!("   Contract multiplier: {}", config.contract_multiplier);
        println!(
            "   Default input: {} K={} {}d r={}% vol={}% {}",
            config.defaults.ticker,
            config.defaults.strike_price,
            config.defaults.maturity_days,
            config.defaults.risk_free_rate_percent,
            config.defaults.volatility_percent,
            config.defaults.option_type
        );

        match Calculator::new(config, quotes.clone())
            .and_then(|calc| calc.calculate(&calc.default_input()))
        {
            Ok(calculation) => {
                println!(
                    "   Default {} price: ${:.2} (contract ${:.2})\n",
                    calculation.option_type, calculation.option_price, calculation.contract_cost
                );
            }
            Err(e) => println!("   Calculation failed: {e:#}\n"),
        }
    }
    Ok(())
}
