
use bs_pricer::calculator::units::{days_to_years, percent_to_decimal};
use bs_pricer::{
    bs_call_price, bs_put_price, default_configs, Calculator, CalculatorConfig, CalculatorInput,
    CsvQuotes, OptionType, PricingError, QuoteProvider, StaticQuotes,
};
use test_utils::{assert_close, CONFIG_TOML, QUOTES_CSV};

fn spy_input(volatility_percent: f64) -> CalculatorInput {
    CalculatorInput {
        ticker: "spy".to_string(),
        strike_price: 500.0,
        maturity_days: 30,
        risk_free_rate_percent: 5.0,
        volatility_percent,
        dividend_yield_percent: 0.0,
        option_type: "call".to_string(),
    }
}

/// Full flow: config file, CSV quote history, calculation and rendering.
#[test]
fn test_calculator_with_csv_quotes() {
    let config = CalculatorConfig::from_path(CONFIG_TOML).expect("config fixture loads");
    let quotes = CsvQuotes::from_path(QUOTES_CSV).expect("quote fixture loads");
    assert_eq!(quotes.last_price("SPY").unwrap(), 505.03);

    let calc = Calculator::new(config, quotes).unwrap();
    let out = calc.calculate(&calc.default_input()).unwrap();

    let expected = bs_call_price(505.03, 500.0, 0.05, 0.0, 30.0 / 365.0, 0.15).unwrap();
    assert_close(out.option_price, expected, 1e-12, "SPY call");
    assert_close(out.contract_cost, expected * 100.0, 1e-9, "SPY contract");
    assert_eq!(out.symbol, "SPY");
    assert_eq!(out.option_type, OptionType::Call);

    let text = out.render();
    assert!(text.starts_with("Current Price of SPY: $505.03\n"), "{text}");
    assert!(text.contains("The call option price is: $"), "{text}");
    assert!(text.contains("Total cost for one contract (100 options): $"), "{text}");
}

/// Config `[quotes]` seed a static provider.
#[test]
fn test_static_quotes_from_config() {
    let config = CalculatorConfig::from_path(CONFIG_TOML).unwrap();
    let quotes = StaticQuotes::from_config(&config).unwrap();
    assert_eq!(quotes.last_price("qqq").unwrap(), 438.1);

    let calc = Calculator::new(config, quotes).unwrap();
    let mut input = calc.default_input();
    input.ticker = "QQQ".to_string();
    input.strike_price = 440.0;
    input.option_type = "put".to_string();
    let out = calc.calculate(&input).unwrap();

    let expected = bs_put_price(438.1, 440.0, 0.05, 0.0, 30.0 / 365.0, 0.15).unwrap();
    assert_close(out.option_price, expected, 1e-12, "QQQ put");
}

/// The calculator owns unit conversion: 20 (percent) reaches the engine as 0.20.
#[test]
fn test_percent_volatility_converted_by_caller() {
    let quotes = StaticQuotes::from_pairs([("SPY", 505.03)]).unwrap();
    let calc = Calculator::new(default_configs::standard(), quotes).unwrap();

    let out = calc.calculate(&spy_input(20.0)).unwrap();
    let decimal = bs_call_price(
        505.03,
        500.0,
        percent_to_decimal(5.0),
        0.0,
        days_to_years(30.0, 365.0),
        0.20,
    )
    .unwrap();
    assert_close(out.option_price, decimal, 1e-12, "converted volatility");

    // an unconverted 20.0 would be a 2000% volatility and a very different price
    let unconverted = bs_call_price(505.03, 500.0, 0.05, 0.0, 30.0 / 365.0, 20.0).unwrap();
    assert!((out.option_price - unconverted).abs() > 100.0);
}

#[test]
fn test_trading_day_basis_changes_year_fraction() {
    let quotes = StaticQuotes::from_pairs([("SPY", 505.03)]).unwrap();
    let calendar = Calculator::new(default_configs::standard(), quotes.clone()).unwrap();
    let trading = Calculator::new(default_configs::trading_days(), quotes).unwrap();

    let input = spy_input(15.0);
    let calendar_price = calendar.calculate(&input).unwrap().option_price;
    let trading_price = trading.calculate(&input).unwrap().option_price;

    let expected = bs_call_price(505.03, 500.0, 0.05, 0.0, 30.0 / 252.0, 0.15).unwrap();
    assert_close(trading_price, expected, 1e-12, "252-day basis");
    // 30 trading days is a longer year fraction than 30 calendar days
    assert!(trading_price > calendar_price);
}

#[test]
fn test_mini_contract_multiplier() {
    let quotes = StaticQuotes::from_pairs([("SPY", 505.03)]).unwrap();
    let calc = Calculator::new(default_configs::mini_contracts(), quotes).unwrap();
    let out = calc.calculate(&spy_input(15.0)).unwrap();
    assert_eq!(out.contract_multiplier, 10.0);
    assert_close(out.contract_cost, out.option_price * 10.0, 1e-12, "mini contract");
    assert!(out
        .render()
        .contains("Total cost for one contract (10 options): $"));
}

#[test]
fn test_invalid_inputs_surface_typed_errors() {
    let quotes = StaticQuotes::from_pairs([("SPY", 505.03)]).unwrap();
    let calc = Calculator::new(default_configs::standard(), quotes).unwrap();

    let mut input = spy_input(15.0);
    input.option_type = "binary".to_string();
    let err = calc.calculate(&input).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PricingError>(),
        Some(&PricingError::InvalidOptionType("binary".to_string()))
    );

    let mut input = spy_input(0.0);
    input.option_type = "put".to_string();
    let err = calc.calculate(&input).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PricingError>(),
        Some(PricingError::Domain {
            field: "volatility",
            ..
        })
    ));

    let mut input = spy_input(15.0);
    input.strike_price = -500.0;
    let err = calc.calculate(&input).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PricingError>(),
        Some(PricingError::Domain {
            field: "strike_price",
            ..
        })
    ));
}

#[test]
fn test_missing_files_report_path() {
    let err = CalculatorConfig::from_path("tests/data/does_not_exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.toml"));

    let err = CsvQuotes::from_path("tests/data/does_not_exist.csv").unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.csv"));
}

#[test]
fn test_calculator_rejects_invalid_config() {
    let config = CalculatorConfig {
        contract_multiplier: 0.0,
        ..CalculatorConfig::default()
    };
    assert!(Calculator::new(config, StaticQuotes::new()).is_err());
}
