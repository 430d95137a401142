// Example: plot_price_curve.rs
// Draws Black-Scholes call and put values against the underlying price,
// together with the discounted payoff at expiry, for one strike.
//
// Usage:
//     cargo run --example plot_price_curve -- [strike] [days] [vol_percent] [rate_percent]
//
// The chart is written to price_curve.svg in the working directory.

use std::env;
use std::error::Error;

use bs_pricer::calculator::units::{days_to_years, percent_to_decimal, DEFAULT_DAY_COUNT_BASIS};
use bs_pricer::{price, OptionPricingRequest, OptionType};
use plotters::prelude::*;

fn arg_or(args: &[String], idx: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match args.get(idx) {
        Some(v) => Ok(v.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let strike = arg_or(&args, 0, 100.0)?;
    let years = days_to_years(arg_or(&args, 1, 90.0)?, DEFAULT_DAY_COUNT_BASIS);
    let sigma = percent_to_decimal(arg_or(&args, 2, 25.0)?);
    let rate = percent_to_decimal(arg_or(&args, 3, 5.0)?);

    let spot_min = strike * 0.5;
    let spot_max = strike * 1.5;
    let steps = 200;

    let mut call_line = Vec::with_capacity(steps + 1);
    let mut put_line = Vec::with_capacity(steps + 1);
    let mut call_payoff = Vec::with_capacity(steps + 1);
    let mut put_payoff = Vec::with_capacity(steps + 1);
    let discounted_strike = strike * (-rate * years).exp();

    for i in 0..=steps {
        let spot = spot_min + (spot_max - spot_min) * (i as f64) / (steps as f64);
        let call = OptionPricingRequest::new(OptionType::Call, spot, strike, years, rate, sigma)?;
        let put = OptionPricingRequest::new(OptionType::Put, spot, strike, years, rate, sigma)?;
        call_line.push((spot, price(&call)?));
        put_line.push((spot, price(&put)?));
        call_payoff.push((spot, (spot - discounted_strike).max(0.0)));
        put_payoff.push((spot, (discounted_strike - spot).max(0.0)));
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, v)| v)
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = SVGBackend::new("price_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes value | K={:.2}, T={:.4}y, vol={:.1}%, r={:.2}%",
                strike,
                years,
                sigma * 100.0,
                rate * 100.0
            ),
            ("sans-serif", 28),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(spot_min..spot_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying ($)")
        .y_desc("Option value ($)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(call_line, RED.stroke_width(2)))?
        .label("call")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(put_line, BLUE.stroke_width(2)))?
        .label("put")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(LineSeries::new(call_payoff, RED.mix(0.3)))?;
    chart.draw_series(LineSeries::new(put_payoff, BLUE.mix(0.3)))?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to price_curve.svg");
    Ok(())
}
