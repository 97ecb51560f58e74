use std::str::FromStr;

use roboscreen_core::{Candle, History};
use rust_decimal::Decimal;

pub fn by_symbol(s: &str) -> Option<History> {
    match s {
        "ISRG" => Some(build(&[
            ("2024-01-02", "490.00"),
            ("2024-01-03", "500.00"),
            ("2024-01-04", "505.00"),
        ])),
        "NVDA" => Some(build(&[
            ("2024-01-02", "980.00"),
            ("2024-01-03", "990.00"),
            ("2024-01-04", "1000.00"),
        ])),
        "CGNX" => Some(build(&[
            ("2024-01-02", "41.00"),
            ("2024-01-03", "40.00"),
            ("2024-01-04", "39.50"),
        ])),
        "TER" => Some(build(&[
            ("2024-01-02", "101.00"),
            ("2024-01-03", "102.00"),
            ("2024-01-04", "103.00"),
        ])),
        "ROBO" => Some(build(&[
            ("2024-01-02", "55.00"),
            ("2024-01-03", "56.00"),
            ("2024-01-04", "57.00"),
        ])),
        "BOTZ" => Some(build(&[
            ("2024-01-02", "30.00"),
            ("2024-01-03", "31.00"),
            ("2024-01-04", "30.50"),
        ])),
        "ARBE" => Some(build(&[
            ("2024-01-02", "2.10"),
            ("2024-01-03", "2.00"),
            ("2024-01-04", "1.90"),
        ])),
        "NOQUOTE" => Some(build(&[
            ("2024-01-02", "95.00"),
            ("2024-01-03", "100.00"),
            ("2024-01-04", "102.00"),
        ])),
        "NOLIVE" => Some(build(&[
            ("2024-01-02", "45.00"),
            ("2024-01-03", "50.00"),
            ("2024-01-04", "51.00"),
        ])),
        // Previous close of exactly zero: percent change must stay absent.
        "ZERO" => Some(build(&[("2024-01-03", "0.00"), ("2024-01-04", "5.00")])),
        // A single bar: no previous close derivable.
        "THIN" => Some(build(&[("2024-01-04", "12.00")])),
        _ => None,
    }
}

fn price(s: &str) -> Decimal {
    Decimal::from_str(s).expect("fixture price literal")
}

fn build(rows: &[(&str, &str)]) -> History {
    let candles = rows
        .iter()
        .map(|(date, close)| {
            let c = price(close);
            Candle {
                ts: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .expect("fixture date literal")
                    .and_hms_opt(0, 0, 0)
                    .expect("midnight is valid")
                    .and_utc(),
                open: c,
                high: c,
                low: c,
                close: c,
                volume: Some(1_000_000),
            }
        })
        .collect();
    History { candles }
}
