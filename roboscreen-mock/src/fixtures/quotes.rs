use std::str::FromStr;

use roboscreen_core::{Quote, Symbol};
use rust_decimal::Decimal;

pub fn by_symbol(s: &str) -> Option<Quote> {
    match s {
        "ISRG" => Some(q(s, "Intuitive Surgical", "510.00", "505.00")),
        "NVDA" => Some(q(s, "NVIDIA Corp", "1010.00", "1000.00")),
        "CGNX" => Some(q(s, "Cognex Corp", "38.75", "39.50")),
        "TER" => Some(q(s, "Teradyne Inc", "104.20", "103.00")),
        "ROBO" => Some(q(s, "ROBO Global Robotics ETF", "57.25", "57.00")),
        "BOTZ" => Some(q(s, "Global X Robotics & AI ETF", "30.10", "30.50")),
        "ARBE" => Some(q(s, "Arbe Robotics", "1.85", "1.90")),
        "ZERO" => Some(q(s, "Zero Previous Close", "5.25", "5.00")),
        "THIN" => Some(q(s, "Thin History", "12.40", "12.00")),
        // "NOQUOTE" and "NOLIVE" intentionally absent: the real-time quote
        // interface has nothing for them.
        _ => None,
    }
}

fn q(sym: &str, name: &str, px: &str, prev: &str) -> Quote {
    Quote {
        symbol: Symbol::new(sym),
        shortname: Some(name.to_string()),
        price: Some(Decimal::from_str(px).expect("fixture price literal")),
        previous_close: Some(Decimal::from_str(prev).expect("fixture price literal")),
    }
}
