//! Pure derivations over fetched market data.
//!
//! These functions never fail: an undefined metric (too little history, zero
//! or missing previous close) is `None`, which downstream renders as a blank
//! cell rather than a zero.

use rust_decimal::Decimal;

use roboscreen_types::History;

/// Previous close derived from a trailing daily history window.
///
/// The previous close is the second-most-recent close, i.e. the close of the
/// bar before the most recent one. Returns `None` when fewer than two bars
/// are available.
#[must_use]
pub fn previous_close(history: &History) -> Option<Decimal> {
    let closes = history.closes();
    if closes.len() < 2 {
        return None;
    }
    closes.get(closes.len() - 2).copied()
}

/// Percent change of `live` against `prev`: `(live - prev) / prev * 100`.
///
/// `None` when either operand is absent or `prev` is zero; the division is
/// undefined there and must not surface as zero or infinity.
#[must_use]
pub fn percent_change(prev: Option<Decimal>, live: Option<Decimal>) -> Option<Decimal> {
    let (prev, live) = (prev?, live?);
    if prev.is_zero() {
        return None;
    }
    Some((live - prev) / prev * Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use roboscreen_types::{Candle, round_display};
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn history(closes: &[&str]) -> History {
        History {
            candles: closes
                .iter()
                .enumerate()
                .map(|(i, c)| Candle {
                    ts: DateTime::from_timestamp(86_400 * i as i64, 0).unwrap(),
                    open: d(c),
                    high: d(c),
                    low: d(c),
                    close: d(c),
                    volume: Some(1_000),
                })
                .collect(),
        }
    }

    #[test]
    fn previous_close_is_second_most_recent() {
        let h = history(&["490.00", "500.00", "505.00"]);
        assert_eq!(previous_close(&h), Some(d("500.00")));
    }

    #[test]
    fn previous_close_needs_two_bars() {
        assert_eq!(previous_close(&history(&["505.00"])), None);
        assert_eq!(previous_close(&History::default()), None);
    }

    #[test]
    fn percent_change_basic() {
        let pct = percent_change(Some(d("500.00")), Some(d("510.00"))).map(round_display);
        assert_eq!(pct, Some(d("2.00")));
    }

    #[test]
    fn percent_change_negative() {
        let pct = percent_change(Some(d("200.00")), Some(d("150.00"))).map(round_display);
        assert_eq!(pct, Some(d("-25.00")));
    }

    #[test]
    fn percent_change_undefined_cases() {
        assert_eq!(percent_change(None, Some(d("1"))), None);
        assert_eq!(percent_change(Some(d("1")), None), None);
        assert_eq!(percent_change(Some(Decimal::ZERO), Some(d("1"))), None);
    }
}
