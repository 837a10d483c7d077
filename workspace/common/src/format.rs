//! Display helpers for money, dates and countdowns.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::feed::parse_timestamp;

/// Symbol for an ISO currency code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> &str {
    match rusty_money::iso::find(code) {
        Some(currency) => currency.symbol,
        None => code,
    }
}

/// `symbol + |amount|` with two decimals, e.g. `€12.50`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{}{:.2}", currency_symbol(currency), amount.abs())
}

pub fn euros(amount: Decimal) -> String {
    format_currency(amount, "EUR")
}

/// Whole euros, half rounded away from zero, e.g. `€143`.
pub fn whole_euros(amount: Decimal) -> String {
    format!(
        "€{}",
        amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Signed euro amount with an explicit `+` for non-negative values.
pub fn signed_euros(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-€{:.2}", amount.abs())
    } else {
        format!("+€{:.2}", amount)
    }
}

/// Parses a typed money amount; only strictly positive values are accepted.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    input
        .trim()
        .parse::<Decimal>()
        .ok()
        .filter(|amount| amount.is_sign_positive() && !amount.is_zero())
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// `"Today, 3:45 PM"`, `"Yesterday, 9:05 AM"`, `"3 days ago"` or `"Oct 3"`.
pub fn format_relative(raw: &str, now: NaiveDateTime) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let elapsed_days = (now - at).num_days();
    match elapsed_days {
        0 => format!("Today, {}", clock_12h(at.time())),
        1 => format!("Yesterday, {}", clock_12h(at.time())),
        2..=6 => format!("{} days ago", elapsed_days),
        _ => short_date(at.date()),
    }
}

/// `"Oct 3"`
pub fn short_date(day: NaiveDate) -> String {
    day.format("%b %-d").to_string()
}

/// 24h clock used in transaction rows, e.g. `"09:15"`.
pub fn clock_24h(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn clock_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Countdown to the end of the local day, e.g. `"6h 12m until reset"`.
pub fn time_until_reset(now: NaiveDateTime) -> String {
    let end_of_day = now
        .date()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or(now);
    let left = (end_of_day - now).max(Duration::zero());
    let hours = left.num_hours();
    let minutes = (left - Duration::hours(hours)).num_minutes();
    format!("{}h {}m until reset", hours, minutes)
}

/// Upper-cases the first character, `"coffee"` -> `"Coffee"`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        raw.parse().unwrap()
    }

    #[test]
    fn test_format_currency_known_symbols() {
        let amount = Decimal::new(-1250, 2);
        assert_eq!(format_currency(amount, "EUR"), "€12.50");
        assert_eq!(format_currency(amount, "GBP"), "£12.50");
        assert_eq!(format_currency(amount, "USD"), "$12.50");
        assert_eq!(format_currency(amount, "INR"), "₹12.50");
    }

    #[test]
    fn test_format_currency_unknown_code() {
        assert_eq!(format_currency(Decimal::new(3, 0), "XYZ1"), "XYZ13.00");
    }

    #[test]
    fn test_whole_euros_rounds_half_up() {
        assert_eq!(whole_euros(Decimal::new(1425, 1)), "€143");
        assert_eq!(whole_euros(Decimal::new(1424, 1)), "€142");
    }

    #[test]
    fn test_signed_euros() {
        assert_eq!(signed_euros(Decimal::new(525, 2)), "+€5.25");
        assert_eq!(signed_euros(Decimal::new(-4, 0)), "-€4.00");
        assert_eq!(signed_euros(Decimal::ZERO), "+€0.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.4, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.3, 0.0, 1.0), 0.3);
    }

    #[test]
    fn test_format_relative_buckets() {
        let now = at("2025-02-10T15:00:00");
        assert_eq!(format_relative("2025-02-10T09:05:00", now), "Today, 9:05 AM");
        assert_eq!(format_relative("2025-02-09T14:30:00", now), "Yesterday, 2:30 PM");
        assert_eq!(format_relative("2025-02-07T10:00:00", now), "3 days ago");
        assert_eq!(format_relative("2025-01-03T10:00:00", now), "Jan 3");
    }

    #[test]
    fn test_format_relative_unparseable_passthrough() {
        let now = at("2025-02-10T15:00:00");
        assert_eq!(format_relative("last week", now), "last week");
    }

    #[test]
    fn test_time_until_reset() {
        assert_eq!(time_until_reset(at("2025-02-10T17:47:30")), "6h 12m until reset");
        assert_eq!(time_until_reset(at("2025-02-10T23:59:59")), "0h 0m until reset");
    }

    #[test]
    fn test_clock_24h() {
        assert_eq!(clock_24h("2025-02-10T09:15:42.123456"), "09:15");
        assert_eq!(clock_24h("garbage"), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("coffee"), "Coffee");
        assert_eq!(capitalize(""), "");
    }
}
