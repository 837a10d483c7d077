//! Currency conversion helpers for the FX page.

use crate::{AlertTone, FxData};

pub const DEFAULT_HOME_AMOUNT: &str = "10000";

/// Converts a typed home-currency amount at `rate`; blank or invalid input counts as zero.
pub fn convert(input: &str, rate: f64) -> f64 {
    let amount: f64 = input.trim().parse().unwrap_or(0.0);
    if amount.is_finite() { amount * rate } else { 0.0 }
}

/// Percent move of the current rate against the oldest historical point.
pub fn rate_change_percent(data: &FxData) -> f64 {
    let oldest = data
        .historical_rates
        .first()
        .map(|point| point.rate)
        .unwrap_or(data.current_rate);
    if oldest > 0.0 {
        (data.current_rate - oldest) / oldest * 100.0
    } else {
        0.0
    }
}

/// `"+1.2%"` / `"-0.4%"`
pub fn format_change(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{:.1}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// Chart axis label, `"2025-02-10"` -> `"02-10"`.
pub fn chart_label(date: &str) -> &str {
    date.get(5..).unwrap_or(date)
}

pub fn alert_variant(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Good => "success",
        AlertTone::Bad => "danger",
        AlertTone::Neutral => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoricalRate;

    fn fx(current: f64, history: &[f64]) -> FxData {
        FxData {
            base_currency: "INR".to_string(),
            target_currency: "EUR".to_string(),
            current_rate: current,
            historical_rates: history
                .iter()
                .enumerate()
                .map(|(day, rate)| HistoricalRate {
                    date: format!("2025-02-{:02}", day + 1),
                    rate: *rate,
                })
                .collect(),
            alerts: vec![],
            best_time_to_transfer: String::new(),
            last_updated: String::new(),
        }
    }

    #[test]
    fn test_convert() {
        assert!((convert("10000", 0.011) - 110.0).abs() < 1e-9);
        assert_eq!(convert("", 0.011), 0.0);
        assert_eq!(convert("abc", 0.011), 0.0);
    }

    #[test]
    fn test_rate_change_against_first_point() {
        let data = fx(0.0110, &[0.0100, 0.0105]);
        assert!((rate_change_percent(&data) - 10.0).abs() < 1e-9);
        assert_eq!(format_change(rate_change_percent(&data)), "+10.0%");
    }

    #[test]
    fn test_rate_change_without_history_is_flat() {
        assert_eq!(rate_change_percent(&fx(0.011, &[])), 0.0);
        assert_eq!(format_change(-0.42), "-0.4%");
    }

    #[test]
    fn test_chart_label_and_alert_variant() {
        assert_eq!(chart_label("2025-02-10"), "02-10");
        assert_eq!(chart_label("bad"), "bad");
        assert_eq!(alert_variant(AlertTone::Bad), "danger");
    }
}
