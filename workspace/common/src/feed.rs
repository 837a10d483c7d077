//! Date bucketing and spending summary for the transaction feed.
//!
//! Every function takes the current local wall-clock time explicitly so the
//! result depends only on its inputs.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::TransactionDto;
use crate::format::short_date;

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";

/// Filter pills shown above the feed, after "All".
pub const FILTER_CATEGORIES: [&str; 6] = [
    "coffee",
    "food",
    "groceries",
    "transport",
    "shopping",
    "entertainment",
];

/// Categories offered when logging an expense by hand: (value, label).
pub const EXPENSE_CATEGORIES: [(&str, &str); 6] = [
    ("coffee", "☕ Coffee"),
    ("food", "🍕 Food"),
    ("transport", "🚗 Transport"),
    ("groceries", "🛒 Groceries"),
    ("entertainment", "🎮 Fun"),
    ("school", "📚 School"),
];

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "coffee" => "☕",
        "food" => "🍕",
        "groceries" => "🛒",
        "transport" => "🚗",
        "shopping" => "🛍️",
        "entertainment" => "🎮",
        "school" => "📚",
        _ => "",
    }
}

/// Parses the backend's ISO-ish timestamps into local wall-clock time.
///
/// Accepts naive `YYYY-MM-DDTHH:MM:SS[.ffffff]`, space separated variants,
/// bare dates (local midnight) and RFC 3339 strings with an offset, which are
/// shifted into the runtime's local timezone.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(at) = raw.parse::<NaiveDateTime>() {
        return Some(at);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Local).naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(at);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

/// Local calendar day of a transaction timestamp.
pub fn local_day(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|at| at.date())
}

/// Header label for a calendar day relative to `today`.
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        return TODAY.to_string();
    }
    if today.pred_opt() == Some(day) {
        return YESTERDAY.to_string();
    }
    let days_back = (today - day).num_days();
    if (2..7).contains(&days_back) {
        format!("{} days ago", days_back)
    } else {
        short_date(day)
    }
}

/// One date header and the transactions under it, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionGroup<'a> {
    pub label: String,
    pub transactions: Vec<&'a TransactionDto>,
}

impl TransactionGroup<'_> {
    /// Sum of spent magnitudes in this group.
    pub fn subtotal(&self) -> Decimal {
        self.transactions.iter().map(|tx| tx.amount.abs()).sum()
    }
}

/// Groups transactions under Today/Yesterday/date labels.
///
/// Groups are emitted in the order their label is first seen; transactions
/// keep their input order within a group. A timestamp that cannot be parsed is
/// grouped under its raw text so nothing is dropped.
pub fn group_by_day<'a, I>(transactions: I, now: NaiveDateTime) -> Vec<TransactionGroup<'a>>
where
    I: IntoIterator<Item = &'a TransactionDto>,
{
    let today = now.date();
    let mut groups: Vec<TransactionGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        let label = match local_day(&tx.date) {
            Some(day) => day_label(day, today),
            None => {
                tracing::debug!("Unparseable transaction date {:?} on {}", tx.date, tx.id);
                tx.date.clone()
            }
        };

        match index.get(&label) {
            Some(&position) => groups[position].transactions.push(tx),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(TransactionGroup {
                    label,
                    transactions: vec![tx],
                });
            }
        }
    }

    groups
}

/// Transactions matching the selected category pill; `None` means "All".
pub fn filter_by_category<'a>(
    transactions: &'a [TransactionDto],
    category: Option<&str>,
) -> Vec<&'a TransactionDto> {
    transactions
        .iter()
        .filter(|tx| category.is_none_or(|wanted| tx.category == wanted))
        .collect()
}

/// Sum of spent magnitudes for transactions on `now`'s calendar day.
pub fn today_total(transactions: &[TransactionDto], now: NaiveDateTime) -> Decimal {
    let today = now.date();
    transactions
        .iter()
        .filter(|tx| local_day(&tx.date) == Some(today))
        .map(|tx| tx.amount.abs())
        .sum()
}

/// Sum of spent magnitudes over the trailing 7x24h window.
pub fn week_total(transactions: &[TransactionDto], now: NaiveDateTime) -> Decimal {
    let cutoff = now - Duration::days(7);
    transactions
        .iter()
        .filter(|tx| parse_timestamp(&tx.date).is_some_and(|at| at > cutoff))
        .map(|tx| tx.amount.abs())
        .sum()
}

/// Most frequent category. On a tie the category seen first wins.
pub fn top_category(transactions: &[TransactionDto]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tx in transactions {
        match counts.iter_mut().find(|(category, _)| *category == tx.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((tx.category.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}

/// Header figures of the feed, always computed over the unfiltered list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSummary {
    pub today_total: Decimal,
    pub week_total: Decimal,
    pub count: usize,
    pub top_category: Option<String>,
}

impl FeedSummary {
    pub fn compute(transactions: &[TransactionDto], now: NaiveDateTime) -> Self {
        Self {
            today_total: today_total(transactions, now),
            week_total: week_total(transactions, now),
            count: transactions.len(),
            top_category: top_category(transactions).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionKind;

    fn tx(id: &str, merchant: &str, category: &str, cents: i64, date: &str) -> TransactionDto {
        TransactionDto {
            id: id.to_string(),
            merchant: merchant.to_string(),
            icon: String::new(),
            category: category.to_string(),
            amount: Decimal::new(cents, 2),
            currency: "EUR".to_string(),
            date: date.to_string(),
            ai_roast: String::new(),
            roast_emoji: String::new(),
            kind: TransactionKind::Neutral,
            perk_missed: None,
        }
    }

    fn now() -> NaiveDateTime {
        "2025-02-10T14:30:00".parse().unwrap()
    }

    #[test]
    fn test_today_and_yesterday_scenario() {
        let txs = vec![
            tx("1", "Tesco", "groceries", -1250, "2025-02-10T09:15:00"),
            tx("2", "Luas", "transport", -320, "2025-02-09T18:40:00"),
        ];

        let groups = group_by_day(&txs, now());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, TODAY);
        assert_eq!(groups[0].transactions[0].merchant, "Tesco");
        assert_eq!(groups[0].subtotal(), Decimal::new(1250, 2));
        assert_eq!(groups[1].label, YESTERDAY);
        assert_eq!(groups[1].subtotal(), Decimal::new(320, 2));
        assert_eq!(week_total(&txs, now()), Decimal::new(1570, 2));
    }

    #[test]
    fn test_midnight_is_today() {
        let txs = vec![tx("1", "Spar", "food", -500, "2025-02-10T00:00:00")];
        let groups = group_by_day(&txs, now());
        assert_eq!(groups[0].label, TODAY);
    }

    #[test]
    fn test_groups_partition_input_in_order() {
        let txs = vec![
            tx("a", "A", "food", -100, "2025-02-10T12:00:00"),
            tx("b", "B", "food", -200, "2025-02-08T12:00:00"),
            tx("c", "C", "food", -300, "2025-02-10T08:00:00"),
            tx("d", "D", "food", -400, "2025-01-02T08:00:00"),
            tx("e", "E", "food", -500, "2025-02-08T09:00:00"),
        ];

        let groups = group_by_day(&txs, now());
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec![TODAY, "2 days ago", "Jan 2"]);

        let flattened: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.transactions.iter().map(|t| t.id.as_str()))
            .collect();
        assert_eq!(flattened, vec!["a", "c", "b", "e", "d"]);
        assert_eq!(flattened.len(), txs.len());
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_day(&[], now()).is_empty());
    }

    #[test]
    fn test_unparseable_date_kept_under_raw_label() {
        let txs = vec![tx("1", "Mystery", "food", -100, "sometime")];
        let groups = group_by_day(&txs, now());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "sometime");
    }

    #[test]
    fn test_today_total_ignores_category_filter() {
        let txs = vec![
            tx("1", "Costa", "coffee", -350, "2025-02-10T08:00:00"),
            tx("2", "Tesco", "groceries", -1250, "2025-02-10T09:00:00"),
            tx("3", "Dunnes", "groceries", -900, "2025-02-07T09:00:00"),
        ];

        let filtered = filter_by_category(&txs, Some("coffee"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(today_total(&txs, now()), Decimal::new(1600, 2));
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let txs = vec![
            tx("1", "Costa", "coffee", -350, "2025-02-10T08:00:00"),
            tx("2", "Luas", "transport", -200, "2025-02-10T09:00:00"),
        ];
        assert_eq!(filter_by_category(&txs, None).len(), 2);
    }

    #[test]
    fn test_week_window_is_trailing_seven_days() {
        let txs = vec![
            tx("1", "In", "food", -100, "2025-02-03T14:30:01"),
            tx("2", "Edge", "food", -200, "2025-02-03T14:30:00"),
            tx("3", "Out", "food", -400, "2025-02-01T10:00:00"),
        ];
        assert_eq!(week_total(&txs, now()), Decimal::new(100, 2));
    }

    #[test]
    fn test_top_category_tie_goes_to_first_seen() {
        let txs = vec![
            tx("1", "A", "food", -100, "2025-02-10T08:00:00"),
            tx("2", "B", "coffee", -100, "2025-02-10T08:00:00"),
            tx("3", "C", "coffee", -100, "2025-02-10T08:00:00"),
            tx("4", "D", "food", -100, "2025-02-10T08:00:00"),
        ];
        assert_eq!(top_category(&txs), Some("food"));
        assert_eq!(top_category(&[]), None);
    }

    #[test]
    fn test_summary_counts_unfiltered_list() {
        let txs = vec![
            tx("1", "Costa", "coffee", -350, "2025-02-10T08:00:00"),
            tx("2", "Costa", "coffee", -350, "2025-02-09T08:00:00"),
        ];
        let summary = FeedSummary::compute(&txs, now());
        assert_eq!(summary.count, 2);
        assert_eq!(summary.today_total, Decimal::new(350, 2));
        assert_eq!(summary.top_category.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-02-10T09:15:00.123456").is_some());
        assert!(parse_timestamp("2025-02-10 09:15").is_some());
        assert_eq!(
            parse_timestamp("2025-02-10"),
            NaiveDate::from_ymd_opt(2025, 2, 10).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_day_label_older_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        assert_eq!(day_label(NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(), today), "6 days ago");
        assert_eq!(day_label(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(), today), "Feb 3");
    }
}
