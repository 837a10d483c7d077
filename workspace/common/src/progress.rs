//! Budget ratios, gauge geometry, missions, milestones and reward affordability.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::format::clamp;
use crate::{Budget, CoinHistoryEntry, RewardCategory, Runway, ShopReward, SurvivalMission};

/// Colour bucket shared by the vibe badge, the gauge and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// Percent scale: above 50 is healthy, above 25 is a warning.
    pub fn from_percent(percent: f64) -> Self {
        if percent > 50.0 {
            Tone::Success
        } else if percent > 25.0 {
            Tone::Warning
        } else {
            Tone::Danger
        }
    }

    pub fn from_fraction(fraction: f64) -> Self {
        Self::from_percent(fraction * 100.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }
}

fn ratio(numerator: Decimal, denominator: Decimal) -> f64 {
    (numerator / denominator).to_f64().unwrap_or_default()
}

/// Safe-to-spend as a share of the unlocked balance, 0 when nothing is unlocked.
pub fn gauge_fraction(budget: &Budget, runway: &Runway) -> f64 {
    let max_safe = budget.total_balance - runway.locked_total;
    if max_safe > Decimal::ZERO {
        ratio(runway.safe_to_spend, max_safe)
    } else {
        0.0
    }
}

/// Share of today's budget still unspent, as a percent. May go negative.
pub fn burn_percent(budget: &Budget) -> f64 {
    if budget.daily_budget > Decimal::ZERO {
        ratio(budget.daily_budget - budget.spent_today, budget.daily_budget) * 100.0
    } else {
        0.0
    }
}

pub fn remaining_today(budget: &Budget) -> Decimal {
    budget.daily_budget - budget.spent_today
}

pub const GAUGE_ARC_LENGTH: f64 = 251.0;

/// Needle and arc geometry of the half-circle fuel gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub fraction: f64,
    pub needle_degrees: f64,
    pub dash_offset: f64,
    pub tone: Tone,
}

impl GaugeGeometry {
    pub fn new(value: f64) -> Self {
        let fraction = if value.is_finite() { clamp(value, 0.0, 1.0) } else { 0.0 };
        Self {
            fraction,
            needle_degrees: -90.0 + fraction * 180.0,
            dash_offset: GAUGE_ARC_LENGTH - GAUGE_ARC_LENGTH * fraction,
            tone: Tone::from_fraction(fraction),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub title: &'static str,
    pub savings: u32,
}

/// Static ideas shown under "Fix It" on the dashboard.
pub const FIX_IT_SUGGESTIONS: [Suggestion; 4] = [
    Suggestion { icon: "☕", title: "Skip 3 coffees this week", savings: 18 },
    Suggestion { icon: "🚗", title: "Take the bus instead of Uber", savings: 25 },
    Suggestion { icon: "🍕", title: "Cook 2 more meals at home", savings: 20 },
    Suggestion { icon: "🎓", title: "Use student discounts everywhere", savings: 15 },
];

// ===================== Missions & milestones =====================

pub fn completed_count(missions: &[SurvivalMission]) -> usize {
    missions.iter().filter(|m| m.completed).count()
}

pub fn all_complete(missions: &[SurvivalMission]) -> bool {
    !missions.is_empty() && completed_count(missions) == missions.len()
}

/// Coins collected from completed missions.
pub fn coins_earned(missions: &[SurvivalMission]) -> i64 {
    missions
        .iter()
        .filter(|m| m.completed)
        .map(SurvivalMission::reward_coins)
        .sum()
}

pub fn total_xp(missions: &[SurvivalMission]) -> i64 {
    missions.iter().filter(|m| m.completed).map(|m| m.xp).sum()
}

/// Percent of the way to a milestone, capped at 100.
pub fn milestone_progress(current_streak: u32, milestone_days: u32) -> f64 {
    if milestone_days == 0 {
        return 100.0;
    }
    (f64::from(current_streak) / f64::from(milestone_days) * 100.0).min(100.0)
}

// ===================== Rewards shop =====================

pub const HISTORY_PREVIEW: usize = 15;

/// What the buy button shows for a reward given the current balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardState {
    Purchased,
    OutOfStock,
    Affordable,
    TooExpensive { short_by: i64 },
}

impl RewardState {
    pub fn of(reward: &ShopReward, balance: i64) -> Self {
        if reward.purchased {
            RewardState::Purchased
        } else if reward.stock.is_some_and(|left| left <= 0) {
            RewardState::OutOfStock
        } else if balance >= reward.cost {
            RewardState::Affordable
        } else {
            RewardState::TooExpensive {
                short_by: reward.cost - balance,
            }
        }
    }

    pub fn can_buy(&self) -> bool {
        matches!(self, RewardState::Affordable)
    }

    pub fn button_label(&self) -> String {
        match self {
            RewardState::Purchased => "Redeemed".to_string(),
            RewardState::OutOfStock => "Sold Out".to_string(),
            RewardState::Affordable => "Redeem".to_string(),
            RewardState::TooExpensive { short_by } => format!("Need {} more", short_by),
        }
    }
}

/// `None` keeps every reward.
pub fn filter_rewards(rewards: &[ShopReward], category: Option<RewardCategory>) -> Vec<&ShopReward> {
    rewards
        .iter()
        .filter(|r| category.is_none_or(|wanted| r.category == wanted))
        .collect()
}

pub fn purchased_count(rewards: &[ShopReward]) -> usize {
    rewards.iter().filter(|r| r.purchased).count()
}

pub fn history_preview(history: &[CoinHistoryEntry]) -> &[CoinHistoryEntry] {
    &history[..history.len().min(HISTORY_PREVIEW)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoinEntryKind;

    fn budget(total: i64, daily: i64, spent: i64) -> Budget {
        Budget {
            total_balance: Decimal::from(total),
            locked_funds: vec![],
            daily_budget: Decimal::from(daily),
            spent_today: Decimal::from(spent),
            ghost_items: vec![],
        }
    }

    fn runway(safe: i64, locked: i64) -> Runway {
        Runway {
            days_left: 12,
            broke_date: "2025-03-01".to_string(),
            next_loan_date: "2025-03-15".to_string(),
            gap_days: 14,
            daily_avg_spend: Decimal::from(30),
            safe_to_spend: Decimal::from(safe),
            locked_total: Decimal::from(locked),
            ghost_total: Decimal::ZERO,
            avg_burn_per_hour: Decimal::ONE,
            saved_vs_avg: Decimal::ZERO,
            weekly_saved: Decimal::ZERO,
        }
    }

    fn mission(id: &str, xp: i64, coins: Option<i64>, completed: bool) -> SurvivalMission {
        SurvivalMission {
            id: id.to_string(),
            title: format!("Mission {}", id),
            xp,
            coins,
            completed,
        }
    }

    fn reward(cost: i64, stock: Option<i64>, purchased: bool) -> ShopReward {
        ShopReward {
            id: "r1".to_string(),
            name: "Free coffee".to_string(),
            description: String::new(),
            emoji: "☕".to_string(),
            cost,
            category: RewardCategory::Coupon,
            stock,
            purchased,
            purchased_at: None,
        }
    }

    #[test]
    fn test_gauge_fraction() {
        assert_eq!(gauge_fraction(&budget(1000, 35, 0), &runway(400, 200)), 0.5);
        assert_eq!(gauge_fraction(&budget(200, 35, 0), &runway(400, 200)), 0.0);
    }

    #[test]
    fn test_burn_percent() {
        assert_eq!(burn_percent(&budget(0, 40, 10)), 75.0);
        assert_eq!(burn_percent(&budget(0, 0, 10)), 0.0);
        assert_eq!(burn_percent(&budget(0, 20, 30)), -50.0);
        assert_eq!(remaining_today(&budget(0, 20, 30)), Decimal::from(-10));
    }

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(Tone::from_percent(51.0), Tone::Success);
        assert_eq!(Tone::from_percent(50.0), Tone::Warning);
        assert_eq!(Tone::from_percent(25.0), Tone::Danger);
        assert_eq!(Tone::from_fraction(0.3), Tone::Warning);
    }

    #[test]
    fn test_gauge_geometry_clamps() {
        let full = GaugeGeometry::new(1.7);
        assert_eq!(full.fraction, 1.0);
        assert_eq!(full.needle_degrees, 90.0);
        assert_eq!(full.dash_offset, 0.0);

        let empty = GaugeGeometry::new(f64::NAN);
        assert_eq!(empty.needle_degrees, -90.0);
        assert_eq!(empty.dash_offset, GAUGE_ARC_LENGTH);
        assert_eq!(empty.tone, Tone::Danger);
    }

    #[test]
    fn test_mission_totals() {
        let missions = vec![
            mission("a", 20, Some(5), true),
            mission("b", 30, None, true),
            mission("c", 50, Some(10), false),
        ];
        assert_eq!(completed_count(&missions), 2);
        assert_eq!(coins_earned(&missions), 35);
        assert_eq!(total_xp(&missions), 50);
        assert!(!all_complete(&missions));
        assert!(!all_complete(&[]));
    }

    #[test]
    fn test_milestone_progress_caps() {
        assert_eq!(milestone_progress(7, 14), 50.0);
        assert_eq!(milestone_progress(30, 14), 100.0);
    }

    #[test]
    fn test_reward_state() {
        assert_eq!(RewardState::of(&reward(100, None, true), 500), RewardState::Purchased);
        assert_eq!(RewardState::of(&reward(100, Some(0), false), 500), RewardState::OutOfStock);
        assert_eq!(RewardState::of(&reward(100, Some(3), false), 100), RewardState::Affordable);

        let short = RewardState::of(&reward(500, None, false), 120);
        assert_eq!(short, RewardState::TooExpensive { short_by: 380 });
        assert_eq!(short.button_label(), "Need 380 more");
        assert!(!short.can_buy());
    }

    #[test]
    fn test_filter_rewards_by_category() {
        let mut badge = reward(10, None, false);
        badge.category = RewardCategory::Badge;
        let rewards = vec![reward(10, None, false), badge];

        assert_eq!(filter_rewards(&rewards, None).len(), 2);
        let badges = filter_rewards(&rewards, Some(RewardCategory::Badge));
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].category, RewardCategory::Badge);
    }

    #[test]
    fn test_history_preview_caps_at_fifteen() {
        let history: Vec<CoinHistoryEntry> = (0..20)
            .map(|n| CoinHistoryEntry {
                id: n.to_string(),
                kind: CoinEntryKind::Earned,
                amount: 5,
                source: "mission".to_string(),
                label: "Mission".to_string(),
                date: "2025-02-10".to_string(),
            })
            .collect();
        assert_eq!(history_preview(&history).len(), 15);
        assert_eq!(history_preview(&history[..3]).len(), 3);
    }
}
