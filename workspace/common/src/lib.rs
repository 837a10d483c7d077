//! Common transport-layer types shared by the Stash frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes,
//! plus the pure derivations the pages compute over fetched data.

pub mod chat;
pub mod feed;
pub mod format;
pub mod fx;
pub mod grocery;
pub mod listings;
pub mod markup;
pub mod progress;
pub mod receipt;
pub mod squad;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error body some endpoints answer with on a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First human-readable message the server provided, if any.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.detail.as_deref())
            .or(self.message.as_deref())
    }
}

/// Generic `{success, message}` acknowledgement returned by fire-and-forget mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ===================== Dashboard =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub home_currency: String,
    #[serde(default)]
    pub host_currency: String,
    #[serde(default)]
    pub monthly_budget: Decimal,
    #[serde(default)]
    pub loan_date: String,
    #[serde(default)]
    pub university: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LockedFund {
    pub name: String,
    pub emoji: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GhostLock {
    Phrase,
    Buddy,
    #[default]
    #[serde(other)]
    Date,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GhostItem {
    pub purpose: String,
    pub emoji: String,
    pub amount: Decimal,
    #[serde(default)]
    pub unlock_date: String,
    #[serde(default)]
    pub lock_type: GhostLock,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub total_balance: Decimal,
    #[serde(default)]
    pub locked_funds: Vec<LockedFund>,
    pub daily_budget: Decimal,
    pub spent_today: Decimal,
    #[serde(default)]
    pub ghost_items: Vec<GhostItem>,
}

/// Server-side runway prediction. Only displayed, never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Runway {
    pub days_left: i64,
    pub broke_date: String,
    pub next_loan_date: String,
    pub gap_days: i64,
    pub daily_avg_spend: Decimal,
    pub safe_to_spend: Decimal,
    pub locked_total: Decimal,
    pub ghost_total: Decimal,
    pub avg_burn_per_hour: Decimal,
    pub saved_vs_avg: Decimal,
    #[serde(default)]
    pub weekly_saved: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vibe {
    pub emoji: String,
    pub status: String,
    pub insight: String,
    pub percent_remaining: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreakSummary {
    pub days: u32,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub user: UserProfile,
    pub budget: Budget,
    pub greeting: String,
    #[serde(default)]
    pub coins: i64,
    pub runway: Runway,
    pub vibe: Vibe,
    pub streak: StreakSummary,
}

// ===================== Transactions =====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Roast,
    Praise,
    Warning,
    PerkAvailable,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissedPerk {
    pub discount: String,
    pub brand: String,
    pub code: String,
    pub saved_amount: Decimal,
}

/// A logged expense as returned by `GET /transactions`.
/// `amount` is negative for money going out; views always display its magnitude.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    pub id: String,
    #[serde(default)]
    pub merchant: String,
    #[serde(default)]
    pub icon: String,
    pub category: String,
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub date: String,
    #[serde(default)]
    pub ai_roast: String,
    #[serde(default)]
    pub roast_emoji: String,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
    #[serde(default)]
    pub perk_missed: Option<MissedPerk>,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// Request body for `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpenseRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedReceipt {
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// How the server read a receipt image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Ai,
    Ocr,
    #[default]
    #[serde(other)]
    Demo,
}

impl ScanMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ScanMethod::Ai => "AI Vision",
            ScanMethod::Ocr => "Local OCR",
            ScanMethod::Demo => "Demo Mode",
        }
    }
}

/// Response of `POST /expense/scan`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptScanResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub parsed: Option<ParsedReceipt>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub method: ScanMethod,
}

// ===================== Community =====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostIntent {
    Offering,
    Seeking,
    #[default]
    #[serde(other)]
    General,
}

impl PostIntent {
    pub const ALL: [PostIntent; 3] = [PostIntent::Offering, PostIntent::Seeking, PostIntent::General];

    /// Wire value, also used as the `intent` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostIntent::Offering => "OFFERING",
            PostIntent::Seeking => "SEEKING",
            PostIntent::General => "GENERAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostIntent::Offering => "Offering",
            PostIntent::Seeking => "Seeking",
            PostIntent::General => "General",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PostIntent::Offering => "🎁",
            PostIntent::Seeking => "🔍",
            PostIntent::General => "💬",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityComment {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub avatar: String,
    pub content: String,
    #[serde(default, rename = "isAI")]
    pub is_ai: Option<bool>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub avatar: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub intent: PostIntent,
    #[serde(default)]
    pub ai_match: Option<String>,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub comments: Vec<CommunityComment>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPostRequest {
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    pub intent: PostIntent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCommentRequest {
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VoteResponse {
    #[serde(default)]
    pub upvotes: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

// ===================== Squad =====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DebtDirection {
    OwesYou,
    YouOwe,
    #[default]
    #[serde(other)]
    Settled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    pub amount: Decimal,
    #[serde(default)]
    pub direction: DebtDirection,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub days_since: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadActivity {
    pub id: String,
    pub emoji: String,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadData {
    #[serde(default)]
    pub members: Vec<SquadMember>,
    #[serde(default)]
    pub activity: Vec<SquadActivity>,
}

/// Request body for `POST /squad/split`. Field names follow the backend's snake_case model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitRequest {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub member_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub per_person: Option<Decimal>,
    #[serde(default)]
    pub total_people: Option<u32>,
    #[serde(default)]
    pub activity: Option<SquadActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NudgeRequest {
    pub member_id: String,
}

/// `amount` of zero settles the full outstanding balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettleRequest {
    pub member_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

// ===================== Catalogs =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    pub id: String,
    pub brand: String,
    #[serde(default)]
    pub logo: String,
    pub deal: String,
    pub code: String,
    pub category: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_hot: Option<bool>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub near_you: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorePrice {
    pub store: String,
    pub price: Decimal,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub on_sale: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub stores: Vec<StorePrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalRate {
    pub date: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertTone {
    Good,
    Bad,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FxAlert {
    #[serde(rename = "type", default)]
    pub tone: AlertTone,
    pub message: String,
    #[serde(default)]
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxData {
    pub base_currency: String,
    pub target_currency: String,
    pub current_rate: f64,
    #[serde(default)]
    pub historical_rates: Vec<HistoricalRate>,
    #[serde(default)]
    pub alerts: Vec<FxAlert>,
    #[serde(default)]
    pub best_time_to_transfer: String,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListingType {
    Secondhand,
    StarterKit,
    Barter,
}

impl ListingType {
    pub const ALL: [ListingType; 3] = [ListingType::Secondhand, ListingType::StarterKit, ListingType::Barter];

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Secondhand => "Secondhand",
            ListingType::StarterKit => "Starter Kits",
            ListingType::Barter => "Barter",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub seller_rating: f64,
    #[serde(default)]
    pub distance: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
}

// ===================== Streaks & missions =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreakMilestone {
    pub days: u32,
    pub label: String,
    pub emoji: String,
    #[serde(default)]
    pub reward: String,
    #[serde(default)]
    pub achieved: bool,
    #[serde(default)]
    pub coins: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub today_under_budget: bool,
    #[serde(default)]
    pub milestones: Vec<StreakMilestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurvivalMission {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub coins: Option<i64>,
    #[serde(default)]
    pub completed: bool,
}

impl SurvivalMission {
    /// Coins a completed mission is worth; XP doubles as coins when unset.
    pub fn reward_coins(&self) -> i64 {
        self.coins.unwrap_or(self.xp)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissionToggleRequest {
    pub mission_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MissionToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub coins_earned: i64,
    #[serde(default)]
    pub new_balance: Option<i64>,
}

/// A streak milestone reward that can be claimed once achieved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreakReward {
    pub id: String,
    pub milestone: String,
    pub emoji: String,
    pub reward: String,
    pub days: u32,
    #[serde(default)]
    pub claimed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClaimResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reward: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ===================== Coins & rewards shop =====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoinEntryKind {
    Earned,
    Spent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinHistoryEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CoinEntryKind,
    pub amount: i64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinsData {
    pub balance: i64,
    #[serde(default)]
    pub lifetime: i64,
    #[serde(default)]
    pub history: Vec<CoinHistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CoinBalance {
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Coupon,
    App,
    Badge,
}

impl RewardCategory {
    pub const ALL: [RewardCategory; 3] = [RewardCategory::Coupon, RewardCategory::App, RewardCategory::Badge];

    pub fn label(&self) -> &'static str {
        match self {
            RewardCategory::Coupon => "Coupons",
            RewardCategory::App => "App Perks",
            RewardCategory::Badge => "Badges",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopReward {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    pub cost: i64,
    pub category: RewardCategory,
    /// `None` means unlimited stock.
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default)]
    pub purchased_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardsShopData {
    pub balance: i64,
    #[serde(default)]
    pub rewards: Vec<ShopReward>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRequest {
    pub reward_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reward: Option<ShopReward>,
    #[serde(default)]
    pub new_balance: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

// ===================== Profile =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileAchievement {
    pub id: String,
    pub emoji: String,
    pub label: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_saved: Decimal,
    pub avg_daily_spend: Decimal,
    pub budget_hit_rate: f64,
    pub longest_streak: u32,
    pub transaction_count: u32,
    #[serde(default)]
    pub top_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePreferences {
    #[serde(default)]
    pub notifications: bool,
    #[serde(default)]
    pub weekly_report: bool,
    #[serde(default)]
    pub roast_level: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub home_currency: String,
    #[serde(default)]
    pub host_currency: String,
    #[serde(default)]
    pub monthly_budget: Decimal,
    #[serde(default)]
    pub loan_date: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub year_of_study: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub joined_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub safe_to_spend: Decimal,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub achievements: Vec<ProfileAchievement>,
    pub stats: ProfileStats,
    pub preferences: ProfilePreferences,
}

// ===================== Assistant =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiInsight {
    pub emoji: String,
    pub title: String,
    pub text: String,
}

impl AiInsight {
    /// The single card shown when `/ai/insights` cannot be reached.
    pub fn unavailable() -> Self {
        Self {
            emoji: "🤖".to_string(),
            title: "AI unavailable".to_string(),
            text: "Could not load insights right now. Try refreshing!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiInsights {
    #[serde(default)]
    pub insights: Vec<AiInsight>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub feature: String,
}

impl AiInsights {
    /// Fallback payload used when the insight request fails.
    pub fn fallback(feature: &str) -> Self {
        Self {
            insights: vec![AiInsight::unavailable()],
            source: "fallback".to_string(),
            feature: feature.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_decodes_wire_shape() {
        let json = r#"{
            "id": "tx-1",
            "merchant": "Tesco",
            "icon": "🛒",
            "category": "groceries",
            "amount": -12.5,
            "currency": "EUR",
            "date": "2025-02-10T09:15:00",
            "aiRoast": "Solid choice.",
            "roastEmoji": "🤖",
            "type": "perk-available",
            "perkMissed": {"discount": "10%", "brand": "Tesco", "code": "STU10", "savedAmount": 1.25}
        }"#;

        let tx: TransactionDto = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, Decimal::new(-1250, 2));
        assert_eq!(tx.kind, TransactionKind::PerkAvailable);
        assert_eq!(tx.perk_missed.unwrap().saved_amount, Decimal::new(125, 2));
    }

    #[test]
    fn test_transaction_null_perk_and_unknown_type() {
        let json = r#"{"id":"tx-2","merchant":"Luas","category":"transport","amount":-3.2,
            "date":"2025-02-09T18:00:00","type":"mystery","perkMissed":null}"#;

        let tx: TransactionDto = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Neutral);
        assert!(tx.perk_missed.is_none());
        assert_eq!(tx.currency, "EUR");
    }

    #[test]
    fn test_unknown_ghost_lock_falls_back_to_date() {
        let json = r#"{"purpose":"Rent","emoji":"🏠","amount":400,"unlockDate":"2025-03-01","lockType":"retina"}"#;
        let item: GhostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.lock_type, GhostLock::Date);

        let json = r#"{"purpose":"Trip","emoji":"✈️","amount":90,"lockType":"buddy"}"#;
        let item: GhostItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.lock_type, GhostLock::Buddy);
        assert_eq!(serde_json::to_value(GhostLock::Phrase).unwrap(), serde_json::json!("phrase"));
    }

    #[test]
    fn test_transaction_kind_wire_values() {
        assert_eq!(
            serde_json::to_value(TransactionKind::PerkAvailable).unwrap(),
            serde_json::json!("perk-available")
        );
        let kind: TransactionKind = serde_json::from_str(r#""praise""#).unwrap();
        assert_eq!(kind, TransactionKind::Praise);
        let kind: TransactionKind = serde_json::from_str(r#""weird""#).unwrap();
        assert_eq!(kind, TransactionKind::Neutral);
    }

    #[test]
    fn test_new_expense_serializes_amount_as_number() {
        let request = NewExpenseRequest {
            amount: Decimal::new(450, 2),
            category: "coffee".to_string(),
            merchant: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], serde_json::json!(4.5));
        assert!(value.get("merchant").is_none());
    }

    #[test]
    fn test_split_request_uses_backend_field_names() {
        let request = SplitRequest {
            description: "Pizza".to_string(),
            total_amount: Decimal::new(30, 0),
            member_ids: vec!["m1".to_string()],
            paid_by: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["total_amount"], serde_json::json!(30.0));
        assert_eq!(value["member_ids"], serde_json::json!(["m1"]));
    }

    #[test]
    fn test_squad_member_settled_direction() {
        let json = r#"{"id":"m1","name":"Aoife","initials":"AO","amount":0,"direction":"settled","reason":"","daysSince":0}"#;
        let member: SquadMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.direction, DebtDirection::Settled);

        let json = r#"{"id":"m2","name":"Raj","amount":12.4,"direction":"owes-you"}"#;
        let member: SquadMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.direction, DebtDirection::OwesYou);
    }

    #[test]
    fn test_failed_purchase_response() {
        let json = r#"{"success": false, "message": "Not enough coins. Need 500, have 120"}"#;
        let response: PurchaseResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.reward.is_none());
        assert!(response.new_balance.is_none());
    }

    #[test]
    fn test_mission_toggle_null_balance() {
        let json = r#"{"success": true, "completed": false, "coinsEarned": 0, "newBalance": null}"#;
        let response: MissionToggleResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.new_balance, None);
    }

    #[test]
    fn test_mission_reward_coins_falls_back_to_xp() {
        let mission = SurvivalMission {
            id: "sm-1".to_string(),
            title: "Cook at home".to_string(),
            xp: 30,
            coins: None,
            completed: true,
        };
        assert_eq!(mission.reward_coins(), 30);
    }

    #[test]
    fn test_insights_fallback_has_single_card() {
        let fallback = AiInsights::fallback("feed");
        assert_eq!(fallback.insights.len(), 1);
        assert_eq!(fallback.insights[0].emoji, "🤖");
        assert_eq!(fallback.insights[0].title, "AI unavailable");
        assert_eq!(fallback.feature, "feed");
    }

    #[test]
    fn test_error_body_message_priority() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Not Found"}"#).unwrap();
        assert_eq!(body.message(), Some("Not Found"));
    }
}
