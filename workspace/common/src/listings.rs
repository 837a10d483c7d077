//! Filters over the perk, marketplace and community catalogs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{CommunityPost, ListingType, MarketListing, Perk, PostIntent};

pub const PERK_CATEGORIES: [&str; 5] = ["Food", "Shopping", "Entertainment", "Tech", "Transport"];

pub const MARKET_CATEGORIES: [&str; 7] = [
    "Furniture",
    "Electronics",
    "Starter Kit",
    "Tutoring",
    "Food",
    "Books",
    "Bikes",
];

fn matches_query(needle: &str, fields: &[&str]) -> bool {
    needle.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(needle))
}

// ===================== Perks =====================

/// Category chip (None = All) and case-insensitive brand/deal search.
pub fn filter_perks<'a>(perks: &'a [Perk], category: Option<&str>, query: &str) -> Vec<&'a Perk> {
    let needle = query.trim().to_lowercase();
    perks
        .iter()
        .filter(|p| category.is_none_or(|wanted| p.category == wanted))
        .filter(|p| matches_query(&needle, &[p.brand.as_str(), p.deal.as_str()]))
        .collect()
}

pub fn perks_in_category(perks: &[Perk], category: &str) -> usize {
    perks.iter().filter(|p| p.category == category).count()
}

pub fn hot_count(perks: &[Perk]) -> usize {
    perks.iter().filter(|p| p.is_hot.unwrap_or(false)).count()
}

pub fn near_count(perks: &[Perk]) -> usize {
    perks.iter().filter(|p| p.near_you.unwrap_or(false)).count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyDeal {
    pub brand: &'static str,
    pub distance: &'static str,
    pub deal: &'static str,
    pub emoji: &'static str,
}

pub const NEARBY_DEALS: [NearbyDeal; 3] = [
    NearbyDeal { brand: "Tesco Express", distance: "200m", deal: "10% off with Clubcard", emoji: "🛒" },
    NearbyDeal { brand: "Insomnia Coffee", distance: "350m", deal: "Student price €2.50", emoji: "☕" },
    NearbyDeal { brand: "Supermac's", distance: "500m", deal: "Meal deal €6.99", emoji: "🍔" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregator {
    pub name: &'static str,
    pub emoji: &'static str,
    pub deals: u32,
    pub url: &'static str,
}

pub const AGGREGATORS: [Aggregator; 3] = [
    Aggregator { name: "UNiDAYS", emoji: "🎓", deals: 47, url: "https://www.myunidays.com" },
    Aggregator { name: "Student Beans", emoji: "🫘", deals: 32, url: "https://www.studentbeans.com" },
    Aggregator { name: "TCD SU", emoji: "🏫", deals: 12, url: "#" },
];

/// Fixed commute comparison shown on the perks page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportSwap {
    pub current_mode: &'static str,
    pub current_emoji: &'static str,
    pub current_monthly: u32,
    pub suggested_mode: &'static str,
    pub suggested_emoji: &'static str,
    pub suggested_annual: u32,
    pub suggested_monthly: f64,
    pub monthly_savings: f64,
}

pub const TRANSPORT_SWAP: TransportSwap = TransportSwap {
    current_mode: "Luas",
    current_emoji: "🚃",
    current_monthly: 80,
    suggested_mode: "Dublin Bikes",
    suggested_emoji: "🚲",
    suggested_annual: 35,
    suggested_monthly: 2.92,
    monthly_savings: 77.08,
};

// ===================== Market =====================

/// Type tab (None = all), category chip (None = All) and title/description search.
pub fn filter_listings<'a>(
    listings: &'a [MarketListing],
    kind: Option<ListingType>,
    category: Option<&str>,
    query: &str,
) -> Vec<&'a MarketListing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|l| kind.is_none_or(|wanted| l.kind == wanted))
        .filter(|l| category.is_none_or(|wanted| l.category == wanted))
        .filter(|l| matches_query(&needle, &[l.title.as_str(), l.description.as_str()]))
        .collect()
}

pub fn listings_of_kind(listings: &[MarketListing], kind: ListingType) -> usize {
    listings.iter().filter(|l| l.kind == kind).count()
}

/// The original price, only for paid listings that carry one.
fn discounted_from(listing: &MarketListing) -> Option<Decimal> {
    listing
        .original_price
        .filter(|original| !original.is_zero() && listing.price > Decimal::ZERO)
}

/// Sum of `original - price` across paid listings that show an original price.
pub fn total_savings(listings: &[MarketListing]) -> Decimal {
    listings
        .iter()
        .filter_map(|l| discounted_from(l).map(|original| original - l.price))
        .sum()
}

/// Whole-percent markdown badge, e.g. `40` for `-40%`.
pub fn discount_percent(listing: &MarketListing) -> Option<i64> {
    let original = discounted_from(listing)?;
    ((original - listing.price) / original * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

pub fn listing_badge(kind: ListingType) -> &'static str {
    match kind {
        ListingType::Barter => "Barter",
        ListingType::StarterKit => "Kit",
        ListingType::Secondhand => "Used",
    }
}

// ===================== Community =====================

/// Comma-separated tag input, trimmed, empties dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn filter_posts(posts: &[CommunityPost], intent: Option<PostIntent>) -> Vec<&CommunityPost> {
    posts
        .iter()
        .filter(|p| intent.is_none_or(|wanted| p.intent == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perk(brand: &str, deal: &str, category: &str, hot: Option<bool>, near: Option<bool>) -> Perk {
        Perk {
            id: brand.to_lowercase(),
            brand: brand.to_string(),
            logo: String::new(),
            deal: deal.to_string(),
            code: "STUDENT".to_string(),
            category: category.to_string(),
            is_active: Some(true),
            is_hot: hot,
            expiry_date: None,
            near_you: near,
        }
    }

    fn listing(title: &str, kind: ListingType, price: i64, original: Option<i64>) -> MarketListing {
        MarketListing {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: format!("{} in great condition", title),
            price: Decimal::from(price),
            original_price: original.map(Decimal::from),
            category: "Furniture".to_string(),
            image: "🪑".to_string(),
            seller: "Niamh".to_string(),
            seller_rating: 4.8,
            distance: "0.4km".to_string(),
            kind,
        }
    }

    #[test]
    fn test_filter_perks_by_category_and_search() {
        let perks = vec![
            perk("Spotify", "50% off Premium", "Entertainment", Some(true), None),
            perk("Deliveroo", "Free delivery", "Food", None, Some(true)),
            perk("Apple", "Education pricing", "Tech", Some(true), Some(true)),
        ];

        assert_eq!(filter_perks(&perks, None, "").len(), 3);
        assert_eq!(filter_perks(&perks, Some("Food"), "").len(), 1);
        assert_eq!(filter_perks(&perks, None, "FREE")[0].brand, "Deliveroo");
        assert!(filter_perks(&perks, Some("Tech"), "spotify").is_empty());
        assert_eq!(hot_count(&perks), 2);
        assert_eq!(near_count(&perks), 2);
        assert_eq!(perks_in_category(&perks, "Food"), 1);
    }

    #[test]
    fn test_total_savings_skips_free_and_unpriced() {
        let listings = vec![
            listing("Desk", ListingType::Secondhand, 30, Some(80)),
            listing("Kettle", ListingType::StarterKit, 10, None),
            listing("Guitar lessons", ListingType::Barter, 0, Some(40)),
        ];
        assert_eq!(total_savings(&listings), Decimal::from(50));
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(&listing("Desk", ListingType::Secondhand, 30, Some(80))), Some(63));
        assert_eq!(discount_percent(&listing("Free", ListingType::Barter, 0, Some(40))), None);
        assert_eq!(discount_percent(&listing("Plain", ListingType::Secondhand, 5, None)), None);
    }

    #[test]
    fn test_filter_listings() {
        let listings = vec![
            listing("Desk", ListingType::Secondhand, 30, Some(80)),
            listing("Kitchen kit", ListingType::StarterKit, 25, Some(60)),
        ];
        assert_eq!(filter_listings(&listings, Some(ListingType::StarterKit), None, "").len(), 1);
        assert_eq!(filter_listings(&listings, None, Some("Books"), "").len(), 0);
        assert_eq!(filter_listings(&listings, None, None, "great condition").len(), 2);
        assert_eq!(listings_of_kind(&listings, ListingType::Barter), 0);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" books, ,maths ,"), vec!["books".to_string(), "maths".to_string()]);
        assert!(parse_tags("  ").is_empty());
    }
}
