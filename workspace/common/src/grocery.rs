//! Basket comparison across the fixed store roster.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::{GroceryItem, StorePrice};

/// Stores compared in the basket summary, in tie-break order.
pub const STORES: [&str; 3] = ["Tesco", "Lidl", "Aldi"];

/// Ids of the items the user ticked. Ordered so renders are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: BTreeSet<String>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the item if absent, removes it if present.
    pub fn toggle(&mut self, item_id: &str) {
        if !self.items.remove(item_id) {
            self.items.insert(item_id.to_string());
        }
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.contains(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreTotal {
    pub store: &'static str,
    pub total: Decimal,
}

/// Per-store basket totals, cheapest first.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketComparison {
    pub totals: Vec<StoreTotal>,
}

impl BasketComparison {
    pub fn cheapest(&self) -> Option<&StoreTotal> {
        self.totals.first()
    }

    pub fn most_expensive(&self) -> Option<&StoreTotal> {
        self.totals.last()
    }

    /// Spread between the dearest and the cheapest store.
    pub fn savings(&self) -> Decimal {
        match (self.cheapest(), self.most_expensive()) {
            (Some(low), Some(high)) => high.total - low.total,
            _ => Decimal::ZERO,
        }
    }
}

/// Cheapest price an item is listed at in `store`, if the store carries it.
pub fn price_at(item: &GroceryItem, store: &str) -> Option<Decimal> {
    item.stores
        .iter()
        .filter(|entry| entry.store == store)
        .map(|entry| entry.price)
        .min()
}

/// Totals every roster store over the selected items; a store missing an item
/// contributes nothing for it. Returns `None` for an empty basket.
pub fn compare_basket(catalog: &[GroceryItem], basket: &Basket) -> Option<BasketComparison> {
    if basket.is_empty() {
        return None;
    }

    let selected: Vec<&GroceryItem> = catalog.iter().filter(|item| basket.contains(&item.id)).collect();
    let mut totals: Vec<StoreTotal> = STORES
        .iter()
        .map(|&store| StoreTotal {
            store,
            total: selected
                .iter()
                .filter_map(|item| price_at(item, store))
                .sum(),
        })
        .collect();
    totals.sort_by(|a, b| a.total.cmp(&b.total));

    Some(BasketComparison { totals })
}

/// The store entry with the lowest price; the first listed wins a tie.
pub fn cheapest_store(item: &GroceryItem) -> Option<&StorePrice> {
    item.stores.iter().fold(None, |best: Option<&StorePrice>, entry| match best {
        Some(current) if current.price <= entry.price => Some(current),
        _ => Some(entry),
    })
}

/// Case-insensitive name search; an empty query matches everything.
pub fn search<'a>(catalog: &'a [GroceryItem], query: &str) -> Vec<&'a GroceryItem> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(store: &str, cents: i64) -> StorePrice {
        StorePrice {
            store: store.to_string(),
            price: Decimal::new(cents, 2),
            unit: "each".to_string(),
            on_sale: false,
        }
    }

    fn item(id: &str, name: &str, stores: Vec<StorePrice>) -> GroceryItem {
        GroceryItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "dairy".to_string(),
            emoji: "🥛".to_string(),
            stores,
        }
    }

    fn catalog() -> Vec<GroceryItem> {
        vec![
            item("milk", "Milk 2L", vec![price("Tesco", 219), price("Lidl", 189), price("Aldi", 185)]),
            item("bread", "Sliced Bread", vec![price("Tesco", 150), price("Lidl", 109)]),
            item("rice", "Basmati Rice", vec![price("Aldi", 299), price("Tesco", 349), price("Lidl", 319)]),
        ]
    }

    fn totals_by_store(comparison: &BasketComparison) -> Vec<(&'static str, Decimal)> {
        let mut pairs: Vec<_> = comparison.totals.iter().map(|t| (t.store, t.total)).collect();
        pairs.sort_by_key(|(store, _)| *store);
        pairs
    }

    #[test]
    fn test_empty_basket_has_no_comparison() {
        assert!(compare_basket(&catalog(), &Basket::new()).is_none());
    }

    #[test]
    fn test_totals_sorted_and_missing_items_count_zero() {
        let mut basket = Basket::new();
        basket.toggle("milk");
        basket.toggle("bread");

        let comparison = compare_basket(&catalog(), &basket).unwrap();
        let ordered: Vec<(&str, Decimal)> = comparison.totals.iter().map(|t| (t.store, t.total)).collect();
        assert_eq!(
            ordered,
            vec![
                ("Aldi", Decimal::new(185, 2)),
                ("Lidl", Decimal::new(298, 2)),
                ("Tesco", Decimal::new(369, 2)),
            ]
        );
        assert_eq!(comparison.cheapest().unwrap().store, "Aldi");
        assert_eq!(comparison.savings(), Decimal::new(184, 2));
    }

    #[test]
    fn test_adding_items_never_lowers_a_store_total() {
        let catalog = catalog();
        let mut basket = Basket::new();
        basket.toggle("milk");
        let before = totals_by_store(&compare_basket(&catalog, &basket).unwrap());

        basket.toggle("rice");
        let after = totals_by_store(&compare_basket(&catalog, &basket).unwrap());

        for ((store, old), (_, new)) in before.iter().zip(after.iter()) {
            assert!(new >= old, "{} went from {} to {}", store, old, new);
        }
    }

    #[test]
    fn test_toggle_twice_restores_totals() {
        let catalog = catalog();
        let mut basket = Basket::new();
        basket.toggle("milk");
        let before = compare_basket(&catalog, &basket);

        basket.toggle("bread");
        basket.toggle("bread");
        assert_eq!(compare_basket(&catalog, &basket), before);
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_single_item_basket_savings() {
        let mut basket = Basket::new();
        basket.toggle("bread");
        let comparison = compare_basket(&catalog(), &basket).unwrap();
        assert_eq!(comparison.cheapest().unwrap().store, "Aldi");
        assert_eq!(comparison.cheapest().unwrap().total, Decimal::ZERO);
        assert_eq!(comparison.savings(), Decimal::new(150, 2));
    }

    #[test]
    fn test_price_at_uses_lowest_duplicate_listing() {
        let milk = item("m", "Milk", vec![price("Tesco", 219), price("Tesco", 199)]);
        assert_eq!(price_at(&milk, "Tesco"), Some(Decimal::new(199, 2)));
        assert_eq!(price_at(&milk, "Aldi"), None);
    }

    #[test]
    fn test_cheapest_store_first_wins_tie() {
        let eggs = item("e", "Eggs", vec![price("Lidl", 250), price("Aldi", 250), price("Tesco", 300)]);
        assert_eq!(cheapest_store(&eggs).unwrap().store, "Lidl");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = search(&catalog, "RICE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "rice");
        assert_eq!(search(&catalog, "").len(), 3);
    }
}
