use rust_decimal::Decimal;
use stash_common::listings::{discount_percent, listing_badge};
use stash_common::{ListingType, MarketListing};
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

fn badge_variant(kind: ListingType) -> BadgeVariant {
    match kind {
        ListingType::Barter => BadgeVariant::Warning,
        ListingType::StarterKit => BadgeVariant::Success,
        ListingType::Secondhand => BadgeVariant::Neutral,
    }
}

fn placeholder(kind: ListingType) -> &'static str {
    match kind {
        ListingType::Barter => "🤝",
        ListingType::StarterKit => "📦",
        ListingType::Secondhand => "🏷️",
    }
}

pub(crate) fn price_tag(amount: Decimal) -> String {
    format!("€{}", amount.normalize())
}

#[derive(Properties, PartialEq)]
pub struct ListingCardProps {
    pub listing: MarketListing,
    pub mode: ViewMode,
}

#[function_component(ListingCard)]
pub fn listing_card(props: &ListingCardProps) -> Html {
    let listing = &props.listing;
    let badge = html! {
        <Badge variant={badge_variant(listing.kind)}>{listing_badge(listing.kind)}</Badge>
    };

    let price = if listing.price > Decimal::ZERO {
        html! {
            <div class="flex items-baseline gap-2">
                <span class="font-bold text-success">{price_tag(listing.price)}</span>
                if let Some(original) = listing.original_price {
                    <span class="text-xs opacity-50 line-through">{price_tag(original)}</span>
                }
            </div>
        }
    } else {
        html! { <span class="text-sm font-bold text-warning">{"Free / Trade"}</span> }
    };

    let rating = html! {
        <span class="flex items-center gap-1 text-xs opacity-60">
            <i class="fas fa-star text-warning text-[10px]"></i>
            {format!("{}", listing.seller_rating)}
        </span>
    };

    match props.mode {
        ViewMode::Grid => html! {
            <Card class="h-full group">
                <div class="relative h-32 bg-base-200 rounded-xl mb-3 flex items-center justify-center overflow-hidden">
                    <span class="text-4xl opacity-40">{placeholder(listing.kind)}</span>
                    <div class="absolute top-2 left-2">{badge}</div>
                    if let Some(percent) = discount_percent(listing) {
                        <div class="absolute top-2 right-2 bg-error text-error-content text-[10px] font-bold px-1.5 py-0.5 rounded-md">
                            {format!("-{}%", percent)}
                        </div>
                    }
                </div>
                <h3 class="text-sm font-semibold mb-1 group-hover:text-primary">{&listing.title}</h3>
                <p class="text-xs opacity-70 mb-3 line-clamp-2">{&listing.description}</p>
                <div class="flex items-end justify-between mt-auto">
                    {price}
                    {rating}
                </div>
                <div class="flex items-center justify-between mt-2 pt-2 border-t border-base-300 text-xs opacity-60">
                    <span>{&listing.seller}</span>
                    <span>{&listing.distance}</span>
                </div>
            </Card>
        },
        ViewMode::List => html! {
            <Card class="flex-row gap-4 group">
                <div class="w-20 h-20 bg-base-200 rounded-xl flex items-center justify-center shrink-0">
                    <span class="text-2xl opacity-40">{placeholder(listing.kind)}</span>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-start justify-between gap-2">
                        <div>
                            <h3 class="text-sm font-semibold group-hover:text-primary">{&listing.title}</h3>
                            <p class="text-xs opacity-70 mt-0.5 line-clamp-1">{&listing.description}</p>
                        </div>
                        {badge}
                    </div>
                    <div class="flex items-center justify-between mt-2">
                        {price}
                        <div class="flex items-center gap-3">
                            {rating}
                            <span class="text-xs opacity-60">{&listing.distance}</span>
                        </div>
                    </div>
                </div>
            </Card>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_tag_drops_trailing_zeros() {
        assert_eq!(price_tag(Decimal::new(4500, 2)), "€45");
        assert_eq!(price_tag(Decimal::new(1250, 2)), "€12.5");
    }
}
