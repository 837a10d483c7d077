use stash_common::listings::{AGGREGATORS, NEARBY_DEALS, TRANSPORT_SWAP};
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card, CardVariant};

#[function_component(TransportOptimizer)]
pub fn transport_optimizer() -> Html {
    let swap = TRANSPORT_SWAP;
    html! {
        <Card variant={CardVariant::Gradient} hover={false}>
            <div class="flex items-center gap-2 mb-2">
                <i class="fas fa-train text-primary text-sm"></i>
                <span class="text-sm font-semibold">{"Transport Mode Optimizer"}</span>
                <Badge variant={BadgeVariant::Primary}><i class="fas fa-lightbulb text-[10px] mr-0.5"></i>{"Insight"}</Badge>
            </div>
            <div class="flex items-center gap-4 mb-3">
                <div class="flex-1 text-center p-2.5 bg-error/10 rounded-xl border border-error/15">
                    <div class="text-2xl">{swap.current_emoji}</div>
                    <div class="text-xs opacity-60 mt-1">{"Current"}</div>
                    <div class="text-sm font-bold text-error tabular-nums">{format!("€{}/mo", swap.current_monthly)}</div>
                </div>
                <div class="opacity-50">{"→"}</div>
                <div class="flex-1 text-center p-2.5 bg-success/10 rounded-xl border border-success/15">
                    <div class="text-2xl">{swap.suggested_emoji}</div>
                    <div class="text-xs opacity-60 mt-1">{"Switch to"}</div>
                    <div class="text-sm font-bold text-success tabular-nums">{format!("€{}/mo", swap.suggested_monthly)}</div>
                </div>
            </div>
            <div class="flex items-center justify-between bg-base-200 rounded-xl p-3">
                <span class="text-xs opacity-80">
                    {format!("You spent €{} on {} — switch to ", swap.current_monthly, swap.current_mode)}
                    <strong class="text-success">{swap.suggested_mode}</strong>
                    {format!(" for just €{}/year", swap.suggested_annual)}
                </span>
                <span class="text-xs font-bold text-success whitespace-nowrap ml-2">
                    {format!("Save €{:.0}/mo", swap.monthly_savings)}
                </span>
            </div>
        </Card>
    }
}

#[function_component(NearbyDeals)]
pub fn nearby_deals() -> Html {
    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-3">
                <i class="fas fa-location-dot text-error text-sm"></i>
                <span class="text-sm font-semibold">{"Near You"}</span>
                <span class="text-[10px] bg-error/20 text-error px-1.5 py-0.5 rounded-full font-medium flex items-center gap-1">
                    <span class="w-1.5 h-1.5 rounded-full bg-error animate-pulse"></span>{" LIVE"}
                </span>
            </div>
            <div class="space-y-2">
                { for NEARBY_DEALS.iter().map(|deal| html! {
                    <div key={deal.brand} class="flex items-center gap-3 p-2.5 bg-base-200 rounded-xl">
                        <span class="text-xl">{deal.emoji}</span>
                        <div class="flex-1 min-w-0">
                            <div class="text-sm font-medium">{deal.brand}</div>
                            <div class="text-xs opacity-70">{deal.deal}</div>
                        </div>
                        <div class="text-xs opacity-50">{deal.distance}</div>
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[function_component(AggregatorStrip)]
pub fn aggregator_strip() -> Html {
    html! {
        <div class="flex gap-2 overflow-x-auto">
            { for AGGREGATORS.iter().map(|agg| html! {
                <a
                    key={agg.name}
                    href={agg.url}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 px-3.5 py-2.5 bg-base-200 rounded-xl text-xs font-medium whitespace-nowrap border border-base-300 hover:border-primary/30 shrink-0"
                >
                    <span>{agg.emoji}</span>
                    <span>{agg.name}</span>
                    <span class="opacity-50">{format!("({})", agg.deals)}</span>
                    <i class="fas fa-arrow-up-right-from-square text-[10px] opacity-50"></i>
                </a>
            }) }
        </div>
    }
}
