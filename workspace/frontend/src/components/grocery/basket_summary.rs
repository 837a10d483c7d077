use rust_decimal::Decimal;
use stash_common::format::euros;
use stash_common::grocery::BasketComparison;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card, CardVariant};

#[derive(Properties, PartialEq)]
pub struct BasketSummaryProps {
    pub comparison: BasketComparison,
    pub items: usize,
}

#[function_component(BasketSummary)]
pub fn basket_summary(props: &BasketSummaryProps) -> Html {
    let comparison = &props.comparison;
    let savings = comparison.savings();

    html! {
        <Card variant={CardVariant::Gradient} hover={false}>
            <div class="flex items-center gap-2 mb-4 flex-wrap">
                <div class="w-7 h-7 rounded-lg bg-accent/10 flex items-center justify-center">
                    <i class="fas fa-tag text-accent text-xs"></i>
                </div>
                <span class="text-sm font-semibold flex-1">{format!("Your Basket ({} items)", props.items)}</span>
                if let Some(cheapest) = comparison.cheapest().filter(|_| savings > Decimal::ZERO) {
                    <Badge variant={BadgeVariant::Success}>
                        {format!("Save {} at {}", euros(savings), cheapest.store)}
                    </Badge>
                }
            </div>
            <div class="grid grid-cols-3 gap-3">
                { for comparison.totals.iter().enumerate().map(|(rank, entry)| html! {
                    <div key={entry.store} class={classes!(
                        "text-center", "p-3", "rounded-xl",
                        if rank == 0 { "bg-success/10 ring-1 ring-success/20" } else { "bg-base-200 border border-base-300" },
                    )}>
                        <div class="text-xs opacity-60">{entry.store}</div>
                        <div class={classes!("text-lg", "font-bold", "tabular-nums", (rank == 0).then_some("text-success"))}>
                            {euros(entry.total)}
                        </div>
                        if rank == 0 {
                            <div class="text-[10px] font-semibold text-success">{"Cheapest!"}</div>
                        }
                    </div>
                }) }
            </div>
        </Card>
    }
}
