use stash_common::format::euros;
use stash_common::{Budget, Runway};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::{Card, CardVariant};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FundsRowProps {
    pub budget: Budget,
    pub runway: Runway,
    pub streak_days: u32,
}

/// Locked funds beside the ghost budget and streak cards.
#[function_component(FundsRow)]
pub fn funds_row(props: &FundsRowProps) -> Html {
    let navigator = use_navigator();
    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = &navigator {
                nav.push(&route);
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <Card hover={false}>
                <div class="flex items-center justify-between mb-3">
                    <div class="flex items-center gap-2">
                        <div class="w-7 h-7 rounded-lg bg-info/10 flex items-center justify-center">
                            <i class="fas fa-lock text-info text-xs"></i>
                        </div>
                        <span class="text-sm font-semibold">{"Protected Funds"}</span>
                    </div>
                    <button class="btn btn-xs btn-ghost text-accent" onclick={go(Route::More)}>{"Edit"}</button>
                </div>
                <div class="space-y-2">
                    { for props.budget.locked_funds.iter().map(|fund| html! {
                        <div class="flex items-center gap-3 text-sm">
                            <span>{&fund.emoji}</span>
                            <span class="flex-1 opacity-80">{&fund.name}</span>
                            <span class="font-semibold tabular-nums">{euros(fund.amount)}</span>
                        </div>
                    }) }
                </div>
                <div class="divider my-2"></div>
                <div class="flex justify-between text-sm">
                    <span class="opacity-60">{"Total locked"}</span>
                    <span class="font-bold">{euros(props.runway.locked_total)}</span>
                </div>
            </Card>

            <div class="flex flex-col gap-4">
                <Card variant={CardVariant::Gradient} onclick={go(Route::More)}>
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-xl bg-secondary/10 flex items-center justify-center">
                            <i class="fas fa-ghost text-secondary"></i>
                        </div>
                        <div class="flex-1">
                            <div class="text-sm font-semibold">{"Ghost Budget"}</div>
                            <div class="text-[10px] opacity-60">{"Hidden from yourself"}</div>
                        </div>
                        <div class="text-right">
                            <div class="text-lg font-bold">{format!("€{}", props.runway.ghost_total)}</div>
                            <div class="text-[10px] opacity-60">{"tucked away"}</div>
                        </div>
                    </div>
                </Card>
                <Card onclick={go(Route::Streaks)}>
                    <div class="flex items-center gap-3">
                        <i class="fas fa-fire text-warning text-2xl"></i>
                        <div class="flex-1">
                            <span class="text-2xl font-extrabold">{props.streak_days}</span>
                            <span class="text-sm opacity-60 ml-1">{"day streak"}</span>
                        </div>
                        <div class="flex items-end gap-1">
                            { for (0..props.streak_days.min(5)).map(|_| html! {
                                <div class="w-1.5 h-4 rounded-full bg-warning"></div>
                            }) }
                        </div>
                    </div>
                </Card>
            </div>
        </div>
    }
}
