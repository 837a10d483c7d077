use chrono::Local;
use rust_decimal::Decimal;
use stash_common::format::{euros, signed_euros, time_until_reset, whole_euros};
use stash_common::progress::{burn_percent, gauge_fraction, FIX_IT_SUGGESTIONS};
use stash_common::{Budget, Runway};
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card, FuelGauge};

#[derive(Properties, PartialEq)]
pub struct BudgetProps {
    pub budget: Budget,
    pub runway: Runway,
}

#[function_component(SafeToSpend)]
pub fn safe_to_spend(props: &BudgetProps) -> Html {
    let fraction = gauge_fraction(&props.budget, &props.runway);

    html! {
        <Card>
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center gap-2.5">
                    <div class="w-8 h-8 rounded-lg bg-accent/10 flex items-center justify-center">
                        <i class="fas fa-wallet text-accent text-sm"></i>
                    </div>
                    <div>
                        <span class="block text-sm font-semibold">{"Safe-to-Spend"}</span>
                        <span class="block text-[10px] opacity-60">{"After locked funds & bills"}</span>
                    </div>
                </div>
                <div class="flex items-center gap-1 text-success text-[10px] font-semibold">
                    <i class="fas fa-shield-halved"></i>
                    <span>{"Protected"}</span>
                </div>
            </div>
            <FuelGauge
                value={fraction}
                label={whole_euros(props.runway.safe_to_spend)}
                sublabel="available this month"
            />
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct RunwayProps {
    pub runway: Runway,
}

#[function_component(RunwayPrediction)]
pub fn runway_prediction(props: &RunwayProps) -> Html {
    let show_suggestions = use_state(|| false);
    let runway = &props.runway;
    let short = runway.gap_days > 0;

    let on_fix = {
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |_: MouseEvent| show_suggestions.set(!*show_suggestions))
    };

    html! {
        <Card>
            <div class="flex items-start gap-4">
                <div class="w-10 h-10 rounded-xl bg-accent/10 flex items-center justify-center shrink-0">
                    <i class="fas fa-wand-magic-sparkles text-accent"></i>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-2 mb-1">
                        <div class="text-sm font-semibold">{"Runway Prediction"}</div>
                        <Badge variant={if short { BadgeVariant::Danger } else { BadgeVariant::Success }} small={true}>
                            {format!("{} days left", runway.days_left)}
                        </Badge>
                    </div>
                    <p class="text-sm opacity-70">
                        {"At current pace → "}<strong>{&runway.broke_date}</strong>
                    </p>
                    if short {
                        <div class="flex items-center gap-1.5 mt-2 text-error">
                            <i class="fas fa-arrow-down text-xs"></i>
                            <p class="text-xs">
                                {format!("{} days short of next loan ({})", runway.gap_days, runway.next_loan_date)}
                            </p>
                        </div>
                    } else {
                        <div class="flex items-center gap-1.5 mt-2 text-success">
                            <i class="fas fa-arrow-up text-xs"></i>
                            <p class="text-xs">{"You'll make it to your next loan comfortably"}</p>
                        </div>
                    }
                </div>
                <button class="btn btn-xs btn-outline btn-accent" onclick={on_fix}>
                    <i class="fas fa-wrench"></i>{" Fix It"}
                </button>
            </div>
            if *show_suggestions {
                <div class="mt-4 pt-4 border-t border-base-300 space-y-2">
                    <div class="text-[10px] uppercase tracking-wider opacity-60 mb-2">{"Smart Suggestions"}</div>
                    { for FIX_IT_SUGGESTIONS.iter().map(|s| html! {
                        <div key={s.title} class="flex items-center gap-3 p-3 rounded-xl bg-base-200">
                            <span class="text-lg">{s.icon}</span>
                            <div class="flex-1">
                                <div class="text-sm font-medium">{s.title}</div>
                                <div class="text-xs text-success">{format!("Save ~€{}.00", s.savings)}</div>
                            </div>
                            <i class="fas fa-chevron-right text-xs opacity-40"></i>
                        </div>
                    }) }
                </div>
            }
        </Card>
    }
}

#[function_component(BurnRate)]
pub fn burn_rate(props: &BudgetProps) -> Html {
    let BudgetProps { budget, runway } = props;
    let burn = burn_percent(budget);
    let ahead = runway.saved_vs_avg >= Decimal::ZERO;

    let stats = [
        ("fa-arrow-down", euros(budget.spent_today), "Spent Today", ""),
        ("fa-bolt", format!("€{}/hr", runway.avg_burn_per_hour), "Burn Rate", ""),
        (
            if ahead { "fa-arrow-up" } else { "fa-arrow-down" },
            signed_euros(runway.saved_vs_avg),
            "vs Average",
            if ahead { "text-success" } else { "text-error" },
        ),
    ];

    html! {
        <Card>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-2">
                    <div class="w-7 h-7 rounded-lg bg-warning/10 flex items-center justify-center">
                        <i class="fas fa-bolt text-warning text-xs"></i>
                    </div>
                    <span class="text-sm font-semibold">{"Spending Velocity"}</span>
                </div>
                <div class="flex items-center gap-1 text-[10px] opacity-60">
                    <i class="fas fa-clock"></i>
                    <span>{time_until_reset(Local::now().naive_local())}</span>
                </div>
            </div>
            <progress class="progress progress-accent w-full" value={format!("{:.1}", burn.clamp(0.0, 100.0))} max="100"></progress>
            <div class="flex justify-between text-[10px] opacity-60 mt-1">
                <span>{"€0"}</span>
                <span>{format!("{} budget", euros(budget.daily_budget))}</span>
            </div>
            <div class="grid grid-cols-3 gap-3 mt-4">
                { for stats.into_iter().map(|(icon, value, label, color)| html! {
                    <div key={label} class="text-center p-3 rounded-xl bg-base-200">
                        <i class={classes!("fas", icon, "text-xs", "opacity-60")}></i>
                        <div class={classes!("text-sm", "font-bold", "mt-1", color)}>{value}</div>
                        <div class="text-[10px] opacity-60">{label}</div>
                    </div>
                }) }
            </div>
        </Card>
    }
}
