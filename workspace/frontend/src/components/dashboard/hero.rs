use chrono::Local;
use rust_decimal::Decimal;
use stash_common::format::{euros, time_until_reset, whole_euros};
use stash_common::progress::{burn_percent, remaining_today, Tone};
use stash_common::DashboardData;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant};
use crate::Route;

/// Gradient for the budget bar, by how much of today is left.
fn burn_gradient(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "from-success to-accent",
        Tone::Warning => "from-warning to-accent",
        Tone::Danger => "from-error to-warning",
    }
}

/// `+€12` / `€12` with the sign the dashboard uses for savings.
pub fn saved_label(saved_vs_avg: Decimal) -> String {
    let sign = if saved_vs_avg >= Decimal::ZERO { "+" } else { "" };
    format!("{}{}", sign, whole_euros(saved_vs_avg.abs()))
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub data: DashboardData,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let navigator = use_navigator();
    let DashboardData { budget, runway, vibe, streak, greeting, .. } = &props.data;

    let burn = burn_percent(budget);
    let tone = Tone::from_percent(burn);
    let vibe_variant = BadgeVariant::from(Tone::from_percent(vibe.percent_remaining));
    let saved = runway.saved_vs_avg >= Decimal::ZERO;
    let reset = time_until_reset(Local::now().naive_local());

    let on_streak = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = &navigator {
            nav.push(&Route::Streaks);
        }
    });

    html! {
        <div class="relative overflow-hidden rounded-3xl bg-base-100 border border-base-300 p-6 md:p-8 shadow-sm">
            <div class="flex items-start justify-between mb-6">
                <div>
                    <h1 class="text-xl md:text-2xl font-bold">{greeting}</h1>
                    <div class="mt-2">
                        <Badge variant={vibe_variant} dot={true} small={true}>{vibe.status.clone()}</Badge>
                    </div>
                </div>
                <button class="btn btn-sm btn-ghost border border-warning/20 text-warning" onclick={on_streak}>
                    <i class="fas fa-fire"></i>
                    <span class="font-bold">{streak.days}</span>
                    <span class="text-xs opacity-70">{"day streak"}</span>
                </button>
            </div>

            <div class="text-center mb-6">
                <div class="text-[10px] uppercase tracking-[0.2em] opacity-60 mb-2">
                    <i class="fas fa-clock mr-1"></i>{"Today's Budget"}
                </div>
                <div class="flex items-start justify-center gap-1">
                    <span class="text-2xl font-semibold opacity-60 mt-2">{"€"}</span>
                    <span class="text-6xl font-extrabold tabular-nums">{format!("{:.2}", remaining_today(budget))}</span>
                </div>
                <p class="text-sm opacity-70 mt-2 max-w-md mx-auto">{&vibe.insight}</p>
            </div>

            <div class="mb-6">
                <div class="flex justify-between text-xs opacity-60 mb-2">
                    <span>{format!("{} spent", euros(budget.spent_today))}</span>
                    <span>{reset}</span>
                </div>
                <div class="h-2.5 rounded-full bg-base-300 overflow-hidden">
                    <div
                        class={classes!("h-full", "rounded-full", "bg-gradient-to-r", burn_gradient(tone))}
                        style={format!("width: {:.1}%", burn.clamp(0.0, 100.0))}
                    ></div>
                </div>
            </div>

            <div class="divider my-2"></div>

            <div class="grid grid-cols-3 gap-4 text-center">
                <div>
                    <div class="text-[10px] uppercase tracking-wider opacity-60">{"Runway"}</div>
                    <div class="text-2xl font-bold">{format!("{}d", runway.days_left)}</div>
                    <div class="text-[10px] opacity-50">{"until broke"}</div>
                </div>
                <div>
                    <div class="text-[10px] uppercase tracking-wider opacity-60">{"Safe Money"}</div>
                    <div class="text-2xl font-bold text-accent">{whole_euros(runway.safe_to_spend)}</div>
                    <div class="text-[10px] opacity-50">{"after bills"}</div>
                </div>
                <div>
                    <div class="text-[10px] uppercase tracking-wider opacity-60">{if saved { "Saved" } else { "Over" }}</div>
                    <div class={classes!("text-2xl", "font-bold", if saved { "text-success" } else { "text-error" })}>
                        {saved_label(runway.saved_vs_avg)}
                    </div>
                    <div class="text-[10px] opacity-50">{"vs daily avg"}</div>
                </div>
            </div>
        </div>
    }
}

const QUICK_ACTIONS: [(Route, &str, &str, &str); 3] = [
    (Route::Feed, "fa-plus", "Log Expense", "Track spending"),
    (Route::Feed, "fa-chart-column", "Analytics", "View insights"),
    (Route::Grocery, "fa-arrow-trend-up", "Optimise", "Save more"),
];

#[function_component(QuickActions)]
pub fn quick_actions() -> Html {
    html! {
        <div class="grid grid-cols-3 gap-3">
            { for QUICK_ACTIONS.iter().map(|(route, icon, title, subtitle)| html! {
                <Link<Route> to={*route} classes="flex flex-col items-center gap-2 p-4 rounded-2xl bg-base-100 border border-base-300 hover:border-accent/40 transition-all">
                    <div class="w-10 h-10 rounded-xl bg-accent/10 flex items-center justify-center">
                        <i class={classes!("fas", *icon, "text-accent")}></i>
                    </div>
                    <span class="text-sm font-semibold">{*title}</span>
                    <span class="text-[10px] opacity-60">{*subtitle}</span>
                </Link<Route>>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_label_signs() {
        assert_eq!(saved_label(Decimal::new(1250, 2)), "+€13");
        assert_eq!(saved_label(Decimal::ZERO), "+€0");
        assert_eq!(saved_label(Decimal::new(-48, 1)), "€5");
    }
}
