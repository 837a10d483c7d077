use stash_common::feed::parse_timestamp;
use stash_common::format::currency_symbol;
use stash_common::fx::{alert_variant, convert, format_change, rate_change_percent, DEFAULT_HOME_AMOUNT};
use stash_common::{AlertTone, FxData};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::rate_chart::RateChart;
use crate::api_client::catalog;
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::{AiInsightCard, Badge, BadgeVariant, Card, CardVariant};

fn alert_icon(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Good => "fa-arrow-trend-up",
        AlertTone::Bad => "fa-arrow-trend-down",
        AlertTone::Neutral => "fa-chart-column",
    }
}

fn last_updated(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|at| at.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Properties, PartialEq)]
struct FxBodyProps {
    data: FxData,
}

#[function_component(FxBody)]
fn fx_body(props: &FxBodyProps) -> Html {
    let amount = use_state(|| DEFAULT_HOME_AMOUNT.to_string());
    let data = &props.data;
    let base = currency_symbol(&data.base_currency).to_string();
    let target = currency_symbol(&data.target_currency).to_string();
    let change = rate_change_percent(data);
    let converted = convert(&amount, data.current_rate);

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| amount.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    html! {
        <>
            <p class="text-sm opacity-60 -mt-2">
                {format!("{} → {} exchange rates & alerts", data.base_currency, data.target_currency)}
            </p>

            <Card variant={CardVariant::Gradient} hover={false}>
                <div class="flex items-center justify-between">
                    <div>
                        <div class="text-xs opacity-60">{"Current Rate"}</div>
                        <div class="text-2xl font-bold tabular-nums">{format!("{}1 = {}{:.4}", base, target, data.current_rate)}</div>
                    </div>
                    <Badge variant={if change >= 0.0 { BadgeVariant::Success } else { BadgeVariant::Danger }}>
                        <i class="fas fa-arrow-trend-up mr-1"></i>{format_change(change)}
                    </Badge>
                </div>
                <div class="text-[10px] opacity-50 mt-3">{format!("Last updated: {}", last_updated(&data.last_updated))}</div>
            </Card>

            <Card hover={false}>
                <div class="flex items-center gap-2 text-sm font-semibold mb-4">
                    <i class="fas fa-right-left text-accent"></i>
                    {"Quick Convert"}
                </div>
                <div class="flex items-end gap-3">
                    <div class="flex-1">
                        <label class="text-[10px] uppercase opacity-60">{format!("{} ({})", data.base_currency, base)}</label>
                        <input type="number" class="input input-bordered w-full" value={(*amount).clone()} oninput={on_amount} />
                    </div>
                    <i class="fas fa-right-left opacity-40 mb-3.5"></i>
                    <div class="flex-1">
                        <label class="text-[10px] uppercase opacity-60">{format!("{} ({})", data.target_currency, target)}</label>
                        <div class="h-12 flex items-center px-4 rounded-lg bg-base-200 font-bold tabular-nums">
                            {format!("{}{:.2}", target, converted)}
                        </div>
                    </div>
                </div>
            </Card>

            <Card hover={false}>
                <div class="flex items-center gap-2 text-sm font-semibold mb-3">
                    <i class="fas fa-chart-area text-accent"></i>
                    {"30-Day Rate History"}
                </div>
                <RateChart history={data.historical_rates.clone()} />
            </Card>

            <Card hover={false} class="border-success/30">
                <div class="flex items-start gap-3">
                    <div class="w-10 h-10 rounded-xl bg-success/10 flex items-center justify-center shrink-0">
                        <i class="fas fa-clock text-success"></i>
                    </div>
                    <div>
                        <div class="text-sm font-semibold">{"Best Time to Transfer"}</div>
                        <p class="text-sm opacity-70 mt-1">{&data.best_time_to_transfer}</p>
                    </div>
                </div>
            </Card>

            <AiInsightCard feature="fx" />

            <div>
                <div class="flex items-center gap-2 text-sm font-semibold mb-3">
                    <i class="fas fa-bell text-warning"></i>
                    {"Rate Alerts"}
                </div>
                <div class="space-y-2">
                    { for data.alerts.iter().map(|alert| html! {
                        <Card hover={false} class="flex flex-row items-center gap-3">
                            <Badge variant={BadgeVariant::named(alert_variant(alert.tone))}>
                                <i class={classes!("fas", alert_icon(alert.tone))}></i>
                            </Badge>
                            <p class="text-sm flex-1">{&alert.message}</p>
                        </Card>
                    }) }
                </div>
            </div>
        </>
    }
}

#[function_component(FxAdvisor)]
pub fn fx_advisor() -> Html {
    let (state, refetch) = use_fetch(catalog::get_fx);

    html! {
        <div class="flex flex-col gap-4 max-w-3xl mx-auto">
            <h1 class="flex items-center gap-2.5 text-xl font-bold">
                <div class="w-9 h-9 rounded-xl bg-primary/10 flex items-center justify-center">
                    <i class="fas fa-arrow-trend-up text-primary"></i>
                </div>
                {"FX Rates"}
            </h1>
            { render_fetch(&state, 4, Some(refetch), |data| html! { <FxBody data={data.clone()} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_updated_formats_timestamps() {
        assert_eq!(last_updated("2025-02-10T14:05:00"), "10 Feb 2025, 14:05");
        assert_eq!(last_updated("just now"), "just now");
    }
}
