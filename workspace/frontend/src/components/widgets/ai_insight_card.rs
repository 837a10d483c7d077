use stash_common::AiInsights;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::assistant;
use crate::common::fetch_hook::use_mount_token;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct AiInsightCardProps {
    /// Feature key sent as `?feature=`
    pub feature: AttrValue,
    #[prop_or(true)]
    pub default_expanded: bool,
    #[prop_or_default]
    pub compact: bool,
}

/// Server-generated tips for one feature. Never fails visibly: a broken
/// request turns into the single "AI unavailable" card.
#[function_component(AiInsightCard)]
pub fn ai_insight_card(props: &AiInsightCardProps) -> Html {
    let insights = use_state(|| None::<AiInsights>);
    let refreshing = use_state(|| false);
    let expanded = use_state(|| props.default_expanded);
    let token = use_mount_token();
    let navigator = use_navigator();

    let load = {
        let insights = insights.clone();
        let refreshing = refreshing.clone();
        let token = token.clone();
        let feature = props.feature.clone();
        Callback::from(move |_: ()| {
            let insights = insights.clone();
            let refreshing = refreshing.clone();
            let ticket = token.issue();
            let feature = feature.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = assistant::insights_or_fallback(&feature).await;
                if ticket.is_current() {
                    insights.set(Some(loaded));
                    refreshing.set(false);
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(props.feature.clone(), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_refresh = {
        let refreshing = refreshing.clone();
        let load = load.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Refreshing insights");
            refreshing.set(true);
            load.emit(());
        })
    };

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_ask = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Chat);
        }
    });

    let padding = if props.compact { "p-3" } else { "p-4" };

    let Some(data) = (*insights).clone() else {
        return html! {
            <div class={classes!("rounded-2xl", "border", "border-primary/20", "bg-base-100", padding)}>
                <div class="flex items-center gap-2.5">
                    <div class="w-8 h-8 rounded-xl bg-primary flex items-center justify-center">
                        <i class="fas fa-wand-magic-sparkles text-primary-content animate-pulse"></i>
                    </div>
                    <div class="flex-1">
                        <div class="skeleton h-3 w-24 mb-1.5"></div>
                        <div class="skeleton h-2 w-40"></div>
                    </div>
                </div>
            </div>
        };
    };

    if data.insights.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-2xl", "bg-base-100", "border", "border-base-300", "shadow-sm", padding)}>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-2.5">
                    <div class="w-8 h-8 rounded-xl bg-gradient-to-br from-primary to-accent flex items-center justify-center">
                        <i class="fas fa-wand-magic-sparkles text-white text-sm"></i>
                    </div>
                    <div>
                        <div class="text-xs font-bold flex items-center gap-1.5">
                            {"Stash AI Insights"}
                            <span class="badge badge-primary badge-xs">{"SMART"}</span>
                        </div>
                        if !data.source.is_empty() {
                            <div class="text-[10px] opacity-60">{&data.source}</div>
                        }
                    </div>
                </div>
                <div class="flex items-center gap-1">
                    <button class="btn btn-ghost btn-xs" title="Ask AI more" onclick={on_ask}>
                        <i class="fas fa-comment-dots"></i>
                    </button>
                    <button class="btn btn-ghost btn-xs" title="Refresh insights" disabled={*refreshing} onclick={on_refresh}>
                        <i class={classes!("fas", "fa-rotate", refreshing.then_some("fa-spin"))}></i>
                    </button>
                    <button class="btn btn-ghost btn-xs" onclick={on_toggle}>
                        <i class={if *expanded { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                    </button>
                </div>
            </div>
            if *expanded {
                <div class={classes!("space-y-2.5", if props.compact { "mt-2.5" } else { "mt-3.5" })}>
                    { for data.insights.iter().enumerate().map(|(index, insight)| html! {
                        <div key={index} class="flex gap-3 p-2.5 rounded-xl bg-base-200/60 border border-base-300">
                            <span class="text-lg shrink-0 mt-0.5">{&insight.emoji}</span>
                            <div class="flex-1 min-w-0">
                                <div class="text-xs font-semibold mb-0.5">{&insight.title}</div>
                                <div class="text-[11px] opacity-80 leading-relaxed">{&insight.text}</div>
                            </div>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}
