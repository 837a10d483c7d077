use gloo_timers::callback::Timeout;
use stash_common::listings::{filter_perks, hot_count, near_count, perks_in_category, PERK_CATEGORIES};
use stash_common::Perk;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::clipboard;
use super::perk_card::PerkCard;
use super::sidebars::{AggregatorStrip, NearbyDeals, TransportOptimizer};
use crate::api_client::catalog;
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::{AiInsightCard, Card};

const COPIED_MS: u32 = 2000;
const SAVED_THIS_MONTH: &str = "€24.50";

fn summary_line(perks: &[Perk]) -> String {
    format!(
        "{} deals active · {} hot · {} near you",
        perks.len(),
        hot_count(perks),
        near_count(perks)
    )
}

#[function_component(Perks)]
pub fn perks() -> Html {
    let (state, refetch) = use_fetch(catalog::get_perks);
    let category = use_state(|| None::<&'static str>);
    let query = use_state(String::new);
    let copied = use_state(|| None::<String>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |code: String| {
            clipboard::copy(code.clone());
            copied.set(Some(code));
            let copied = copied.clone();
            Timeout::new(COPIED_MS, move || copied.set(None)).forget();
        })
    };

    render_fetch(&state, 4, Some(refetch), |perks| {
        let visible = filter_perks(perks, *category, &query);
        let chips = std::iter::once(None).chain(PERK_CATEGORIES.into_iter().map(Some));

        html! {
            <div class="flex flex-col gap-5 max-w-3xl mx-auto">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold flex items-center gap-2.5">
                            <div class="w-8 h-8 rounded-lg bg-warning/10 flex items-center justify-center">
                                <i class="fas fa-gift text-warning"></i>
                            </div>
                            {"Student Perks"}
                        </h1>
                        <p class="text-xs opacity-70 mt-1">{summary_line(perks)}</p>
                    </div>
                    <Card hover={false} padded={false} class="py-2 px-3 w-auto">
                        <div class="text-xs opacity-60">{"Saved this month"}</div>
                        <div class="text-lg font-bold text-success">{SAVED_THIS_MONTH}</div>
                    </Card>
                </div>

                <AiInsightCard feature="perks" compact={true} />
                <TransportOptimizer />
                <NearbyDeals />
                <AggregatorStrip />

                <label class="input input-bordered flex items-center gap-2">
                    <i class="fas fa-magnifying-glass opacity-50"></i>
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search for discounts..."
                        value={(*query).clone()}
                        oninput={on_search.clone()}
                    />
                </label>

                <div class="flex gap-2 overflow-x-auto pb-1">
                    { for chips.map(|chip| {
                        let selected = *category == chip;
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(chip))
                        };
                        html! {
                            <button
                                key={chip.unwrap_or("All")}
                                class={classes!("btn", "btn-xs", "whitespace-nowrap", if selected { "btn-primary" } else { "btn-ghost border-base-300" })}
                                {onclick}
                            >
                                {chip.unwrap_or("All")}
                                if let Some(name) = chip {
                                    <span class="ml-1 opacity-60">{format!("({})", perks_in_category(perks, name))}</span>
                                }
                            </button>
                        }
                    }) }
                </div>

                { for visible.iter().map(|perk| html! {
                    <PerkCard
                        key={perk.id.clone()}
                        perk={(*perk).clone()}
                        copied={copied.as_deref() == Some(perk.code.as_str())}
                        on_copy={on_copy.clone()}
                    />
                }) }

                if visible.is_empty() {
                    <div class="text-center py-12 opacity-60">
                        <i class="fas fa-gift text-4xl mb-3 opacity-40"></i>
                        <p>{"No deals found"}</p>
                        <p class="text-xs mt-1">{"Try a different category or search term"}</p>
                    </div>
                }

                <Card hover={false} class="text-center bg-primary/5 border-primary/10">
                    <i class="fas fa-wand-magic-sparkles text-primary mb-1"></i>
                    <div class="text-sm opacity-80">
                        {"Open Stash "}<strong>{"before"}</strong>{" you buy to check for discounts!"}
                    </div>
                    <div class="text-xs opacity-60 mt-1">
                        {"Ask our "}<strong>{"AI Chat"}</strong>{" — \"Any deals near me?\" for personalized suggestions."}
                    </div>
                </Card>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perk(id: &str, hot: bool, near: Option<bool>) -> Perk {
        Perk {
            id: id.to_string(),
            brand: "Boots".to_string(),
            logo: "💊".to_string(),
            deal: "10% off".to_string(),
            code: String::new(),
            category: "Shopping".to_string(),
            is_active: None,
            is_hot: Some(hot),
            expiry_date: None,
            near_you: near,
        }
    }

    #[test]
    fn test_summary_line_counts() {
        let perks = vec![perk("a", true, Some(true)), perk("b", false, None), perk("c", true, Some(false))];
        assert_eq!(summary_line(&perks), "3 deals active · 2 hot · 1 near you");
    }
}
