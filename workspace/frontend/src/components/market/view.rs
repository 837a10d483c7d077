use stash_common::listings::{filter_listings, listings_of_kind, total_savings, MARKET_CATEGORIES};
use stash_common::{ListingType, MarketListing};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::listing_card::{price_tag, ListingCard, ViewMode};
use crate::api_client::catalog;
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::{AiInsightCard, Card};

fn tab_label(kind: Option<ListingType>) -> &'static str {
    match kind {
        None => "All",
        Some(ListingType::Secondhand) => "Secondhand",
        Some(ListingType::StarterKit) => "Starter Kits",
        Some(ListingType::Barter) => "Skill Barter",
    }
}

fn tab_icon(kind: Option<ListingType>) -> &'static str {
    match kind {
        None => "fas fa-store",
        Some(ListingType::Secondhand) => "fas fa-bag-shopping",
        Some(ListingType::StarterKit) => "fas fa-box",
        Some(ListingType::Barter) => "fas fa-repeat",
    }
}

fn tab_count(listings: &[MarketListing], kind: Option<ListingType>) -> usize {
    kind.map_or(listings.len(), |kind| listings_of_kind(listings, kind))
}

#[function_component(Market)]
pub fn market() -> Html {
    let (state, refetch) = use_fetch(catalog::get_market_listings);
    let kind = use_state(|| None::<ListingType>);
    let category = use_state(|| None::<&'static str>);
    let query = use_state(String::new);
    let mode = use_state(|| ViewMode::Grid);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let set_mode = |next: ViewMode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(next))
    };

    render_fetch(&state, 4, Some(refetch), |listings| {
        let visible = filter_listings(listings, *kind, *category, &query);
        let tabs = std::iter::once(None).chain(ListingType::ALL.into_iter().map(Some));
        let chips = std::iter::once(None).chain(MARKET_CATEGORIES.into_iter().map(Some));

        html! {
            <div class="flex flex-col gap-5 max-w-3xl mx-auto">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold flex items-center gap-2.5">
                            <div class="w-8 h-8 rounded-lg bg-primary/10 flex items-center justify-center">
                                <i class="fas fa-store text-primary"></i>
                            </div>
                            {"Student Market"}
                        </h1>
                        <p class="text-sm opacity-70 mt-1">{"Secondhand deals, starter kits & skill barter"}</p>
                    </div>
                    <Card hover={false} padded={false} class="py-2 px-3 w-auto">
                        <div class="text-xs opacity-60">{"Potential savings"}</div>
                        <div class="text-lg font-bold text-success">{price_tag(total_savings(listings))}</div>
                    </Card>
                </div>

                <label class="input input-bordered flex items-center gap-2">
                    <i class="fas fa-magnifying-glass opacity-50"></i>
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search items, kits, or skills..."
                        value={(*query).clone()}
                        oninput={on_search.clone()}
                    />
                </label>

                <AiInsightCard feature="market" compact={true} />

                <div class="flex gap-2 overflow-x-auto pb-1">
                    { for tabs.map(|tab| {
                        let onclick = {
                            let kind = kind.clone();
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| {
                                kind.set(tab);
                                category.set(None);
                            })
                        };
                        html! {
                            <button
                                key={tab_label(tab)}
                                class={classes!("btn", "btn-sm", "whitespace-nowrap", if *kind == tab { "btn-primary" } else { "btn-ghost border-base-300" })}
                                {onclick}
                            >
                                <i class={tab_icon(tab)}></i>
                                {tab_label(tab)}
                                <span class="ml-1 opacity-60">{format!("({})", tab_count(listings, tab))}</span>
                            </button>
                        }
                    }) }
                </div>

                <div class="flex items-center justify-between gap-2">
                    <div class="flex gap-1.5 overflow-x-auto">
                        { for chips.map(|chip| {
                            let onclick = {
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| category.set(chip))
                            };
                            html! {
                                <button
                                    key={chip.unwrap_or("All")}
                                    class={classes!("btn", "btn-xs", "whitespace-nowrap", if *category == chip { "btn-accent" } else { "btn-ghost border-base-300" })}
                                    {onclick}
                                >
                                    {chip.unwrap_or("All")}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="join shrink-0">
                        <button
                            class={classes!("btn", "btn-sm", "join-item", (*mode == ViewMode::Grid).then_some("btn-primary"))}
                            onclick={set_mode(ViewMode::Grid)}
                        >
                            <i class="fas fa-table-cells"></i>
                        </button>
                        <button
                            class={classes!("btn", "btn-sm", "join-item", (*mode == ViewMode::List).then_some("btn-primary"))}
                            onclick={set_mode(ViewMode::List)}
                        >
                            <i class="fas fa-list"></i>
                        </button>
                    </div>
                </div>

                if *kind == Some(ListingType::StarterKit) {
                    <Card hover={false} class="bg-gradient-to-r from-success/10 to-primary/5 border-success/15">
                        <div class="flex items-start gap-3">
                            <span class="text-3xl">{"📦"}</span>
                            <div>
                                <div class="text-sm font-semibold">{"Seniors' Starter Kit Handover"}</div>
                                <p class="text-xs opacity-70 mt-1">
                                    {"Graduating students leaving Ireland bundle their entire room setup (desk, bedding, kitchen essentials) and sell it as a single heavily discounted package to incoming freshers."}
                                </p>
                                <div class="text-xs text-success mt-1 font-medium">{"Save up to 60% vs buying new!"}</div>
                            </div>
                        </div>
                    </Card>
                }
                if *kind == Some(ListingType::Barter) {
                    <Card hover={false} class="bg-gradient-to-r from-warning/10 to-accent/5 border-warning/15">
                        <div class="flex items-start gap-3">
                            <span class="text-3xl">{"🔄"}</span>
                            <div>
                                <div class="text-sm font-semibold">{"Skill Barter Board"}</div>
                                <p class="text-xs opacity-70 mt-1">
                                    {"Trade favors instead of money! Swap coding help for a home-cooked meal, language practice for moving help, or tutoring for photography."}
                                </p>
                                <div class="text-xs text-warning mt-1 font-medium">{"Zero money spent, just trade skills!"}</div>
                            </div>
                        </div>
                    </Card>
                }

                <div class={if *mode == ViewMode::Grid { "grid gap-3.5 sm:grid-cols-2" } else { "flex flex-col gap-3.5" }}>
                    { for visible.iter().map(|listing| html! {
                        <ListingCard key={listing.id.clone()} listing={(*listing).clone()} mode={*mode} />
                    }) }
                </div>

                if visible.is_empty() {
                    <div class="text-center py-12 opacity-60">
                        <i class="fas fa-store text-4xl mb-3 opacity-40"></i>
                        <p>{"No listings found"}</p>
                        <p class="text-xs mt-1">{"Try a different category or search term"}</p>
                    </div>
                }
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label(None), "All");
        assert_eq!(tab_label(Some(ListingType::Barter)), "Skill Barter");
        assert_eq!(tab_icon(Some(ListingType::StarterKit)), "fas fa-box");
    }
}
