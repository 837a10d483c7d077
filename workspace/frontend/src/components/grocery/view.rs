use stash_common::grocery::{compare_basket, search, Basket};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::basket_summary::BasketSummary;
use super::item_card::ItemCard;
use crate::api_client::catalog;
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::AiInsightCard;

#[function_component(Grocery)]
pub fn grocery() -> Html {
    let (state, refetch) = use_fetch(catalog::get_grocery_items);
    let query = use_state(String::new);
    let basket = use_state(Basket::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| query.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_toggle = {
        let basket = basket.clone();
        Callback::from(move |item_id: String| {
            let mut next = (*basket).clone();
            next.toggle(&item_id);
            log::debug!("Basket now holds {} items", next.len());
            basket.set(next);
        })
    };

    let body = render_fetch(&state, 5, Some(refetch), |catalog| {
        let matches = search(catalog, &query);
        let comparison = compare_basket(catalog, &basket);
        let nothing_found = matches.is_empty();

        html! {
            <>
                if let Some(comparison) = comparison {
                    <BasketSummary {comparison} items={basket.len()} />
                }
                <AiInsightCard feature="grocery" compact={true} />
                <div class="space-y-3">
                    { for matches.into_iter().map(|item| html! {
                        <ItemCard
                            key={item.id.clone()}
                            item={item.clone()}
                            in_basket={basket.contains(&item.id)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
                if nothing_found {
                    <div class="text-center py-12 opacity-60">
                        <i class="fas fa-cart-shopping text-4xl mb-3"></i>
                        <p>{format!("No items found matching \"{}\"", *query)}</p>
                    </div>
                }
            </>
        }
    });

    html! {
        <div class="flex flex-col gap-4 max-w-3xl mx-auto">
            <div>
                <h1 class="flex items-center gap-2.5 text-xl font-bold">
                    <div class="w-9 h-9 rounded-xl bg-success/10 flex items-center justify-center">
                        <i class="fas fa-cart-shopping text-success"></i>
                    </div>
                    {"Grocery Comparison"}
                </h1>
                <p class="text-sm opacity-60 mt-1">{"Compare prices across Dublin stores"}</p>
            </div>

            <label class="input input-bordered flex items-center gap-2">
                <i class="fas fa-magnifying-glass opacity-50"></i>
                <input
                    type="text"
                    class="grow"
                    placeholder="Search items (milk, bread, rice...)"
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </label>

            {body}
        </div>
    }
}
