use stash_common::format::euros;
use stash_common::grocery::cheapest_store;
use stash_common::GroceryItem;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: GroceryItem,
    pub in_basket: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;
    let cheapest = cheapest_store(item).map(|entry| entry.store.as_str());

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    html! {
        <Card onclick={onclick} class={classes!(props.in_basket.then_some("ring-1 ring-primary/40"))}>
            <div class="flex items-center gap-3 mb-3">
                <span class="text-2xl">{&item.emoji}</span>
                <div class="flex-1">
                    <div class="font-semibold">{&item.name}</div>
                    <div class="text-xs opacity-60 capitalize">{&item.category}</div>
                </div>
                <div class={classes!(
                    "w-5", "h-5", "rounded-md", "border-2", "flex", "items-center", "justify-center",
                    if props.in_basket { "bg-primary border-primary" } else { "border-base-content/30" },
                )}>
                    if props.in_basket {
                        <span class="text-primary-content text-xs">{"✓"}</span>
                    }
                </div>
            </div>
            <div class="grid grid-cols-3 gap-2">
                { for item.stores.iter().map(|entry| {
                    let is_cheapest = cheapest == Some(entry.store.as_str());
                    html! {
                        <div key={entry.store.clone()} class={classes!(
                            "text-center", "p-2.5", "rounded-xl",
                            if is_cheapest { "bg-success/10 border border-success/20" } else { "bg-base-200 border border-base-300" },
                        )}>
                            <div class="text-[10px] opacity-60">{&entry.store}</div>
                            <div class={classes!("font-bold", "tabular-nums", is_cheapest.then_some("text-success"))}>{euros(entry.price)}</div>
                            <div class="text-[9px] opacity-50">{&entry.unit}</div>
                            if entry.on_sale {
                                <Badge variant={BadgeVariant::Warning} small={true} class="mt-1">{"SALE"}</Badge>
                            }
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}
