use stash_common::progress::RewardState;
use stash_common::{RewardCategory, ShopReward};
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant};

fn category_variant(category: RewardCategory) -> BadgeVariant {
    match category {
        RewardCategory::Coupon => BadgeVariant::Accent,
        RewardCategory::App => BadgeVariant::Info,
        RewardCategory::Badge => BadgeVariant::Neutral,
    }
}

fn category_tag(category: RewardCategory) -> &'static str {
    match category {
        RewardCategory::Coupon => "coupon",
        RewardCategory::App => "app",
        RewardCategory::Badge => "badge",
    }
}

#[derive(Properties, PartialEq)]
pub struct RewardCardProps {
    pub reward: ShopReward,
    pub balance: i64,
    pub purchasing: bool,
    pub on_purchase: Callback<String>,
}

#[function_component(RewardCard)]
pub fn reward_card(props: &RewardCardProps) -> Html {
    let reward = &props.reward;
    let state = RewardState::of(reward, props.balance);
    let disabled = !state.can_buy() || props.purchasing;

    let onclick = {
        let on_purchase = props.on_purchase.clone();
        let id = reward.id.clone();
        Callback::from(move |_: MouseEvent| on_purchase.emit(id.clone()))
    };

    let frame = match state {
        RewardState::Purchased => "border-success/20 bg-success/5",
        RewardState::Affordable => "border-base-300 hover:border-accent/30",
        _ => "border-base-300 opacity-60",
    };

    let label = match state {
        RewardState::Purchased => html! { <><i class="fas fa-circle-check"></i>{" Redeemed"}</> },
        _ if props.purchasing => html! { {"Purchasing..."} },
        RewardState::Affordable => html! { <><i class="fas fa-bag-shopping"></i>{" Redeem"}</> },
        other => html! { {other.button_label()} },
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-2xl", "bg-base-100", "border", "p-5", "transition-all", frame)}>
            <div class="flex items-start justify-between mb-3">
                <span class="text-3xl">{&reward.emoji}</span>
                <div class="flex items-center gap-1.5">
                    if state == RewardState::Purchased {
                        <Badge variant={BadgeVariant::Success} small={true}><i class="fas fa-check mr-0.5"></i>{"Owned"}</Badge>
                    }
                    if state == RewardState::OutOfStock {
                        <Badge variant={BadgeVariant::Danger} small={true}>{"Sold Out"}</Badge>
                    }
                    if let Some(left) = reward.stock.filter(|left| *left > 0 && !reward.purchased) {
                        <Badge variant={BadgeVariant::Warning} small={true}>{format!("{} left", left)}</Badge>
                    }
                    <Badge variant={category_variant(reward.category)} small={true}>{category_tag(reward.category)}</Badge>
                </div>
            </div>
            <h3 class="text-sm font-bold mb-1">{&reward.name}</h3>
            <p class="text-[11px] opacity-60 leading-relaxed mb-4">{&reward.description}</p>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-1.5">
                    <i class="fas fa-coins text-accent text-sm"></i>
                    <span class="text-lg font-extrabold text-accent tabular-nums">{reward.cost}</span>
                    <span class="text-[10px] opacity-60 font-bold uppercase tracking-wider">{"coins"}</span>
                </div>
                <button
                    class={classes!("btn", "btn-sm", if state == RewardState::Purchased { "btn-success btn-outline" } else { "btn-accent" })}
                    {disabled}
                    {onclick}
                >
                    {label}
                </button>
            </div>
        </div>
    }
}
