use stash_common::StreakReward;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Properties, PartialEq)]
pub struct RewardListProps {
    pub rewards: Vec<StreakReward>,
    pub claiming: Option<String>,
    pub on_claim: Callback<StreakReward>,
}

#[function_component(RewardList)]
pub fn reward_list(props: &RewardListProps) -> Html {
    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-gift text-accent text-sm"></i>
                <span class="text-sm font-semibold">{"Your Rewards"}</span>
            </div>
            <div class="space-y-2">
                { for props.rewards.iter().map(|reward| {
                    let claiming = props.claiming.as_deref() == Some(reward.id.as_str());
                    let action = if reward.claimed {
                        html! { <Badge variant={BadgeVariant::Neutral}>{"Claimed"}</Badge> }
                    } else {
                        let onclick = {
                            let on_claim = props.on_claim.clone();
                            let reward = reward.clone();
                            Callback::from(move |_: MouseEvent| on_claim.emit(reward.clone()))
                        };
                        html! {
                            <button class="btn btn-xs btn-primary" disabled={claiming} {onclick}>
                                {if claiming { "..." } else { "Claim" }}
                            </button>
                        }
                    };
                    html! {
                        <div key={reward.id.clone()} class={classes!(
                            "flex", "items-center", "gap-3", "p-3.5", "rounded-xl", "border",
                            if reward.claimed { "bg-base-200 opacity-60 border-base-300" } else { "bg-gradient-to-r from-primary/5 to-accent/5 border-primary/10" },
                        )}>
                            <span class="text-2xl">{&reward.emoji}</span>
                            <div class="flex-1 min-w-0">
                                <div class="text-sm font-semibold">{&reward.reward}</div>
                                <div class="text-xs opacity-60">{format!("{} ({} day streak)", reward.milestone, reward.days)}</div>
                            </div>
                            {action}
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}
