use stash_common::format::euros;
use stash_common::{DebtDirection, SquadMember};
use yew::prelude::*;

use crate::components::widgets::Card;

#[derive(Properties, PartialEq)]
pub struct MemberCardProps {
    pub member: SquadMember,
    pub nudging: bool,
    pub settling: bool,
    pub on_nudge: Callback<SquadMember>,
    pub on_settle: Callback<SquadMember>,
}

/// Members who owe you can be nudged; anyone else can be settled with.
#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let member = &props.member;
    let owes_you = member.direction == DebtDirection::OwesYou;
    let tone = if owes_you { "success" } else { "error" };
    let sign = if member.direction == DebtDirection::YouOwe { "-" } else { "+" };

    let action = if owes_you {
        let onclick = {
            let on_nudge = props.on_nudge.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| on_nudge.emit(member.clone()))
        };
        html! {
            <button class="btn btn-sm btn-warning btn-outline flex-1" disabled={props.nudging} {onclick}>
                <i class="fas fa-bell text-xs"></i>
                {if props.nudging { " Nudging..." } else { " Nudge" }}
            </button>
        }
    } else {
        let onclick = {
            let on_settle = props.on_settle.clone();
            let member = member.clone();
            Callback::from(move |_: MouseEvent| on_settle.emit(member.clone()))
        };
        html! {
            <button class="btn btn-sm btn-success btn-outline flex-1" disabled={props.settling} {onclick}>
                <i class="fas fa-circle-check text-xs"></i>
                {if props.settling { " Settling..." } else { " Settle Up" }}
            </button>
        }
    };

    html! {
        <Card hover={false} class="space-y-2">
            <div class="flex items-center gap-3">
                <div class={classes!(
                    "w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "text-sm", "font-bold",
                    format!("bg-{}/20", tone), format!("text-{}", tone),
                )}>
                    {&member.initials}
                </div>
                <div class="flex-1 min-w-0">
                    <div class="text-sm font-semibold">{&member.name}</div>
                    <div class="text-xs opacity-60 truncate">{&member.reason}</div>
                </div>
                <div class="text-right">
                    <div class={classes!("text-sm", "font-bold", format!("text-{}", tone))}>
                        {format!("{}{}", sign, euros(member.amount))}
                    </div>
                    <div class="text-[10px] opacity-50">{format!("{}d ago", member.days_since)}</div>
                </div>
            </div>
            <div class="flex gap-2.5 pt-1">{action}</div>
        </Card>
    }
}
