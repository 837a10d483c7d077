use stash_common::Perk;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Properties, PartialEq)]
pub struct PerkCardProps {
    pub perk: Perk,
    /// True while this card's code was copied in the last couple of seconds.
    pub copied: bool,
    pub on_copy: Callback<String>,
}

#[function_component(PerkCard)]
pub fn perk_card(props: &PerkCardProps) -> Html {
    let perk = &props.perk;
    let hot = perk.is_hot.unwrap_or(false);
    let near = perk.near_you.unwrap_or(false);
    let active = perk.is_active.unwrap_or(false);
    let has_code = !perk.code.is_empty();

    let copy = {
        let on_copy = props.on_copy.clone();
        let code = perk.code.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(code.clone()))
    };

    let action = if active {
        html! {
            <span class="btn btn-xs btn-success btn-outline no-animation shrink-0">
                <i class="fas fa-check text-[10px]"></i>{" Active"}
            </span>
        }
    } else if has_code {
        html! {
            <button class="btn btn-xs btn-primary btn-outline shrink-0" onclick={copy.clone()}>
                <i class="fas fa-copy text-[10px]"></i>{" Copy"}
            </button>
        }
    } else {
        html! {
            <span class="btn btn-xs btn-primary btn-outline no-animation shrink-0">
                <i class="fas fa-arrow-up-right-from-square text-[10px]"></i>{" Get"}
            </span>
        }
    };

    html! {
        <Card hover={false} class={classes!("flex-row", "items-center", "gap-4", hot.then_some("ring-1 ring-warning/20"))}>
            <span class="text-3xl">{&perk.logo}</span>
            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-2 flex-wrap">
                    <span class="text-sm font-semibold">{&perk.brand}</span>
                    if hot {
                        <Badge variant={BadgeVariant::Warning}><i class="fas fa-fire text-[10px] mr-0.5"></i>{"Hot"}</Badge>
                    }
                    if near {
                        <Badge variant={BadgeVariant::Primary}><i class="fas fa-location-dot text-[10px] mr-0.5"></i>{"Near You"}</Badge>
                    }
                </div>
                <div class="text-xs opacity-70 mt-0.5">{&perk.deal}</div>
                if has_code {
                    <button class="inline-flex items-center gap-1 mt-1 text-xs text-primary hover:text-secondary" onclick={copy}>
                        if props.copied {
                            <i class="fas fa-check text-[10px]"></i>{" Copied!"}
                        } else {
                            <i class="fas fa-copy text-[10px]"></i>{format!(" {}", perk.code)}
                        }
                    </button>
                }
            </div>
            {action}
        </Card>
    }
}
