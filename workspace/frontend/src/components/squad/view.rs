use rust_decimal::Decimal;
use stash_common::format::euros;
use stash_common::squad::SquadBalances;
use stash_common::{SquadActivity, SquadMember};
use yew::prelude::*;

use super::leaderboard::Leaderboard;
use super::member_card::MemberCard;
use super::split_modal::SplitModal;
use super::TOAST_MS;
use crate::api_client::squad;
use crate::common::fetch_hook::{use_fetch, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::common::toast::{ToastContext, ToastType};
use crate::components::widgets::{AiInsightCard, Card, CardVariant};

fn net_label(net: Decimal) -> String {
    if net.is_sign_negative() && !net.is_zero() {
        format!("-{}", euros(net.abs()))
    } else {
        format!("+{}", euros(net))
    }
}

#[function_component(Squad)]
pub fn squad() -> Html {
    let (state, refetch) = use_fetch(squad::get_squad);
    let toast = use_context::<ToastContext>();
    let mounted = use_mount_token();
    let show_split = use_state(|| false);
    let nudging = use_state(|| None::<String>);
    let settling = use_state(|| None::<String>);

    let notify = {
        let toast = toast.clone();
        Callback::from(move |message: String| {
            if let Some(toast) = &toast {
                toast.show_for(message, ToastType::Info, TOAST_MS);
            }
        })
    };

    let on_nudge = {
        let nudging = nudging.clone();
        let notify = notify.clone();
        let mounted = mounted.clone();
        Callback::from(move |member: SquadMember| {
            nudging.set(Some(member.id.clone()));
            let nudging = nudging.clone();
            let notify = notify.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match squad::nudge(&member.id).await {
                    Ok(_) => notify.emit(format!("Nudged {} — they'll feel the shame!", member.name)),
                    Err(err) => {
                        log::error!("Nudging {} failed: {}", member.id, err);
                        notify.emit("Nudge failed".to_string());
                    }
                }
                if !mounted.is_cancelled() {
                    nudging.set(None);
                }
            });
        })
    };

    let on_settle = {
        let settling = settling.clone();
        let notify = notify.clone();
        let refetch = refetch.clone();
        let mounted = mounted.clone();
        Callback::from(move |member: SquadMember| {
            settling.set(Some(member.id.clone()));
            let settling = settling.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let settled = match squad::settle(&member.id, Decimal::ZERO).await {
                    Ok(_) => {
                        notify.emit(format!("Settled up with {}!", member.name));
                        true
                    }
                    Err(err) => {
                        log::error!("Settling with {} failed: {}", member.id, err);
                        notify.emit("Settle failed".to_string());
                        false
                    }
                };
                if mounted.is_cancelled() {
                    return;
                }
                settling.set(None);
                if settled {
                    refetch.emit(());
                }
            });
        })
    };

    let on_open_split = {
        let show_split = show_split.clone();
        Callback::from(move |_: MouseEvent| show_split.set(true))
    };

    let on_close_split = {
        let show_split = show_split.clone();
        Callback::from(move |_: ()| show_split.set(false))
    };

    let on_split_done = {
        let show_split = show_split.clone();
        let notify = notify.clone();
        let refetch = refetch.clone();
        Callback::from(move |message: String| {
            show_split.set(false);
            notify.emit(message);
            refetch.emit(());
        })
    };

    let body = render_fetch(&state, 4, Some(refetch.clone()), |data| {
        let balances = SquadBalances::compute(&data.members);
        let net = balances.net();
        let net_tone = if net.is_sign_negative() && !net.is_zero() { "error" } else { "success" };

        html! {
            <>
                if *show_split {
                    <SplitModal
                        members={data.members.clone()}
                        on_close={on_close_split.clone()}
                        on_split={on_split_done.clone()}
                        on_failed={notify.reform(|_: ()| "Split failed".to_string())}
                    />
                }

                <div class="grid grid-cols-2 gap-3.5">
                    <Card hover={false} class="text-center bg-success/5 border-success/10">
                        <div class="text-xs opacity-60 mb-1">{"You're Owed"}</div>
                        <div class="text-2xl font-bold text-success tabular-nums">{euros(balances.owed_to_you)}</div>
                    </Card>
                    <Card hover={false} class="text-center bg-error/5 border-error/10">
                        <div class="text-xs opacity-60 mb-1">{"You Owe"}</div>
                        <div class="text-2xl font-bold text-error tabular-nums">{euros(balances.you_owe)}</div>
                    </Card>
                </div>

                <Card variant={CardVariant::Elevated} hover={false} class={classes!("text-center", format!("bg-{}/5", net_tone))}>
                    <div class="text-xs opacity-60 mb-1">{"Net Balance"}</div>
                    <div class={classes!("text-xl", "font-bold", format!("text-{}", net_tone))}>{net_label(net)}</div>
                </Card>

                <h2 class="text-sm font-semibold flex items-center gap-2">
                    <i class="fas fa-users text-primary text-xs"></i>{"Members"}
                </h2>
                { for data.members.iter().map(|member| html! {
                    <MemberCard
                        key={member.id.clone()}
                        member={member.clone()}
                        nudging={nudging.as_deref() == Some(member.id.as_str())}
                        settling={settling.as_deref() == Some(member.id.as_str())}
                        on_nudge={on_nudge.clone()}
                        on_settle={on_settle.clone()}
                    />
                }) }

                <ActivityFeed activity={data.activity.clone()} />
                <Leaderboard members={data.members.clone()} />
            </>
        }
    });

    html! {
        <div class="flex flex-col gap-5 max-w-3xl mx-auto">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold flex items-center gap-2.5">
                    <div class="w-8 h-8 rounded-lg bg-primary/10 flex items-center justify-center">
                        <i class="fas fa-users text-primary"></i>
                    </div>
                    {"The Squad"}
                </h1>
                <button class="btn btn-sm btn-primary" onclick={on_open_split}>
                    <i class="fas fa-plus"></i>{" Split Expense"}
                </button>
            </div>

            <AiInsightCard feature="squad" compact={true} />

            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityFeedProps {
    activity: Vec<SquadActivity>,
}

#[function_component(ActivityFeed)]
fn activity_feed(props: &ActivityFeedProps) -> Html {
    html! {
        <Card hover={false}>
            <h3 class="text-sm font-semibold mb-3 flex items-center gap-2">
                <i class="fas fa-bolt text-primary text-xs"></i>{"Recent Activity"}
            </h3>
            <div class="space-y-2">
                { for props.activity.iter().map(|a| html! {
                    <div key={a.id.clone()} class="flex items-center gap-3 text-sm">
                        <span>{&a.emoji}</span>
                        <span class="flex-1 opacity-80">{&a.text}</span>
                        <span class="text-xs opacity-50">{&a.time}</span>
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_label_sign() {
        assert_eq!(net_label(Decimal::new(2940, 2)), "+€29.40");
        assert_eq!(net_label(Decimal::new(-500, 2)), "-€5.00");
        assert_eq!(net_label(Decimal::ZERO), "+€0.00");
    }
}
