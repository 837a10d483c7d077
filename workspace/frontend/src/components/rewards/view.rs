use stash_common::progress::{filter_rewards, purchased_count};
use stash_common::{CoinsData, PurchaseResponse, RewardCategory};
use yew::prelude::*;

use super::coin_history::CoinHistory;
use super::reward_card::RewardCard;
use crate::api_client::{coins, ApiError};
use crate::common::fetch_hook::{use_fetch, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::common::toast::{ToastContext, ToastType};
use crate::components::widgets::{AiInsightCard, Card};

const PURCHASE_TOAST_MS: u32 = 3000;
const TRANSPORT_FAILURE: &str = "Something went wrong";

struct EarnWay {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    coins: &'static str,
}

const EARN_WAYS: [EarnWay; 3] = [
    EarnWay { icon: "🎯", title: "Daily Missions", desc: "Complete daily saving challenges", coins: "15-50 per mission" },
    EarnWay { icon: "🔥", title: "Streak Milestones", desc: "Keep your budget streak alive", coins: "50-600 per milestone" },
    EarnWay { icon: "🏆", title: "Achievements", desc: "Unlock special accomplishments", coins: "Bonus rewards" },
];

fn filter_label(category: Option<RewardCategory>) -> &'static str {
    category.map_or("All Rewards", |c| c.label())
}

fn filter_icon(category: Option<RewardCategory>) -> &'static str {
    match category {
        None => "fas fa-gift",
        Some(RewardCategory::Coupon) => "fas fa-tag",
        Some(RewardCategory::App) => "fas fa-wand-magic-sparkles",
        Some(RewardCategory::Badge) => "fas fa-bag-shopping",
    }
}

/// Toast text and type for a purchase answer that reached the server.
fn purchase_outcome(response: &PurchaseResponse) -> (String, ToastType) {
    match (response.success, response.message.clone()) {
        (true, Some(message)) => (message, ToastType::Success),
        (true, None) => ("Reward redeemed!".to_string(), ToastType::Success),
        (false, Some(message)) => (message, ToastType::Error),
        (false, None) => ("Purchase failed".to_string(), ToastType::Error),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PurchaseSettled {
    message: String,
    kind: ToastType,
    /// Shop and wallet are only reloaded after a purchase went through.
    refetch: bool,
}

fn settle_purchase(result: Result<PurchaseResponse, ApiError>) -> PurchaseSettled {
    match result {
        Ok(response) => {
            let (message, kind) = purchase_outcome(&response);
            PurchaseSettled {
                message,
                kind,
                refetch: response.success,
            }
        }
        Err(err) => {
            log::error!("Reward purchase failed: {}", err);
            PurchaseSettled {
                message: TRANSPORT_FAILURE.to_string(),
                kind: ToastType::Error,
                refetch: false,
            }
        }
    }
}

#[function_component(Rewards)]
pub fn rewards() -> Html {
    let (shop_state, refetch_shop) = use_fetch(coins::get_shop);
    let (coin_state, refetch_coins) = use_fetch(coins::get_coins);
    let toast = use_context::<ToastContext>();
    let mounted = use_mount_token();
    let category = use_state(|| None::<RewardCategory>);
    let purchasing = use_state(|| None::<String>);
    let show_history = use_state(|| false);

    let on_purchase = {
        let purchasing = purchasing.clone();
        let refetch_shop = refetch_shop.clone();
        let refetch_coins = refetch_coins.clone();
        Callback::from(move |reward_id: String| {
            purchasing.set(Some(reward_id.clone()));
            let purchasing = purchasing.clone();
            let refetch_shop = refetch_shop.clone();
            let refetch_coins = refetch_coins.clone();
            let toast = toast.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let settled = settle_purchase(coins::purchase(&reward_id).await);
                if let Some(toast) = &toast {
                    toast.show_for(settled.message, settled.kind, PURCHASE_TOAST_MS);
                }
                if mounted.is_cancelled() {
                    return;
                }
                purchasing.set(None);
                if settled.refetch {
                    refetch_shop.emit(());
                    refetch_coins.emit(());
                }
            });
        })
    };

    let on_toggle_history = {
        let show_history = show_history.clone();
        Callback::from(move |_: MouseEvent| show_history.set(!*show_history))
    };

    let body = render_fetch(&shop_state, 6, Some(refetch_shop.clone()), |shop| {
        render_fetch(&coin_state, 2, Some(refetch_coins.clone()), |wallet| {
            let visible = filter_rewards(&shop.rewards, *category);
            let filters = std::iter::once(None).chain(RewardCategory::ALL.into_iter().map(Some));

            html! {
                <>
                    <BalanceHeader
                        wallet={wallet.clone()}
                        redeemed={purchased_count(&shop.rewards)}
                        on_toggle_history={on_toggle_history.clone()}
                    />

                    if *show_history && !wallet.history.is_empty() {
                        <CoinHistory history={wallet.history.clone()} />
                    }

                    <HowToEarn />

                    <div class="flex items-center gap-2 overflow-x-auto pb-1">
                        <i class="fas fa-filter opacity-50 text-sm shrink-0"></i>
                        { for filters.map(|option| {
                            let onclick = {
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| category.set(option))
                            };
                            html! {
                                <button
                                    key={filter_label(option)}
                                    class={classes!("btn", "btn-sm", "whitespace-nowrap", if *category == option { "btn-accent" } else { "btn-ghost border-base-300" })}
                                    {onclick}
                                >
                                    <i class={filter_icon(option)}></i>
                                    {filter_label(option)}
                                </button>
                            }
                        }) }
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        { for visible.iter().map(|reward| html! {
                            <RewardCard
                                key={reward.id.clone()}
                                reward={(*reward).clone()}
                                balance={wallet.balance}
                                purchasing={purchasing.as_deref() == Some(reward.id.as_str())}
                                on_purchase={on_purchase.clone()}
                            />
                        }) }
                    </div>

                    if visible.is_empty() {
                        <div class="text-center py-12 opacity-60">
                            <i class="fas fa-gift text-3xl mb-3"></i>
                            <p class="text-sm font-medium">{"No rewards in this category yet"}</p>
                        </div>
                    }
                </>
            }
        })
    });

    html! {
        <div class="flex flex-col gap-5 max-w-3xl mx-auto">
            <AiInsightCard feature="rewards" compact={true} />
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BalanceHeaderProps {
    wallet: CoinsData,
    redeemed: usize,
    on_toggle_history: Callback<MouseEvent>,
}

#[function_component(BalanceHeader)]
fn balance_header(props: &BalanceHeaderProps) -> Html {
    let wallet = &props.wallet;
    html! {
        <div class="rounded-3xl bg-gradient-to-br from-base-100 to-base-200 border border-base-300 shadow-lg p-6 md:p-8">
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 rounded-2xl bg-gradient-to-br from-accent to-warning flex items-center justify-center">
                        <i class="fas fa-coins text-base-100 text-xl"></i>
                    </div>
                    <div>
                        <h1 class="text-lg font-bold">{"Rewards Shop"}</h1>
                        <p class="text-xs opacity-60 font-medium">{"Earn coins, redeem rewards"}</p>
                    </div>
                </div>
                <button class="btn btn-sm btn-ghost border-base-300" onclick={props.on_toggle_history.clone()}>
                    <i class="fas fa-clock"></i>{" History"}
                </button>
            </div>
            <div class="text-center mb-6">
                <div class="text-[10px] opacity-60 uppercase tracking-[0.25em] font-bold mb-2">{"Your Balance"}</div>
                <div class="flex items-baseline justify-center gap-2">
                    <span class="text-5xl md:text-6xl font-extrabold tracking-tighter text-warning">{wallet.balance}</span>
                    <span class="text-lg text-accent font-bold">{"coins"}</span>
                </div>
                <p class="text-xs opacity-60 mt-1">{format!("{} coins earned all time", wallet.lifetime)}</p>
            </div>
            <div class="grid grid-cols-3 gap-3">
                <Stat value={wallet.lifetime.to_string()} label="Total Earned" tone="text-accent" />
                <Stat value={(wallet.lifetime - wallet.balance).to_string()} label="Spent" tone="" />
                <Stat value={props.redeemed.to_string()} label="Redeemed" tone="text-success" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    value: String,
    label: &'static str,
    tone: &'static str,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="text-center p-3 rounded-xl bg-base-200 border border-base-300">
            <div class={classes!("text-base", "font-bold", "tabular-nums", props.tone)}>{&props.value}</div>
            <div class="text-[9px] opacity-60 font-bold uppercase tracking-wider">{props.label}</div>
        </div>
    }
}

#[function_component(HowToEarn)]
fn how_to_earn() -> Html {
    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2.5 mb-4">
                <i class="fas fa-wand-magic-sparkles text-accent"></i>
                <div>
                    <span class="text-sm font-bold block">{"How to Earn Coins"}</span>
                    <span class="text-[10px] opacity-60 font-medium">{"Complete tasks to fill your wallet"}</span>
                </div>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-2.5">
                { for EARN_WAYS.iter().map(|way| html! {
                    <div key={way.title} class="p-3.5 rounded-xl bg-base-200 border border-base-300">
                        <span class="text-xl block mb-2">{way.icon}</span>
                        <div class="text-xs font-bold mb-0.5">{way.title}</div>
                        <div class="text-[10px] opacity-60 mb-2">{way.desc}</div>
                        <div class="text-[10px] text-accent font-bold"><i class="fas fa-coins mr-1"></i>{way.coins}</div>
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_common::progress::RewardState;
    use stash_common::ShopReward;

    #[test]
    fn test_refused_purchase_uses_server_message() {
        let response: PurchaseResponse =
            serde_json::from_str(r#"{"success": false, "message": "Not enough coins. Need 500, have 120"}"#).unwrap();
        let (message, kind) = purchase_outcome(&response);
        assert_eq!(message, "Not enough coins. Need 500, have 120");
        assert_eq!(kind, ToastType::Error);
    }

    #[test]
    fn test_successful_purchase_without_message() {
        let response = PurchaseResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(
            purchase_outcome(&response),
            ("Reward redeemed!".to_string(), ToastType::Success)
        );
    }

    #[test]
    fn test_refused_purchase_keeps_displayed_state() {
        let reward = ShopReward {
            id: "rw-1".to_string(),
            name: "Free coffee".to_string(),
            description: String::new(),
            emoji: "☕".to_string(),
            cost: 500,
            category: RewardCategory::Coupon,
            stock: Some(3),
            purchased: false,
            purchased_at: None,
        };
        let wallet = CoinsData {
            balance: 120,
            lifetime: 400,
            history: Vec::new(),
        };

        let response: PurchaseResponse =
            serde_json::from_str(r#"{"success": false, "message": "Not enough coins. Need 500, have 120"}"#).unwrap();
        let settled = settle_purchase(Ok(response));
        assert!(!settled.refetch);
        assert_eq!(settled.kind, ToastType::Error);

        // Without a refetch the page keeps rendering the data it already had.
        assert!(!reward.purchased);
        assert_eq!(wallet.balance, 120);
        assert_eq!(RewardState::of(&reward, wallet.balance), RewardState::TooExpensive { short_by: 380 });
    }

    #[test]
    fn test_accepted_purchase_reloads_shop_and_wallet() {
        let response = PurchaseResponse {
            success: true,
            new_balance: Some(20),
            ..Default::default()
        };
        let settled = settle_purchase(Ok(response));
        assert!(settled.refetch);
        assert_eq!(settled.kind, ToastType::Success);
    }

    #[test]
    fn test_transport_failure_does_not_reload() {
        let settled = settle_purchase(Err(ApiError::Request("NetworkError".to_string())));
        assert_eq!(
            settled,
            PurchaseSettled {
                message: "Something went wrong".to_string(),
                kind: ToastType::Error,
                refetch: false,
            }
        );
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(filter_label(None), "All Rewards");
        assert_eq!(filter_label(Some(RewardCategory::App)), "App Perks");
    }
}
