use stash_common::progress::total_xp;
use stash_common::{ClaimResponse, StreakData, StreakReward, SurvivalMission};
use yew::prelude::*;

use super::milestone_list::MilestoneList;
use super::mission_list::MissionList;
use super::reward_list::RewardList;
use crate::api_client::{streaks, ApiError};
use crate::common::fetch_hook::{use_fetch, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::common::toast::{ToastContext, ToastType};
use crate::components::widgets::{AiInsightCard, Card, CardVariant};

const CLAIM_TOAST_MS: u32 = 3000;

#[derive(Debug, PartialEq)]
struct ClaimSettled {
    toast: Option<(String, ToastType)>,
    refetch: bool,
}

/// A refused claim shows the server's reason; a failed request is only logged.
fn settle_claim(reward: &StreakReward, result: Result<ClaimResponse, ApiError>) -> ClaimSettled {
    match result {
        Ok(claim) if claim.success => ClaimSettled {
            toast: Some((format!("Claimed: {}", reward.reward), ToastType::Success)),
            refetch: true,
        },
        Ok(claim) => {
            log::warn!("Claim of {} refused: {:?}", reward.id, claim.message);
            ClaimSettled {
                toast: claim.message.map(|message| (message, ToastType::Warning)),
                refetch: false,
            }
        }
        Err(err) => {
            log::error!("Claiming reward {} failed: {}", reward.id, err);
            ClaimSettled {
                toast: None,
                refetch: false,
            }
        }
    }
}

#[function_component(Streaks)]
pub fn streaks_page() -> Html {
    let (streak_state, refetch_streaks) = use_fetch(streaks::get_streaks);
    let (mission_state, refetch_missions) = use_fetch(streaks::get_missions);
    let (reward_state, refetch_rewards) = use_fetch(streaks::get_rewards);
    let toast = use_context::<ToastContext>();
    let mounted = use_mount_token();
    let toggling = use_state(|| None::<String>);
    let claiming = use_state(|| None::<String>);

    let on_toggle = {
        let toggling = toggling.clone();
        let refetch_missions = refetch_missions.clone();
        let mounted = mounted.clone();
        Callback::from(move |mission_id: String| {
            toggling.set(Some(mission_id.clone()));
            let toggling = toggling.clone();
            let refetch_missions = refetch_missions.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let toggled = streaks::toggle_mission(&mission_id).await;
                if let Err(err) = &toggled {
                    log::error!("Toggling mission {} failed: {}", mission_id, err);
                }
                if mounted.is_cancelled() {
                    return;
                }
                toggling.set(None);
                if toggled.is_ok() {
                    refetch_missions.emit(());
                }
            });
        })
    };

    let on_claim = {
        let claiming = claiming.clone();
        let refetch_rewards = refetch_rewards.clone();
        Callback::from(move |reward: StreakReward| {
            claiming.set(Some(reward.id.clone()));
            let claiming = claiming.clone();
            let refetch_rewards = refetch_rewards.clone();
            let toast = toast.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let claimed = settle_claim(&reward, streaks::claim_reward(&reward.id).await);
                if let (Some(toast), Some((message, kind))) = (&toast, claimed.toast) {
                    toast.show_for(message, kind, CLAIM_TOAST_MS);
                }
                if mounted.is_cancelled() {
                    return;
                }
                claiming.set(None);
                if claimed.refetch {
                    refetch_rewards.emit(());
                }
            });
        })
    };

    let body = render_fetch(&streak_state, 5, Some(refetch_streaks), |data| {
        render_fetch(&mission_state, 3, Some(refetch_missions.clone()), |missions| {
            let rewards = reward_state.data().filter(|r| !r.is_empty());
            html! {
                <>
                    <StreakHero data={data.clone()} missions={missions.clone()} />
                    <AiInsightCard feature="streaks" compact={true} />
                    <MilestoneList data={data.clone()} />
                    <MissionList missions={missions.clone()} toggling={(*toggling).clone()} on_toggle={on_toggle.clone()} />
                    if let Some(rewards) = rewards {
                        <RewardList rewards={rewards.clone()} claiming={(*claiming).clone()} on_claim={on_claim.clone()} />
                    }
                    <StreakTips longest={data.longest_streak} />
                </>
            }
        })
    });

    html! {
        <div class="flex flex-col gap-5 max-w-3xl mx-auto">
            <div>
                <h1 class="text-2xl font-bold flex items-center gap-2.5">
                    <div class="w-8 h-8 rounded-lg bg-warning/10 flex items-center justify-center">
                        <i class="fas fa-fire text-warning"></i>
                    </div>
                    {"Streaks & Rewards"}
                </h1>
                <p class="text-sm opacity-70 mt-1">{"Stay under budget, earn rewards!"}</p>
            </div>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StreakHeroProps {
    data: StreakData,
    missions: Vec<SurvivalMission>,
}

#[function_component(StreakHero)]
fn streak_hero(props: &StreakHeroProps) -> Html {
    let status = if props.data.today_under_budget {
        html! { <i class="fas fa-circle-check text-success text-xl"></i> }
    } else {
        html! { <i class="fas fa-circle-xmark text-error text-xl"></i> }
    };

    html! {
        <Card variant={CardVariant::Gradient} hover={false} class="text-center py-8">
            <div class="text-7xl mb-3">{"🔥"}</div>
            <div class="text-5xl font-extrabold mb-1">{props.data.current_streak}</div>
            <div class="text-sm opacity-70">{"day streak"}</div>
            <div class="flex items-center justify-center gap-6 mt-4">
                <div>
                    <div class="text-lg font-bold">{props.data.longest_streak}</div>
                    <div class="text-xs opacity-60">{"Best Streak"}</div>
                </div>
                <div class="w-px h-8 bg-base-300"></div>
                <div>
                    <div>{status}</div>
                    <div class="text-xs opacity-60">{"Today's Status"}</div>
                </div>
                <div class="w-px h-8 bg-base-300"></div>
                <div>
                    <div class="text-lg font-bold text-primary">{total_xp(&props.missions)}</div>
                    <div class="text-xs opacity-60">{"XP Earned"}</div>
                </div>
            </div>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct StreakTipsProps {
    longest: u32,
}

#[function_component(StreakTips)]
fn streak_tips(props: &StreakTipsProps) -> Html {
    html! {
        <Card hover={false} class="bg-primary/5 border-primary/10">
            <div class="flex items-start gap-3">
                <i class="fas fa-lightbulb text-primary mt-1"></i>
                <div>
                    <div class="text-sm font-semibold">{"Streak Tips"}</div>
                    <ul class="text-xs opacity-70 mt-1 space-y-1">
                        <li>{"• Stay under your daily budget to maintain your streak"}</li>
                        <li>{"• Complete all daily missions for bonus XP"}</li>
                        <li>{"• Hit 30 days for a €10 Amazon gift card reward!"}</li>
                        <li>{format!("• Your longest streak was {} days. Can you beat it?", props.longest)}</li>
                    </ul>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reward() -> StreakReward {
        StreakReward {
            id: "sr-7".to_string(),
            milestone: "Week Warrior".to_string(),
            emoji: "🔥".to_string(),
            reward: "50 coins".to_string(),
            days: 7,
            claimed: false,
        }
    }

    #[test]
    fn test_successful_claim_toasts_and_reloads() {
        let claim = ClaimResponse {
            success: true,
            reward: Some("50 coins".to_string()),
            message: None,
        };
        let settled = settle_claim(&reward(), Ok(claim));
        assert_eq!(settled.toast, Some(("Claimed: 50 coins".to_string(), ToastType::Success)));
        assert!(settled.refetch);
    }

    #[test]
    fn test_refused_claim_warns_with_server_message() {
        let claim = ClaimResponse {
            success: false,
            reward: None,
            message: Some("Already claimed".to_string()),
        };
        let settled = settle_claim(&reward(), Ok(claim));
        assert_eq!(settled.toast, Some(("Already claimed".to_string(), ToastType::Warning)));
        assert!(!settled.refetch);
    }

    #[test]
    fn test_failed_claim_request_is_quiet() {
        let settled = settle_claim(&reward(), Err(ApiError::from_status(503, None)));
        assert_eq!(
            settled,
            ClaimSettled {
                toast: None,
                refetch: false,
            }
        );
    }
}
