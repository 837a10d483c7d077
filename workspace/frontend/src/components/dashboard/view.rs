use yew::prelude::*;

use super::funds::FundsRow;
use super::hero::{Hero, QuickActions};
use super::missions::{CoinsCta, DailyMissions, Milestones};
use super::runway::{BurnRate, RunwayPrediction, SafeToSpend};
use crate::api_client::{dashboard, streaks};
use crate::common::fetch_hook::{use_fetch, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::common::toast::{ToastContext, ToastType};
use crate::components::widgets::AiInsightCard;

const COIN_TOAST_MS: u32 = 2500;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (summary, refetch_summary) = use_fetch(dashboard::get_dashboard);
    let (streak_data, _) = use_fetch(streaks::get_streaks);
    let (missions, refetch_missions) = use_fetch(streaks::get_missions);
    let toggling = use_state(|| None::<String>);
    let toast = use_context::<ToastContext>();
    let mounted = use_mount_token();

    let on_toggle_mission = {
        let toggling = toggling.clone();
        let refetch_missions = refetch_missions.clone();

        Callback::from(move |mission_id: String| {
            let toggling = toggling.clone();
            let refetch_missions = refetch_missions.clone();
            let toast = toast.clone();
            let mounted = mounted.clone();
            toggling.set(Some(mission_id.clone()));

            wasm_bindgen_futures::spawn_local(async move {
                match streaks::toggle_mission(&mission_id).await {
                    Ok(result) => {
                        refetch_missions.emit(());
                        if result.coins_earned > 0 {
                            log::info!("Mission {} earned {} coins", mission_id, result.coins_earned);
                            if let Some(toast) = &toast {
                                toast.show_for(
                                    format!("+{} coins · Mission complete!", result.coins_earned),
                                    ToastType::Success,
                                    COIN_TOAST_MS,
                                );
                            }
                        }
                    }
                    Err(e) => log::error!("Failed to toggle mission {}: {}", mission_id, e),
                }
                if !mounted.is_cancelled() {
                    toggling.set(None);
                }
            });
        })
    };

    let on_retry = Some(refetch_summary);
    let toggling_id = (*toggling).clone();

    render_fetch(&summary, 5, on_retry, move |data| {
        log::debug!("Rendering dashboard for {}", data.user.name);
        html! {
            <div class="flex flex-col gap-5 max-w-5xl mx-auto">
                <Hero data={data.clone()} />
                <QuickActions />
                <AiInsightCard feature="dashboard" />
                <SafeToSpend budget={data.budget.clone()} runway={data.runway.clone()} />
                <RunwayPrediction runway={data.runway.clone()} />
                <BurnRate budget={data.budget.clone()} runway={data.runway.clone()} />
                <FundsRow budget={data.budget.clone()} runway={data.runway.clone()} streak_days={data.streak.days} />
                if let Some(streak_data) = streak_data.data() {
                    <Milestones data={streak_data.clone()} />
                }
                <CoinsCta coins={data.coins} />
                if let Some(missions) = missions.data().filter(|m| !m.is_empty()) {
                    <DailyMissions
                        missions={missions.clone()}
                        toggling={toggling_id.clone()}
                        on_toggle={on_toggle_mission.clone()}
                    />
                }
            </div>
        }
    })
}
