use stash_common::progress::{coins_earned, completed_count};
use stash_common::{StreakData, SurvivalMission};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MilestonesProps {
    pub data: StreakData,
}

#[function_component(Milestones)]
pub fn milestones(props: &MilestonesProps) -> Html {
    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-4">
                <div class="w-7 h-7 rounded-lg bg-accent/10 flex items-center justify-center">
                    <i class="fas fa-trophy text-accent text-xs"></i>
                </div>
                <span class="text-sm font-semibold flex-1">{"Milestones"}</span>
                <Link<Route> to={Route::Streaks} classes="text-xs text-accent flex items-center gap-1">
                    {format!("Best: {}d", props.data.longest_streak)}
                    <i class="fas fa-chevron-right text-[10px]"></i>
                </Link<Route>>
            </div>
            <div class="grid grid-cols-3 md:grid-cols-6 gap-2">
                { for props.data.milestones.iter().map(|m| html! {
                    <div key={m.days} class={classes!(
                        "text-center", "p-2.5", "rounded-xl", "border",
                        if m.achieved { "bg-accent/5 border-accent/20" } else { "bg-base-200 border-base-300 opacity-40" },
                    )}>
                        <div class="text-xl">{&m.emoji}</div>
                        <div class="text-xs font-bold mt-1">{format!("{}d", m.days)}</div>
                        <div class="text-[9px] opacity-60 truncate">{&m.label}</div>
                        if let Some(coins) = m.coins {
                            <div class="flex items-center justify-center gap-0.5 text-[9px] text-warning mt-1">
                                <i class="fas fa-coins"></i>
                                <span>{coins}</span>
                            </div>
                        }
                        if m.achieved {
                            <Badge variant={BadgeVariant::Accent} small={true} class="mt-1">{"✓"}</Badge>
                        }
                    </div>
                }) }
            </div>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
pub struct CoinsCtaProps {
    pub coins: i64,
}

#[function_component(CoinsCta)]
pub fn coins_cta(props: &CoinsCtaProps) -> Html {
    html! {
        <Link<Route> to={Route::Rewards} classes="flex items-center gap-4 p-4 rounded-2xl bg-gradient-to-r from-warning/10 to-accent/10 border border-warning/20 hover:border-warning/40 transition-all">
            <div class="w-10 h-10 rounded-xl bg-warning/15 flex items-center justify-center">
                <i class="fas fa-coins text-warning"></i>
            </div>
            <div class="flex-1">
                <div class="text-sm font-semibold">
                    {"You have "}<span class="text-warning">{format!("{} coins", props.coins)}</span>
                </div>
                <div class="text-[11px] opacity-60">{"Complete missions & streaks to earn more, then redeem them for rewards!"}</div>
            </div>
            <i class="fas fa-chevron-right opacity-40"></i>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DailyMissionsProps {
    pub missions: Vec<SurvivalMission>,
    /// Mission whose toggle request is still in flight.
    pub toggling: Option<String>,
    pub on_toggle: Callback<String>,
}

#[function_component(DailyMissions)]
pub fn daily_missions(props: &DailyMissionsProps) -> Html {
    let missions = &props.missions;

    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-4">
                <div class="w-7 h-7 rounded-lg bg-success/10 flex items-center justify-center">
                    <i class="fas fa-bullseye text-success text-xs"></i>
                </div>
                <div class="flex-1">
                    <span class="block text-sm font-semibold">{"Daily Missions"}</span>
                    <span class="block text-[10px] opacity-60">
                        {format!("{}/{} completed", completed_count(missions), missions.len())}
                    </span>
                </div>
                <div class="flex items-center gap-1 text-xs text-warning">
                    <i class="fas fa-coins"></i>
                    <span>{format!("{} earned", coins_earned(missions))}</span>
                </div>
            </div>
            <div class="space-y-2">
                { for missions.iter().map(|mission| {
                    let busy = props.toggling.as_deref() == Some(mission.id.as_str());
                    let onclick = {
                        let on_toggle = props.on_toggle.clone();
                        let id = mission.id.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
                    };
                    html! {
                        <button
                            key={mission.id.clone()}
                            class={classes!(
                                "w-full", "flex", "items-center", "gap-3", "p-3.5", "rounded-xl", "border", "transition-all",
                                if mission.completed { "bg-success/5 border-success/20" } else { "bg-base-200 border-base-300 hover:border-accent/30" },
                                busy.then_some("opacity-50"),
                            )}
                            disabled={busy}
                            {onclick}
                        >
                            <div class={classes!(
                                "w-6", "h-6", "rounded-full", "flex", "items-center", "justify-center",
                                if mission.completed { "bg-success text-success-content" } else { "border-2 border-base-content/20" },
                            )}>
                                if mission.completed {
                                    <i class="fas fa-check text-xs"></i>
                                }
                            </div>
                            <span class={classes!("flex-1", "text-left", "text-sm", mission.completed.then_some("line-through opacity-60"))}>
                                {&mission.title}
                            </span>
                            <Badge variant={if mission.completed { BadgeVariant::Success } else { BadgeVariant::Accent }} small={true}>
                                <i class="fas fa-coins text-[9px] mr-1"></i>
                                {mission.reward_coins()}
                            </Badge>
                        </button>
                    }
                }) }
            </div>
        </Card>
    }
}
