use stash_common::progress::{all_complete, completed_count, total_xp};
use stash_common::SurvivalMission;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Properties, PartialEq)]
pub struct MissionListProps {
    pub missions: Vec<SurvivalMission>,
    pub toggling: Option<String>,
    pub on_toggle: Callback<String>,
}

/// Daily missions scored in XP.
#[function_component(MissionList)]
pub fn mission_list(props: &MissionListProps) -> Html {
    let done = completed_count(&props.missions);
    let finished = all_complete(&props.missions);

    html! {
        <Card hover={false}>
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center gap-2">
                    <i class="fas fa-bullseye text-primary text-sm"></i>
                    <span class="text-sm font-semibold">{"Daily Missions"}</span>
                </div>
                <Badge variant={if finished { BadgeVariant::Success } else { BadgeVariant::Neutral }}>
                    {format!("{}/{}", done, props.missions.len())}
                </Badge>
            </div>
            <div class="space-y-2">
                { for props.missions.iter().map(|mission| {
                    let onclick = {
                        let on_toggle = props.on_toggle.clone();
                        let id = mission.id.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
                    };
                    let tone = if mission.completed { "text-success" } else { "text-warning" };
                    html! {
                        <button
                            key={mission.id.clone()}
                            class={classes!(
                                "w-full", "flex", "items-center", "gap-3", "p-3.5", "rounded-xl", "border",
                                if mission.completed { "bg-success/10 border-success/10" } else { "bg-base-200 border-base-300 hover:border-primary/30" },
                            )}
                            disabled={props.toggling.as_deref() == Some(mission.id.as_str())}
                            {onclick}
                        >
                            <div class={classes!(
                                "w-7", "h-7", "rounded-full", "flex", "items-center", "justify-center",
                                if mission.completed { "bg-success text-success-content" } else { "border-2 border-base-content/30" },
                            )}>
                                if mission.completed {
                                    <i class="fas fa-check text-xs"></i>
                                }
                            </div>
                            <span class={classes!("flex-1", "text-left", "text-sm", mission.completed.then_some("line-through opacity-50"))}>
                                {&mission.title}
                            </span>
                            <span class={classes!("text-xs", "font-bold", tone)}>
                                <i class="fas fa-bolt mr-1"></i>{format!("{} XP", mission.xp)}
                            </span>
                        </button>
                    }
                }) }
            </div>
            if finished {
                <div class="mt-3 p-3 rounded-xl bg-success/10 text-center">
                    <p class="text-sm text-success font-semibold">{"All missions complete!"}</p>
                    <p class="text-xs opacity-60">{format!("+{} XP earned today", total_xp(&props.missions))}</p>
                </div>
            }
        </Card>
    }
}
