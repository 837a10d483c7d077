use stash_common::progress::milestone_progress;
use stash_common::StreakData;
use yew::prelude::*;

use crate::components::widgets::{Badge, BadgeVariant, Card};

#[derive(Properties, PartialEq)]
pub struct MilestoneListProps {
    pub data: StreakData,
}

#[function_component(MilestoneList)]
pub fn milestone_list(props: &MilestoneListProps) -> Html {
    let current = props.data.current_streak;

    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-trophy text-warning text-sm"></i>
                <span class="text-sm font-semibold">{"Milestones"}</span>
            </div>
            <div class="space-y-3">
                { for props.data.milestones.iter().map(|m| {
                    let progress = milestone_progress(current, m.days);
                    html! {
                        <div key={m.days} class={classes!(
                            "p-3.5", "rounded-xl", "border",
                            if m.achieved { "bg-success/5 border-success/10" } else { "bg-base-200 border-base-300" },
                        )}>
                            <div class="flex items-center gap-3">
                                <span class="text-2xl">{&m.emoji}</span>
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-center gap-2">
                                        <span class="text-sm font-semibold">{&m.label}</span>
                                        if m.achieved {
                                            <Badge variant={BadgeVariant::Success}>{"✓ Done"}</Badge>
                                        }
                                    </div>
                                    <div class="text-xs opacity-60 mt-0.5">{&m.reward}</div>
                                    if !m.achieved {
                                        <div class="mt-2">
                                            <div class="flex justify-between text-[10px] opacity-60 mb-1">
                                                <span>{format!("{}/{} days", current, m.days)}</span>
                                                <span>{format!("{:.0}%", progress)}</span>
                                            </div>
                                            <progress class="progress progress-primary w-full h-1.5" value={format!("{:.0}", progress)} max="100"></progress>
                                        </div>
                                    }
                                </div>
                                <div class={classes!("text-sm", "font-bold", "shrink-0", if m.achieved { "text-success" } else { "opacity-50" })}>
                                    {format!("{}d", m.days)}
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}
