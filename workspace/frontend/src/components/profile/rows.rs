use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatTileProps {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub tone: &'static str,
}

#[function_component(StatTile)]
pub fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class="flex flex-col gap-2 p-3.5 rounded-2xl bg-base-100 border border-base-300">
            <div class={classes!("w-9", "h-9", "rounded-xl", "flex", "items-center", "justify-center", format!("bg-{}/10", props.tone))}>
                <i class={classes!(props.icon, format!("text-{}", props.tone))}></i>
            </div>
            <div>
                <p class="text-lg font-bold leading-tight">{&props.value}</p>
                <p class="text-[11px] opacity-60 mt-0.5">{props.label}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatRowProps {
    pub label: &'static str,
    pub value: String,
}

#[function_component(StatRow)]
pub fn stat_row(props: &StatRowProps) -> Html {
    html! {
        <div class="flex items-center justify-between py-2 border-b border-base-300/50 last:border-0">
            <span class="text-xs opacity-60">{props.label}</span>
            <span class="text-sm font-semibold">{&props.value}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoRowProps {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Settings rows show the value as a chip.
    #[prop_or_default]
    pub chip: bool,
}

#[function_component(InfoRow)]
pub fn info_row(props: &InfoRowProps) -> Html {
    html! {
        <div class="flex items-center gap-3 py-2.5 border-b border-base-300/50 last:border-0">
            <i class={classes!(props.icon, "opacity-50", "w-4", "shrink-0")}></i>
            <div class="flex-1 min-w-0 flex items-center justify-between gap-2">
                <span class={if props.chip { "text-sm" } else { "text-xs opacity-60 shrink-0" }}>{props.label}</span>
                if props.chip {
                    <span class="text-xs font-medium px-2 py-0.5 rounded-md bg-base-200">{&props.value}</span>
                } else {
                    <span class="text-sm truncate text-right">{&props.value}</span>
                }
            </div>
        </div>
    }
}
