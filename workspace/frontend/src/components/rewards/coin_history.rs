use stash_common::progress::history_preview;
use stash_common::{CoinEntryKind, CoinHistoryEntry};
use yew::prelude::*;

use crate::components::widgets::Card;

fn signed_amount(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", amount)
    } else {
        amount.to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct CoinHistoryProps {
    pub history: Vec<CoinHistoryEntry>,
}

/// Most recent wallet movements, newest first as the server sends them.
#[function_component(CoinHistory)]
pub fn coin_history(props: &CoinHistoryProps) -> Html {
    html! {
        <Card hover={false}>
            <div class="flex items-center gap-2 mb-4">
                <i class="fas fa-clock opacity-60 text-sm"></i>
                <span class="text-sm font-bold">{"Recent Activity"}</span>
            </div>
            <div class="space-y-1.5 max-h-64 overflow-y-auto">
                { for history_preview(&props.history).iter().map(|entry| {
                    let earned = entry.kind == CoinEntryKind::Earned;
                    let tone = if earned { "text-success" } else { "text-error" };
                    html! {
                        <div key={entry.id.clone()} class="flex items-center gap-3 py-2.5 px-3 rounded-xl hover:bg-base-200">
                            <div class={classes!("w-8", "h-8", "rounded-lg", "flex", "items-center", "justify-center", "bg-base-200", tone)}>
                                <i class={if earned { "fas fa-arrow-trend-up text-xs" } else { "fas fa-arrow-trend-down text-xs" }}></i>
                            </div>
                            <div class="flex-1 min-w-0">
                                <div class="text-sm font-medium truncate">{&entry.label}</div>
                                <div class="text-[10px] opacity-60">{format!("{} · {}", entry.date, entry.source)}</div>
                            </div>
                            <span class={classes!("text-sm", "font-bold", "tabular-nums", tone)}>{signed_amount(entry.amount)}</span>
                        </div>
                    }
                }) }
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(25), "+25");
        assert_eq!(signed_amount(-300), "-300");
        assert_eq!(signed_amount(0), "0");
    }
}
