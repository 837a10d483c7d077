use stash_common::format::{clock_24h, format_currency};
use stash_common::{MissedPerk, TransactionDto, TransactionKind};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::widgets::Badge;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct TransactionRowProps {
    pub transaction: TransactionDto,
    pub expanded: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(TransactionRow)]
pub fn transaction_row(props: &TransactionRowProps) -> Html {
    let tx = &props.transaction;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = tx.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    let dismiss_label = if tx.kind == TransactionKind::Roast { "Needed it" } else { "Dismiss" };

    html! {
        <div class={classes!(
            "bg-base-100", "border", "rounded-xl", "transition-all", "cursor-pointer",
            if props.expanded { "border-accent/30 shadow-md" } else { "border-base-300 hover:border-base-content/20" },
        )}>
            <div class="flex items-center gap-3 px-4 py-3" {onclick}>
                <span class="text-xl shrink-0">{&tx.icon}</span>
                <div class="flex-1 min-w-0">
                    <div class="text-sm font-semibold truncate">{&tx.merchant}</div>
                    <div class="flex items-center gap-2 mt-0.5">
                        <Badge small={true}>{tx.category.clone()}</Badge>
                        <span class="text-[10px] opacity-50">{clock_24h(&tx.date)}</span>
                    </div>
                </div>
                <span class="text-sm font-bold tabular-nums">{format_currency(tx.amount, &tx.currency)}</span>
                <i class={classes!("fas", "fa-chevron-right", "text-xs", "opacity-40", "transition-transform", props.expanded.then_some("rotate-90"))}></i>
            </div>

            if props.expanded {
                <div class="px-4 pb-4 space-y-2.5 border-t border-base-300 pt-3">
                    if !tx.ai_roast.is_empty() {
                        <div class="flex items-start gap-2.5 p-3 rounded-lg bg-base-200">
                            <span>{&tx.roast_emoji}</span>
                            <p class="text-xs italic opacity-80">{&tx.ai_roast}</p>
                        </div>
                    }
                    if let Some(perk) = &tx.perk_missed {
                        <div class="flex items-center gap-2.5 p-3 rounded-lg bg-warning/10 border border-warning/20">
                            <span>{"🎓"}</span>
                            <p class="text-xs flex-1">
                                {"Missed "}<strong class="text-warning">{&perk.discount}</strong>
                                {missed_perk_saving(perk, &tx.currency)}
                            </p>
                            <Link<Route> to={Route::Perks} classes="btn btn-xs btn-warning">{"Get Code"}</Link<Route>>
                        </div>
                    }
                    <div class="flex gap-2">
                        <button class="btn btn-xs btn-ghost border border-base-300">{dismiss_label}</button>
                        <Link<Route> to={Route::Squad} classes="btn btn-xs btn-ghost border border-base-300">
                            <i class="fas fa-users text-[10px]"></i>{" Split"}
                        </Link<Route>>
                        <button class="btn btn-xs btn-ghost border border-base-300">
                            <i class="fas fa-file-lines text-[10px]"></i>{" Note"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

/// Tail of the missed-perk line; the saving is shown in the transaction's currency.
fn missed_perk_saving(perk: &MissedPerk, currency: &str) -> String {
    format!(" discount, could've saved {}", format_currency(perk.saved_amount, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_missed_perk_saving_uses_transaction_currency() {
        let perk = MissedPerk {
            discount: "10%".to_string(),
            brand: "Tesco".to_string(),
            code: "STU10".to_string(),
            saved_amount: Decimal::new(125, 2),
        };
        assert_eq!(missed_perk_saving(&perk, "EUR"), " discount, could've saved €1.25");
        assert_eq!(missed_perk_saving(&perk, "GBP"), " discount, could've saved £1.25");
    }
}
