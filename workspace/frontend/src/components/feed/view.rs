use chrono::Local;
use stash_common::feed::{category_icon, filter_by_category, group_by_day, FeedSummary, FILTER_CATEGORIES};
use stash_common::format::{capitalize, euros};
use stash_common::receipt::{ReceiptDraft, SCAN_FAILED};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::expense_modal::ExpenseModal;
use super::receipt_modal::ReceiptModal;
use super::transaction_row::TransactionRow;
use crate::api_client::transactions;
use crate::common::fetch_hook::{use_fetch, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::AiInsightCard;

fn pill_label(category: Option<&str>) -> String {
    match category {
        None => "✦ All".to_string(),
        Some(category) => format!("{} {}", category_icon(category), capitalize(category)),
    }
}

#[function_component(Feed)]
pub fn feed() -> Html {
    let (state, refetch) = use_fetch(transactions::get_transactions);
    let filter = use_state(|| None::<&'static str>);
    let expanded = use_state(|| None::<String>);
    let show_add = use_state(|| false);
    let receipt = use_state(|| None::<ReceiptDraft>);
    let scanning = use_state(|| false);
    let scan_error = use_state(|| None::<String>);
    let mounted = use_mount_token();
    let file_input = use_node_ref();

    let on_pick_file = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let receipt = receipt.clone();
        let scanning = scanning.clone();
        let scan_error = scan_error.clone();
        let mounted = mounted.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            let Some(file) = file else {
                return;
            };

            log::info!("Scanning receipt {} ({} bytes)", file.name(), file.size());
            scanning.set(true);
            scan_error.set(None);

            let receipt = receipt.clone();
            let scanning = scanning.clone();
            let scan_error = scan_error.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let scanned = transactions::scan_receipt(file).await;
                if mounted.is_cancelled() {
                    return;
                }
                match scanned {
                    Ok(response) => match ReceiptDraft::from_scan(response) {
                        Ok(draft) => {
                            log::debug!("Receipt parsed with {} items via {:?}", draft.items.len(), draft.method);
                            receipt.set(Some(draft));
                        }
                        Err(message) => {
                            log::warn!("Receipt not readable: {}", message);
                            scan_error.set(Some(message));
                        }
                    },
                    Err(e) => {
                        log::error!("Receipt scan failed: {}", e);
                        scan_error.set(Some(SCAN_FAILED.to_string()));
                    }
                }
                scanning.set(false);
            });
        })
    };

    let on_dismiss_error = {
        let scan_error = scan_error.clone();
        Callback::from(move |_: MouseEvent| scan_error.set(None))
    };

    let on_open_add = {
        let show_add = show_add.clone();
        Callback::from(move |_: MouseEvent| show_add.set(true))
    };

    let on_close_add = {
        let show_add = show_add.clone();
        Callback::from(move |_: ()| show_add.set(false))
    };

    let on_added = {
        let show_add = show_add.clone();
        let refetch = refetch.clone();
        Callback::from(move |_: ()| {
            show_add.set(false);
            refetch.emit(());
        })
    };

    let on_close_receipt = {
        let receipt = receipt.clone();
        Callback::from(move |_: ()| receipt.set(None))
    };

    let on_receipt_added = {
        let receipt = receipt.clone();
        let refetch = refetch.clone();
        Callback::from(move |_: ()| {
            receipt.set(None);
            refetch.emit(());
        })
    };

    let on_toggle_row = {
        let expanded = expanded.clone();
        Callback::from(move |id: String| {
            if expanded.as_deref() == Some(id.as_str()) {
                expanded.set(None);
            } else {
                expanded.set(Some(id));
            }
        })
    };

    let pills = std::iter::once(None).chain(FILTER_CATEGORIES.iter().copied().map(Some));

    let list = render_fetch(&state, 5, Some(refetch.clone()), |data| {
        let now = Local::now().naive_local();
        let summary = FeedSummary::compute(data, now);
        let visible = filter_by_category(data, *filter);
        let groups = group_by_day(visible.iter().copied(), now);
        log::debug!("Feed shows {} of {} transactions in {} groups", visible.len(), data.len(), groups.len());

        html! {
            <>
                <div class="grid grid-cols-3 gap-3">
                    <div class="stat bg-base-100 rounded-xl border border-base-300 p-3">
                        <div class="stat-title text-[10px] uppercase">{"This Week"}</div>
                        <div class="stat-value text-lg">{euros(summary.week_total)}</div>
                    </div>
                    <div class="stat bg-base-100 rounded-xl border border-base-300 p-3">
                        <div class="stat-title text-[10px] uppercase">{"Transactions"}</div>
                        <div class="stat-value text-lg">{summary.count}</div>
                    </div>
                    <div class="stat bg-base-100 rounded-xl border border-base-300 p-3">
                        <div class="stat-title text-[10px] uppercase">{"Top Category"}</div>
                        <div class="stat-value text-lg capitalize">{summary.top_category.clone().unwrap_or_else(|| "—".to_string())}</div>
                    </div>
                </div>
                <div class="flex items-center justify-end text-sm">
                    <span class="opacity-60 mr-2">{"Today"}</span>
                    <span class="font-bold text-error">{euros(summary.today_total)}</span>
                </div>

                { for groups.iter().map(|group| html! {
                    <div key={group.label.clone()} class="space-y-2">
                        <div class="flex items-center gap-3 px-1">
                            <span class="text-[10px] font-bold uppercase tracking-wider opacity-60">{&group.label}</span>
                            <div class="flex-1 h-px bg-base-300"></div>
                            <span class="text-[11px] font-semibold opacity-60 tabular-nums">{euros(group.subtotal())}</span>
                        </div>
                        { for group.transactions.iter().map(|tx| html! {
                            <TransactionRow
                                key={tx.id.clone()}
                                transaction={(*tx).clone()}
                                expanded={expanded.as_deref() == Some(tx.id.as_str())}
                                on_toggle={on_toggle_row.clone()}
                            />
                        }) }
                    </div>
                }) }

                if visible.is_empty() {
                    <div class="text-center py-12">
                        <div class="w-14 h-14 mx-auto rounded-2xl bg-base-300 flex items-center justify-center mb-3">
                            <i class="fas fa-receipt text-2xl opacity-40"></i>
                        </div>
                        <p class="font-semibold">{"No transactions found"}</p>
                        <p class="text-xs opacity-60">{"Try a different category filter"}</p>
                    </div>
                }
            </>
        }
    });

    html! {
        <div class="flex flex-col gap-4 max-w-3xl mx-auto">
            <h1 class="flex items-center gap-2.5 text-xl font-bold">
                <div class="w-8 h-8 rounded-lg bg-primary/10 flex items-center justify-center">
                    <i class="fas fa-receipt text-primary text-sm"></i>
                </div>
                {"Transactions"}
            </h1>

            <div class="flex gap-2 overflow-x-auto pb-1">
                { for pills.map(|category| {
                    let selected = *filter == category;
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(category))
                    };
                    html! {
                        <button
                            key={category.unwrap_or("all")}
                            class={classes!("btn", "btn-xs", "rounded-full", "whitespace-nowrap", if selected { "btn-accent" } else { "btn-ghost border-base-300" })}
                            {onclick}
                        >
                            {pill_label(category)}
                        </button>
                    }
                }) }
            </div>

            <div class="grid grid-cols-2 gap-3">
                <button class="btn btn-accent" onclick={on_open_add}>
                    <i class="fas fa-plus"></i>
                    <span>{"Add Expense"}</span>
                </button>
                <button class="btn btn-outline" onclick={on_pick_file} disabled={*scanning}>
                    if *scanning {
                        <span class="loading loading-spinner loading-sm"></span>
                        <span>{"Scanning..."}</span>
                    } else {
                        <i class="fas fa-camera"></i>
                        <span>{"Scan"}</span>
                    }
                </button>
                <input
                    ref={file_input}
                    type="file"
                    accept="image/*"
                    capture="environment"
                    class="hidden"
                    onchange={on_file_change}
                />
            </div>

            if let Some(message) = (*scan_error).clone() {
                <div role="alert" class="alert alert-error text-sm py-2.5">
                    <i class="fas fa-circle-exclamation"></i>
                    <span>{message}</span>
                    <button class="btn btn-xs btn-ghost btn-circle" onclick={on_dismiss_error}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }

            <AiInsightCard feature="feed" compact={true} />

            {list}

            if *show_add {
                <ExpenseModal on_close={on_close_add} on_added={on_added} />
            }
            if let Some(draft) = (*receipt).clone() {
                <ReceiptModal {draft} on_close={on_close_receipt} on_added={on_receipt_added} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_labels() {
        assert_eq!(pill_label(None), "✦ All");
        assert_eq!(pill_label(Some("coffee")), "☕ Coffee");
        assert_eq!(pill_label(Some("entertainment")), "🎮 Entertainment");
    }
}
