use std::rc::Rc;

use stash_common::format::euros;
use stash_common::receipt::ReceiptDraft;
use stash_common::ScanMethod;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::transactions;
use crate::common::fetch_hook::use_mount_token;

pub enum ReceiptEdit {
    Merchant(String),
    Date(String),
    Rename(usize, String),
    Price(usize, String),
    Remove(usize),
    AddItem,
    Total(String),
    Recalculate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftState(ReceiptDraft);

impl Reducible for DraftState {
    type Action = ReceiptEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = self.0.clone();
        match action {
            ReceiptEdit::Merchant(merchant) => draft.merchant = merchant,
            ReceiptEdit::Date(date) => draft.date = date,
            ReceiptEdit::Rename(index, name) => draft.rename_item(index, &name),
            ReceiptEdit::Price(index, input) => draft.set_price(index, &input),
            ReceiptEdit::Remove(index) => draft.remove_item(index),
            ReceiptEdit::AddItem => draft.add_item(),
            ReceiptEdit::Total(input) => draft.set_total(&input),
            ReceiptEdit::Recalculate => draft.recalculate(),
        }
        Rc::new(Self(draft))
    }
}

#[derive(Properties, PartialEq)]
pub struct ReceiptModalProps {
    pub draft: ReceiptDraft,
    pub on_close: Callback<()>,
    pub on_added: Callback<()>,
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(ReceiptModal)]
pub fn receipt_modal(props: &ReceiptModalProps) -> Html {
    let state = {
        let draft = props.draft.clone();
        use_reducer(move || DraftState(draft))
    };
    let editing = use_state(|| false);
    let submitting = use_state(|| false);
    let mounted = use_mount_token();
    let draft = &state.0;

    let edit = |make: fn(String) -> ReceiptEdit| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| dispatcher.dispatch(make(input_value(e))))
    };

    let on_toggle_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(!*editing))
    };

    let on_add_item = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ReceiptEdit::AddItem))
    };

    let on_recalculate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ReceiptEdit::Recalculate))
    };

    let on_confirm = {
        let state = state.clone();
        let submitting = submitting.clone();
        let on_added = props.on_added.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: MouseEvent| {
            let request = state.0.to_expense();
            submitting.set(true);

            let submitting = submitting.clone();
            let on_added = on_added.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match transactions::add_expense(request).await {
                    Ok(tx) => {
                        log::info!("Logged scanned receipt as {}", tx.id);
                        on_added.emit(());
                    }
                    Err(e) => log::error!("Failed to add scanned receipt: {}", e),
                }
                if !mounted.is_cancelled() {
                    submitting.set(false);
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="modal modal-open modal-bottom sm:modal-middle">
            <div class="modal-box max-h-[85vh] flex flex-col p-0">
                <div class="flex items-center justify-between p-5 border-b border-base-300">
                    <div class="flex items-center gap-3">
                        <div class="w-9 h-9 rounded-xl bg-success/10 flex items-center justify-center">
                            <i class="fas fa-circle-check text-success"></i>
                        </div>
                        <div>
                            <h3 class="font-bold">{"Receipt Scanned"}</h3>
                            <div class="flex items-center gap-1.5">
                                <span class="w-1.5 h-1.5 rounded-full bg-success"></span>
                                <span class="text-[10px] opacity-60">{draft.method.label()}</span>
                            </div>
                        </div>
                    </div>
                    <div class="flex gap-1.5">
                        <button
                            class={classes!("btn", "btn-sm", "btn-square", if *editing { "btn-accent" } else { "btn-ghost" })}
                            title={if *editing { "Done editing" } else { "Edit receipt" }}
                            onclick={on_toggle_edit}
                        >
                            <i class="fas fa-pen"></i>
                        </button>
                        <button class="btn btn-sm btn-ghost btn-square" onclick={on_close.clone()}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto p-5">
                    <div class="bg-base-200 rounded-xl p-4 font-mono text-sm">
                        <div class="text-center pb-3 mb-3 border-b border-dashed border-base-content/20">
                            if *editing {
                                <div class="space-y-2">
                                    <input type="text" class="input input-sm input-bordered w-full text-center"
                                        placeholder="Store name" value={draft.merchant.clone()}
                                        oninput={edit(ReceiptEdit::Merchant)} />
                                    <input type="date" class="input input-sm input-bordered w-full"
                                        value={draft.date.clone()} oninput={edit(ReceiptEdit::Date)} />
                                </div>
                            } else {
                                <div class="font-bold">{&draft.merchant}</div>
                                <div class="text-xs opacity-60">{&draft.date}</div>
                            }
                        </div>

                        <div class="space-y-1.5">
                            { for draft.items.iter().enumerate().map(|(index, item)| {
                                if *editing {
                                    let dispatcher = state.dispatcher();
                                    let on_name = {
                                        let dispatcher = dispatcher.clone();
                                        Callback::from(move |e: InputEvent| dispatcher.dispatch(ReceiptEdit::Rename(index, input_value(e))))
                                    };
                                    let on_price = {
                                        let dispatcher = dispatcher.clone();
                                        Callback::from(move |e: InputEvent| dispatcher.dispatch(ReceiptEdit::Price(index, input_value(e))))
                                    };
                                    let on_remove = Callback::from(move |_: MouseEvent| dispatcher.dispatch(ReceiptEdit::Remove(index)));
                                    html! {
                                        <div key={index} class="flex items-center gap-2">
                                            <input type="text" class="input input-xs input-bordered flex-1"
                                                placeholder="Item name" value={item.name.clone()} oninput={on_name} />
                                            <span class="opacity-60">{"€"}</span>
                                            <input type="number" step="0.01" class="input input-xs input-bordered w-20 text-right"
                                                value={item.price.to_string()} oninput={on_price} />
                                            <button class="btn btn-xs btn-ghost text-error" onclick={on_remove}>
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </div>
                                    }
                                } else {
                                    html! {
                                        <div key={index} class="flex justify-between">
                                            <span class="truncate">{&item.name}</span>
                                            <span class="tabular-nums">{euros(item.price)}</span>
                                        </div>
                                    }
                                }
                            }) }
                            if *editing {
                                <button class="btn btn-xs btn-ghost w-full border border-dashed border-base-content/20 mt-2" onclick={on_add_item}>
                                    <i class="fas fa-circle-plus"></i>{" Add Item"}
                                </button>
                            }
                        </div>

                        <div class="flex justify-between items-center pt-3 mt-3 border-t border-dashed border-base-content/20 font-bold">
                            <span>{"Total"}</span>
                            if *editing {
                                <label class="input input-xs input-bordered flex items-center gap-1 w-24">
                                    <span class="opacity-60">{"€"}</span>
                                    <input type="number" step="0.01" class="grow text-right"
                                        value={draft.total.to_string()} oninput={edit(ReceiptEdit::Total)} />
                                </label>
                            } else {
                                <span class="tabular-nums">{euros(draft.total)}</span>
                            }
                        </div>
                    </div>
                </div>

                <div class="p-5 border-t border-base-300 space-y-2">
                    if *editing {
                        <button class="btn btn-sm btn-ghost w-full text-accent" onclick={on_recalculate}>
                            <i class="fas fa-wand-magic-sparkles"></i>{" Recalculate Total from Items"}
                        </button>
                    }
                    <button
                        class="btn btn-accent w-full"
                        disabled={*submitting || !draft.can_confirm()}
                        onclick={on_confirm}
                    >
                        {if *submitting { "Adding...".to_string() } else { format!("Add {} to Expenses", euros(draft.total)) }}
                    </button>
                    if draft.method == ScanMethod::Ocr {
                        <div class="flex items-center gap-1.5 justify-center text-[10px] opacity-60">
                            <i class="fas fa-wand-magic-sparkles"></i>
                            <span>{"Scanned with local OCR. Set OPENAI_API_KEY on the server for AI vision."}</span>
                        </div>
                    }
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use stash_common::ReceiptItem;

    use super::*;

    fn draft() -> DraftState {
        DraftState(ReceiptDraft {
            merchant: "Lidl".to_string(),
            date: "2025-02-10".to_string(),
            items: vec![
                ReceiptItem { name: "Milk".to_string(), price: Decimal::new(129, 2) },
                ReceiptItem { name: "Bread".to_string(), price: Decimal::new(99, 2) },
            ],
            total: Decimal::new(228, 2),
            method: ScanMethod::Ocr,
        })
    }

    #[test]
    fn test_price_edit_recomputes_total() {
        let state = Rc::new(draft()).reduce(ReceiptEdit::Price(1, "1.49".to_string()));
        assert_eq!(state.0.total, Decimal::new(278, 2));
    }

    #[test]
    fn test_manual_total_then_recalculate() {
        let state = Rc::new(draft())
            .reduce(ReceiptEdit::Total("5".to_string()))
            .reduce(ReceiptEdit::Merchant("Lidl Rathmines".to_string()));
        assert_eq!(state.0.total, Decimal::new(5, 0));
        assert_eq!(state.0.merchant, "Lidl Rathmines");

        let state = state.reduce(ReceiptEdit::Recalculate);
        assert_eq!(state.0.total, Decimal::new(228, 2));
    }

    #[test]
    fn test_remove_last_item_blocks_confirm() {
        let state = Rc::new(draft())
            .reduce(ReceiptEdit::Remove(0))
            .reduce(ReceiptEdit::Remove(0));
        assert!(state.0.items.is_empty());
        assert!(!state.0.can_confirm());
        assert_eq!(state.0.total, Decimal::ZERO);
    }
}
