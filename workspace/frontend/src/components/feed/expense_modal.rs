use stash_common::feed::EXPENSE_CATEGORIES;
use stash_common::receipt::ExpenseDraft;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::transactions;
use crate::common::fetch_hook::use_mount_token;

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub on_close: Callback<()>,
    /// Fired once the server accepted the expense.
    pub on_added: Callback<()>,
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let draft = use_state(ExpenseDraft::default);
    let submitting = use_state(|| false);
    let mounted = use_mount_token();

    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.amount_input = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let on_added = props.on_added.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(request) = draft.to_request() else {
                return;
            };
            submitting.set(true);

            let submitting = submitting.clone();
            let on_added = on_added.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match transactions::add_expense(request).await {
                    Ok(tx) => {
                        log::info!("Logged expense {}", tx.id);
                        on_added.emit(());
                    }
                    Err(e) => log::error!("Failed to add expense: {}", e),
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
            <div class="modal-box">
                <div class="flex items-center justify-between mb-5">
                    <h3 class="font-bold text-lg">{"Log Expense"}</h3>
                    <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close.clone()}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Amount"}</span></label>
                        <label class="input input-bordered flex items-center gap-2">
                            <span class="opacity-60">{"€"}</span>
                            <input
                                type="number"
                                step="0.01"
                                class="grow"
                                placeholder="0.00"
                                value={draft.amount_input.clone()}
                                oninput={on_amount}
                            />
                        </label>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Category"}</span></label>
                        <div class="grid grid-cols-3 gap-2">
                            { for EXPENSE_CATEGORIES.iter().map(|(value, label)| {
                                let selected = draft.category.as_deref() == Some(*value);
                                let onclick = {
                                    let draft = draft.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*draft).clone();
                                        next.category = Some(value.to_string());
                                        draft.set(next);
                                    })
                                };
                                html! {
                                    <button
                                        key={*value}
                                        class={classes!("btn", "btn-sm", if selected { "btn-accent" } else { "btn-ghost border-base-300" })}
                                        {onclick}
                                    >
                                        {*label}
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <button
                        class="btn btn-accent w-full"
                        disabled={!draft.can_submit() || *submitting}
                        onclick={on_submit}
                    >
                        {if *submitting { "Adding..." } else { "Add Expense" }}
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_close}></div>
        </dialog>
    }
}
