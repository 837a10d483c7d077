use stash_common::format::euros;
use stash_common::squad::SplitDraft;
use stash_common::SquadMember;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::squad;
use crate::components::widgets::{Card, CardVariant};

fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

#[derive(Properties, PartialEq)]
pub struct SplitModalProps {
    pub members: Vec<SquadMember>,
    pub on_close: Callback<()>,
    /// Receives the confirmation message.
    pub on_split: Callback<String>,
    pub on_failed: Callback<()>,
}

#[function_component(SplitModal)]
pub fn split_modal(props: &SplitModalProps) -> Html {
    let draft = use_state(SplitDraft::default);

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.description = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.set(next);
        })
    };

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
        let on_split = props.on_split.clone();
        let on_failed = props.on_failed.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = draft.to_request() else {
                return;
            };
            let snapshot = (*draft).clone();
            let on_split = on_split.clone();
            let on_failed = on_failed.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match squad::split_expense(request).await {
                    Ok(response) => on_split.emit(snapshot.confirmation(response.per_person)),
                    Err(_) => on_failed.emit(()),
                }
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Card variant={CardVariant::Outlined} hover={false} class="border-primary/20 space-y-3.5">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold">{"Split an Expense"}</h3>
                <button class="btn btn-xs btn-ghost btn-square" onclick={on_close}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
            <input
                type="text"
                class="input input-sm input-bordered w-full"
                placeholder="What's it for? (e.g. Tesco groceries)"
                value={draft.description.clone()}
                oninput={on_description}
            />
            <input
                type="number"
                class="input input-sm input-bordered w-full"
                placeholder="Total amount (€)"
                value={draft.amount_input.clone()}
                oninput={on_amount}
            />
            <div>
                <div class="text-xs opacity-60 mb-2">{"Split with:"}</div>
                <div class="flex flex-wrap gap-2">
                    { for props.members.iter().map(|member| {
                        let selected = draft.is_selected(&member.id);
                        let onclick = {
                            let draft = draft.clone();
                            let id = member.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*draft).clone();
                                next.toggle_member(&id);
                                draft.set(next);
                            })
                        };
                        html! {
                            <button
                                key={member.id.clone()}
                                class={classes!("btn", "btn-xs", "gap-1.5", if selected { "btn-primary" } else { "btn-ghost border-base-300" })}
                                {onclick}
                            >
                                <span class="w-5 h-5 rounded-full bg-base-200 flex items-center justify-center text-[10px]">{&member.initials}</span>
                                {first_name(&member.name)}
                            </button>
                        }
                    }) }
                </div>
            </div>
            if let (true, Some(amount), Some(share)) = (draft.can_submit(), draft.amount(), draft.preview_share()) {
                <div class="text-xs bg-base-200 rounded-xl p-3">
                    {format!("{} ÷ {} people = ", euros(amount), draft.people())}
                    <span class="text-success font-bold">{euros(share)}</span>
                    {" each"}
                </div>
            }
            <button class="btn btn-sm btn-primary w-full" disabled={!draft.can_submit()} onclick={on_submit}>
                <i class="fas fa-paper-plane"></i>{" Split It"}
            </button>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Aoife Byrne"), "Aoife");
        assert_eq!(first_name("Mei"), "Mei");
    }
}
