use stash_common::listings::parse_tags;
use stash_common::{NewPostRequest, PostIntent};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::AUTHOR;
use crate::api_client::community;
use crate::common::fetch_hook::use_mount_token;

fn intent_class(intent: PostIntent) -> &'static str {
    match intent {
        PostIntent::Offering => "btn-success",
        PostIntent::Seeking => "btn-warning",
        PostIntent::General => "btn-neutral",
    }
}

#[derive(Properties, PartialEq)]
pub struct ComposerProps {
    pub on_cancel: Callback<()>,
    pub on_posted: Callback<()>,
}

#[function_component(Composer)]
pub fn composer(props: &ComposerProps) -> Html {
    let content = use_state(String::new);
    let tags = use_state(String::new);
    let intent = use_state(|| PostIntent::General);
    let submitting = use_state(|| false);
    let mounted = use_mount_token();

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| content.set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let on_tags = {
        let tags = tags.clone();
        Callback::from(move |e: InputEvent| tags.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_submit = {
        let content = content.clone();
        let tags = tags.clone();
        let intent = intent.clone();
        let submitting = submitting.clone();
        let on_posted = props.on_posted.clone();
        let mounted = mounted.clone();

        Callback::from(move |_: MouseEvent| {
            if content.trim().is_empty() {
                return;
            }
            let request = NewPostRequest {
                author: AUTHOR.to_string(),
                content: (*content).clone(),
                tags: parse_tags(&tags),
                intent: *intent,
            };
            submitting.set(true);

            let submitting = submitting.clone();
            let on_posted = on_posted.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let posted = community::create_post(request).await.is_ok();
                if mounted.is_cancelled() {
                    return;
                }
                submitting.set(false);
                if posted {
                    on_posted.emit(());
                }
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="card bg-base-100 border border-primary/20 p-5 space-y-4">
            <textarea
                class="textarea textarea-bordered w-full h-24 resize-none"
                placeholder="What's on your mind? Share deals, offer a sublet, seek a room..."
                value={(*content).clone()}
                oninput={on_content}
            />
            <div>
                <div class="text-xs opacity-60 mb-2">{"What type of post?"}</div>
                <div class="flex gap-2">
                    { for PostIntent::ALL.into_iter().map(|option| {
                        let onclick = {
                            let intent = intent.clone();
                            Callback::from(move |_: MouseEvent| intent.set(option))
                        };
                        html! {
                            <button
                                key={option.as_str()}
                                class={classes!("btn", "btn-xs", if *intent == option { intent_class(option) } else { "btn-ghost border-base-300" })}
                                {onclick}
                            >
                                {format!("{} {}", option.emoji(), option.as_str())}
                            </button>
                        }
                    }) }
                </div>
            </div>
            <input
                type="text"
                class="input input-sm input-bordered w-full"
                placeholder="Tags (comma-separated): accommodation, free, events"
                value={(*tags).clone()}
                oninput={on_tags}
            />
            <div class="flex justify-end gap-2">
                <button class="btn btn-sm btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                <button
                    class="btn btn-sm btn-primary"
                    disabled={content.trim().is_empty() || *submitting}
                    onclick={on_submit}
                >
                    {if *submitting { "Posting... (AI analyzing)" } else { "Post & Auto-Match" }}
                </button>
            </div>
        </div>
    }
}
