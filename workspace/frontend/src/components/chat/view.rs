use stash_common::chat::{PAGE_PROMPTS, PAGE_WELCOME};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::widgets::transcript::{use_conversation, MessageBubble, TypingIndicator};

/// Chip text next to the header; the welcome message is not counted.
fn message_chip(total: usize) -> String {
    format!("{} messages", total.saturating_sub(1))
}

#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let chat = use_conversation(PAGE_WELCOME);
    let input = use_state(String::new);
    let scroll_ref = use_node_ref();

    let conversation = chat.state.conversation().clone();
    let pending = conversation.is_pending();

    {
        let scroll_ref = scroll_ref.clone();
        let len = conversation.messages().len();
        use_effect_with((len, pending), move |_| {
            if let Some(el) = scroll_ref.cast::<web_sys::Element>() {
                el.set_scroll_top(el.scroll_height());
            }
            || ()
        });
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let submit = {
        let input = input.clone();
        let send = chat.send.clone();
        Callback::from(move |_: ()| {
            send.emit((*input).clone());
            input.set(String::new());
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_clear = {
        let clear = chat.clear.clone();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Clearing chat transcript");
            clear.emit(());
            input.set(String::new());
        })
    };

    html! {
        <div class="flex flex-col h-[calc(100vh-120px)] md:h-[calc(100vh-80px)] max-w-3xl mx-auto">
            <div class="px-5 py-3.5 border-b border-base-300 flex items-center gap-3">
                <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-primary to-accent flex items-center justify-center shadow-lg">
                    <i class="fas fa-wand-magic-sparkles text-white"></i>
                </div>
                <div class="flex-1">
                    <div class="text-sm font-bold">{"Stash AI"}</div>
                    <div class="text-[11px] text-success flex items-center gap-1.5 font-medium">
                        <span class="w-1.5 h-1.5 rounded-full bg-success animate-pulse"></span>
                        {"Online — Knows your finances"}
                    </div>
                </div>
                <div class="badge badge-ghost text-[11px]">{message_chip(conversation.messages().len())}</div>
                <button class="btn btn-ghost btn-sm btn-square" title="Clear chat" onclick={on_clear}>
                    <i class="fas fa-rotate-left"></i>
                </button>
            </div>

            <div ref={scroll_ref} class="flex-1 overflow-y-auto p-4 md:p-6 space-y-5">
                { for conversation.messages().iter().map(|message| html! {
                    <MessageBubble key={message.id} message={message.clone()} />
                }) }
                if pending {
                    <TypingIndicator />
                }
            </div>

            if conversation.show_quick_prompts() {
                <div class="px-4 md:px-6 py-3 border-t border-base-300">
                    <div class="text-[11px] opacity-60 mb-2.5 font-semibold uppercase tracking-wider">{"Try asking"}</div>
                    <div class="grid grid-cols-2 gap-2">
                        { for PAGE_PROMPTS.iter().map(|(icon, prompt)| {
                            let send = chat.send.clone();
                            let text = prompt.to_string();
                            html! {
                                <button
                                    key={*prompt}
                                    class="btn btn-sm btn-outline justify-start h-auto py-2.5 normal-case font-medium"
                                    onclick={Callback::from(move |_: MouseEvent| send.emit(text.clone()))}
                                >
                                    <span class="text-base">{*icon}</span>
                                    <span class="text-xs text-left">{*prompt}</span>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            }

            <div class="p-4 md:px-6 border-t border-base-300">
                <div class="join w-full">
                    <input
                        type="text"
                        class="input input-bordered join-item flex-1 text-sm"
                        placeholder="Ask anything about your finances, Dublin, or student life..."
                        value={(*input).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button
                        class="btn btn-primary join-item"
                        disabled={input.trim().is_empty() || pending}
                        onclick={Callback::from(move |_: MouseEvent| submit.emit(()))}
                    >
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_chip_skips_welcome() {
        assert_eq!(message_chip(1), "0 messages");
        assert_eq!(message_chip(5), "4 messages");
        assert_eq!(message_chip(0), "0 messages");
    }
}
