use stash_common::chat::{WIDGET_PROMPTS, WIDGET_WELCOME};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::transcript::{use_conversation, MessageBubble, TypingIndicator};

/// Open/closed state of the floating assistant, shared so the sidebar can open it.
#[derive(Clone, PartialEq)]
pub struct ChatPanelContext {
    pub open: bool,
    pub set_open: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProviderProps {
    pub children: Children,
}

#[function_component(ChatPanelProvider)]
pub fn chat_panel_provider(props: &ChatPanelProviderProps) -> Html {
    let open = use_state(|| false);
    let set_open = {
        let open = open.clone();
        Callback::from(move |value: bool| open.set(value))
    };

    html! {
        <ContextProvider<ChatPanelContext> context={ChatPanelContext { open: *open, set_open }}>
            {props.children.clone()}
        </ContextProvider<ChatPanelContext>>
    }
}

#[function_component(FloatingChat)]
pub fn floating_chat() -> Html {
    let panel = use_context::<ChatPanelContext>();
    let chat = use_conversation(WIDGET_WELCOME);
    let input = use_state(String::new);
    let has_unread = use_state(|| true);
    let scroll_ref = use_node_ref();

    let conversation = chat.state.conversation().clone();

    let is_open = panel.as_ref().is_some_and(|p| p.open);
    {
        let has_unread = has_unread.clone();
        use_effect_with(is_open, move |open| {
            if *open {
                has_unread.set(false);
            }
            || ()
        });
    }

    {
        let scroll_ref = scroll_ref.clone();
        let len = conversation.messages().len();
        use_effect_with((len, conversation.is_pending()), move |_| {
            if let Some(el) = scroll_ref.cast::<web_sys::Element>() {
                el.set_scroll_top(el.scroll_height());
            }
            || ()
        });
    }

    let Some(panel) = panel else {
        log::warn!("FloatingChat rendered outside ChatPanelProvider");
        return html! {};
    };

    let open_panel = {
        let set_open = panel.set_open.clone();
        Callback::from(move |_: MouseEvent| set_open.emit(true))
    };
    let close_panel = {
        let set_open = panel.set_open.clone();
        Callback::from(move |_: MouseEvent| set_open.emit(false))
    };

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
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let on_clear = {
        let clear = chat.clear.clone();
        let input = input.clone();
        Callback::from(move |_: MouseEvent| {
            clear.emit(());
            input.set(String::new());
        })
    };

    if !panel.open {
        return html! {
            <button
                class="fixed z-[999] bottom-28 right-3 md:bottom-6 md:right-6 btn btn-accent btn-square w-14 h-14 rounded-2xl shadow-xl"
                aria-label="Chat with Stash AI"
                onclick={open_panel}
            >
                <i class="fas fa-comment-dots text-xl"></i>
                if *has_unread {
                    <span class="absolute -top-1 -right-1 badge badge-error badge-xs">{"1"}</span>
                }
            </button>
        };
    }

    let count = conversation.user_message_count();
    let pending = conversation.is_pending();

    html! {
        <>
            <div class="fixed inset-0 bg-black/40 backdrop-blur-sm z-[998] md:bg-black/20" onclick={close_panel.clone()}></div>
            <div class="fixed z-[999] bottom-28 right-3 md:bottom-6 md:right-6 w-[calc(100vw-1.5rem)] max-w-[400px] h-[75vh] max-h-[580px] flex flex-col rounded-2xl overflow-hidden border border-base-300 bg-base-200 shadow-2xl">
                <div class="flex items-center gap-3 px-4 py-3.5 border-b border-base-300 bg-base-100">
                    <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-primary to-accent flex items-center justify-center">
                        <i class="fas fa-wand-magic-sparkles text-white"></i>
                    </div>
                    <div class="flex-1 min-w-0">
                        <div class="text-sm font-bold leading-tight">{"Stash AI"}</div>
                        <div class="text-[10px] opacity-60">
                            if pending {
                                <span class="text-accent">{"Typing..."}</span>
                            } else {
                                <span>{format!("Online · {} {}", count, if count == 1 { "message" } else { "messages" })}</span>
                            }
                        </div>
                    </div>
                    <button class="btn btn-ghost btn-sm btn-square" title="Clear chat" onclick={on_clear}>
                        <i class="fas fa-rotate-left"></i>
                    </button>
                    <button class="btn btn-ghost btn-sm btn-square" title="Minimize" onclick={close_panel}>
                        <i class="fas fa-down-left-and-up-right-to-center"></i>
                    </button>
                </div>

                <div ref={scroll_ref} class="flex-1 overflow-y-auto px-4 py-4 space-y-3">
                    { for conversation.messages().iter().map(|message| html! {
                        <MessageBubble key={message.id} message={message.clone()} compact={true} />
                    }) }
                    if pending {
                        <TypingIndicator />
                    }
                </div>

                if conversation.show_quick_prompts() {
                    <div class="px-4 py-3 border-t border-base-300">
                        <div class="text-[10px] uppercase tracking-widest opacity-50 font-bold mb-2">{"Suggestions"}</div>
                        <div class="flex flex-wrap gap-1.5">
                            { for WIDGET_PROMPTS.iter().map(|(icon, label)| {
                                let send = chat.send.clone();
                                let prompt = label.to_string();
                                html! {
                                    <button key={*label} class="btn btn-xs btn-outline rounded-full"
                                        onclick={Callback::from(move |_: MouseEvent| send.emit(prompt.clone()))}>
                                        <span>{*icon}</span>
                                        <span>{*label}</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                }

                <div class="p-3 border-t border-base-300 bg-base-100">
                    <div class="join w-full">
                        <input
                            type="text"
                            class="input input-bordered input-sm join-item flex-1"
                            placeholder="Ask anything..."
                            value={(*input).clone()}
                            oninput={on_input}
                            onkeydown={on_keydown}
                        />
                        <button
                            class="btn btn-accent btn-sm join-item"
                            disabled={input.trim().is_empty() || pending}
                            onclick={Callback::from(move |_: MouseEvent| submit.emit(()))}
                        >
                            <i class="fas fa-paper-plane"></i>
                        </button>
                    </div>
                    <div class="text-center mt-1.5 text-[9px] opacity-30">{"Powered by Stash AI"}</div>
                </div>
            </div>
        </>
    }
}
