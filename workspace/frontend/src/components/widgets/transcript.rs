use std::rc::Rc;

use stash_common::chat::{Conversation, Message, Role};
use stash_common::markup::{self, Span};
use stash_common::ChatReply;
use yew::prelude::*;

use crate::api_client::assistant;
use crate::hooks::CancelToken;

/// Reducer wrapper around [`Conversation`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState(Conversation);

pub enum ChatAction {
    Ask(String),
    Receive(ChatReply),
    Fail,
    Clear,
}

impl ChatState {
    pub fn conversation(&self) -> &Conversation {
        &self.0
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut conversation = Rc::unwrap_or_clone(self).0;
        match action {
            ChatAction::Ask(text) => {
                conversation.ask(&text);
            }
            ChatAction::Receive(reply) => conversation.receive(reply),
            ChatAction::Fail => conversation.fail(),
            ChatAction::Clear => conversation.clear(),
        }
        Rc::new(Self(conversation))
    }
}

pub struct ChatHandle {
    pub state: UseReducerHandle<ChatState>,
    pub send: Callback<String>,
    pub clear: Callback<()>,
}

/// Transcript shared by the chat page and the floating widget. Clearing the
/// chat or unmounting drops any reply still in flight.
#[hook]
pub fn use_conversation(welcome: &'static str) -> ChatHandle {
    let state = use_reducer(|| ChatState(Conversation::new(welcome)));
    let token = use_memo((), |_| CancelToken::new());

    let send = {
        let state = state.clone();
        let token = token.clone();
        Callback::from(move |input: String| {
            let text = input.trim().to_string();
            if text.is_empty() || state.conversation().is_pending() {
                return;
            }
            state.dispatch(ChatAction::Ask(text.clone()));

            let ticket = token.issue();
            let dispatcher = state.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                let result = assistant::send_message(&text).await;
                if !ticket.is_current() {
                    log::debug!("Dropping chat reply for a cleared transcript");
                    return;
                }
                match result {
                    Ok(reply) => dispatcher.dispatch(ChatAction::Receive(reply)),
                    Err(_) => dispatcher.dispatch(ChatAction::Fail),
                }
            });
        })
    };

    let clear = {
        let dispatcher = state.dispatcher();
        let token = token.clone();
        Callback::from(move |_: ()| {
            log::debug!("Clearing chat transcript");
            token.issue();
            dispatcher.dispatch(ChatAction::Clear);
        })
    };

    {
        let token = token.clone();
        use_effect_with((), move |_| move || token.cancel());
    }

    ChatHandle { state, send, clear }
}

/// Renders `**bold**` spans and line breaks.
pub fn render_markup(text: &str) -> Html {
    let lines = markup::parse(text);
    let last = lines.len().saturating_sub(1);
    html! {
        { for lines.into_iter().enumerate().map(|(i, spans)| html! {
            <>
                { for spans.into_iter().map(|span| match span {
                    Span::Plain(text) => html! { {text} },
                    Span::Bold(text) => html! { <strong class="font-semibold">{text}</strong> },
                }) }
                if i < last { <br /> }
            </>
        }) }
    }
}

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub message: Message,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let is_user = message.role == Role::User;

    html! {
        <div class={classes!("chat", if is_user { "chat-end" } else { "chat-start" })}>
            if !is_user {
                <div class="chat-image">
                    <div class="w-7 h-7 rounded-lg bg-gradient-to-br from-primary to-accent flex items-center justify-center">
                        <i class="fas fa-wand-magic-sparkles text-white text-xs"></i>
                    </div>
                </div>
            }
            <div class={classes!(
                "chat-bubble",
                if is_user { "chat-bubble-primary" } else { "bg-base-100 text-base-content border border-base-300" },
                if props.compact { "text-[13px]" } else { "text-sm" },
            )}>
                { render_markup(&message.content) }
            </div>
            if let Some(sources) = message.sources_line() {
                <div class="chat-footer opacity-60 text-[10px] flex items-center gap-1 mt-1">
                    <i class="fas fa-book-open"></i>
                    { if props.compact { sources } else { format!("Sources: {}", sources) } }
                </div>
            }
        </div>
    }
}

#[function_component(TypingIndicator)]
pub fn typing_indicator() -> Html {
    html! {
        <div class="chat chat-start">
            <div class="chat-bubble bg-base-100 border border-base-300">
                <span class="loading loading-dots loading-sm"></span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_common::chat::{FAILURE_REPLY, PAGE_WELCOME};

    #[test]
    fn test_reducer_drives_conversation() {
        let state = Rc::new(ChatState(Conversation::new(PAGE_WELCOME)))
            .reduce(ChatAction::Ask("How's my budget?".to_string()));
        assert!(state.conversation().is_pending());

        let state = state.reduce(ChatAction::Fail);
        assert!(!state.conversation().is_pending());
        assert_eq!(
            state.conversation().messages().last().map(|m| m.content.as_str()),
            Some(FAILURE_REPLY)
        );

        let state = state.reduce(ChatAction::Clear);
        assert_eq!(state.conversation().messages().len(), 1);
    }
}
