use stash_common::feed::local_day;
use stash_common::format::short_date;
use stash_common::{CommunityPost, PostIntent, VoteDirection};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::AUTHOR_INITIALS;
use crate::components::widgets::transcript::render_markup;
use crate::components::widgets::{Badge, BadgeVariant, Card};

fn intent_variant(intent: PostIntent) -> BadgeVariant {
    match intent {
        PostIntent::Offering => BadgeVariant::Success,
        PostIntent::Seeking => BadgeVariant::Warning,
        PostIntent::General => BadgeVariant::Neutral,
    }
}

fn posted_on(raw: &str) -> String {
    local_day(raw).map(short_date).unwrap_or_else(|| raw.to_string())
}

fn replies_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "reply" } else { "replies" })
}

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: CommunityPost,
    /// The direction this session last voted, if any.
    pub vote: Option<VoteDirection>,
    pub commenting: bool,
    pub on_vote: Callback<(String, VoteDirection)>,
    pub on_toggle_comment: Callback<String>,
    pub on_comment: Callback<(String, String)>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;

    let vote = |direction: VoteDirection| {
        let on_vote = props.on_vote.clone();
        let id = post.id.clone();
        Callback::from(move |_: MouseEvent| on_vote.emit((id.clone(), direction)))
    };

    let on_toggle_comment = {
        let on_toggle = props.on_toggle_comment.clone();
        let id = post.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    let on_comment = {
        let on_comment = props.on_comment.clone();
        let id = post.id.clone();
        Callback::from(move |text: String| on_comment.emit((id.clone(), text)))
    };

    let up = props.vote == Some(VoteDirection::Up);
    let down = props.vote == Some(VoteDirection::Down);

    html! {
        <Card hover={false}>
            <div class="flex items-center gap-3 mb-3">
                <div class="w-10 h-10 rounded-full bg-base-200 border border-base-300 flex items-center justify-center text-sm font-bold">
                    {&post.avatar}
                </div>
                <div class="flex-1">
                    <div class="text-sm font-semibold">{&post.author}</div>
                    <div class="text-[10px] opacity-50">{posted_on(&post.created_at)}</div>
                </div>
                <Badge variant={intent_variant(post.intent)}>
                    {format!("{} {}", post.intent.emoji(), post.intent.as_str())}
                </Badge>
            </div>

            <p class="text-sm leading-relaxed mb-3">{&post.content}</p>

            if !post.tags.is_empty() {
                <div class="flex flex-wrap gap-1.5 mb-3">
                    { for post.tags.iter().map(|tag| html! {
                        <span key={tag.clone()} class="text-[10px] px-2 py-0.5 rounded-md bg-primary/10 text-primary">{format!("#{}", tag)}</span>
                    }) }
                </div>
            }

            if let Some(ai_match) = &post.ai_match {
                <div class="p-3 rounded-xl bg-primary/5 border border-primary/15 mb-3">
                    <div class="flex items-center gap-1.5 mb-1">
                        <i class="fas fa-wand-magic-sparkles text-primary text-xs"></i>
                        <span class="text-xs font-semibold text-primary">{"AI Matchmaker"}</span>
                    </div>
                    <p class="text-xs opacity-80">{render_markup(ai_match)}</p>
                </div>
            }

            if !post.comments.is_empty() {
                <div class="space-y-2 mb-3">
                    { for post.comments.iter().map(|c| {
                        let is_ai = c.is_ai.unwrap_or(false);
                        html! {
                            <div key={c.id.clone()} class={classes!(
                                "flex", "items-start", "gap-2", "p-2.5", "rounded-lg",
                                if is_ai { "bg-primary/5 border border-primary/15" } else { "bg-base-200" },
                            )}>
                                <div class={classes!(
                                    "w-6", "h-6", "rounded-full", "flex", "items-center", "justify-center", "text-[10px]", "font-bold", "shrink-0",
                                    if is_ai { "bg-gradient-to-br from-primary to-accent text-primary-content" } else { "bg-base-300" },
                                )}>
                                    if is_ai {
                                        <i class="fas fa-wand-magic-sparkles text-[9px]"></i>
                                    } else {
                                        {&c.avatar}
                                    }
                                </div>
                                <div class="flex-1 min-w-0">
                                    <div class="flex items-center gap-1.5">
                                        <span class="text-xs font-semibold">{&c.author}</span>
                                        if is_ai {
                                            <Badge variant={BadgeVariant::Primary} small={true}>{"AI"}</Badge>
                                        }
                                        <span class="text-[10px] opacity-40">{posted_on(&c.created_at)}</span>
                                    </div>
                                    <p class="text-xs opacity-80 mt-0.5">{render_markup(&c.content)}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }

            <div class="flex items-center gap-4 pt-3 border-t border-base-300">
                <button class={classes!("flex", "items-center", "gap-1", "text-xs", if up { "text-success" } else { "opacity-60 hover:text-success" })} onclick={vote(VoteDirection::Up)}>
                    <i class="fas fa-thumbs-up"></i>{format!(" {}", post.upvotes)}
                </button>
                <button class={classes!("flex", "items-center", "gap-1", "text-xs", if down { "text-error" } else { "opacity-60 hover:text-error" })} onclick={vote(VoteDirection::Down)}>
                    <i class="fas fa-thumbs-down"></i>
                </button>
                <button class="flex items-center gap-1 text-xs opacity-60 hover:opacity-100" onclick={on_toggle_comment}>
                    <i class="fas fa-message"></i>{format!(" {}", replies_label(post.comments.len()))}
                </button>
            </div>

            if props.commenting {
                <CommentInput on_submit={on_comment} />
            }
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct CommentInputProps {
    on_submit: Callback<String>,
}

#[function_component(CommentInput)]
fn comment_input(props: &CommentInputProps) -> Html {
    let text = use_state(String::new);

    let on_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| text.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_keydown = {
        let text = text.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_submit.emit((*text).clone());
            }
        })
    };

    let on_send = {
        let text = text.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit((*text).clone()))
    };

    html! {
        <div class="flex items-center gap-2 mt-3">
            <div class="w-7 h-7 rounded-full bg-accent/20 text-accent flex items-center justify-center text-[10px] font-bold shrink-0">
                {AUTHOR_INITIALS}
            </div>
            <input
                type="text"
                class="input input-sm input-bordered flex-1"
                placeholder="Write a reply..."
                value={(*text).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                autofocus={true}
            />
            <button class="btn btn-sm btn-primary btn-square" disabled={text.trim().is_empty()} onclick={on_send}>
                <i class="fas fa-paper-plane text-xs"></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_label() {
        assert_eq!(replies_label(0), "0 replies");
        assert_eq!(replies_label(1), "1 reply");
        assert_eq!(replies_label(4), "4 replies");
    }

    #[test]
    fn test_posted_on_falls_back_to_raw() {
        assert_eq!(posted_on("yesterday-ish"), "yesterday-ish");
    }
}
