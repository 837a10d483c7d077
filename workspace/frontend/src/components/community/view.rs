use std::collections::HashMap;
use std::rc::Rc;

use stash_common::listings::filter_posts;
use stash_common::{NewCommentRequest, PostIntent, VoteDirection, VoteResponse};
use yew::prelude::*;

use super::composer::Composer;
use super::post_card::PostCard;
use super::AUTHOR;
use crate::api_client::community;
use crate::common::fetch_hook::{use_fetch_with_deps, use_mount_token};
use crate::common::fetch_render::render_fetch;
use crate::components::widgets::AiInsightCard;

fn filter_label(intent: Option<PostIntent>, total: Option<usize>) -> String {
    match (intent, total) {
        (None, Some(total)) => format!("All ({})", total),
        (None, None) => "All".to_string(),
        (Some(intent), _) => format!("{} {}", intent.emoji(), intent.as_str()),
    }
}

/// Votes the server accepted this session, keyed by post id.
#[derive(Debug, Clone, Default, PartialEq)]
struct VoteLedger(HashMap<String, VoteDirection>);

enum VoteAction {
    Insert(String, VoteDirection),
}

impl VoteLedger {
    fn get(&self, post_id: &str) -> Option<VoteDirection> {
        self.0.get(post_id).copied()
    }
}

impl Reducible for VoteLedger {
    type Action = VoteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ledger = Rc::unwrap_or_clone(self);
        match action {
            VoteAction::Insert(post_id, direction) => {
                ledger.0.insert(post_id, direction);
            }
        }
        Rc::new(ledger)
    }
}

#[function_component(Community)]
pub fn community() -> Html {
    let intent = use_state(|| None::<PostIntent>);
    let (state, refetch) = {
        let selected = *intent;
        use_fetch_with_deps(move || community::get_posts(selected), selected)
    };
    let show_composer = use_state(|| false);
    let commenting_on = use_state(|| None::<String>);
    let votes = use_reducer(VoteLedger::default);
    let mounted = use_mount_token();

    let on_toggle_composer = {
        let show_composer = show_composer.clone();
        Callback::from(move |_: MouseEvent| show_composer.set(!*show_composer))
    };

    let on_open_composer = {
        let show_composer = show_composer.clone();
        Callback::from(move |_: MouseEvent| show_composer.set(true))
    };

    let on_close_composer = {
        let show_composer = show_composer.clone();
        Callback::from(move |_: ()| show_composer.set(false))
    };

    let on_posted = {
        let show_composer = show_composer.clone();
        let refetch = refetch.clone();
        Callback::from(move |_: ()| {
            show_composer.set(false);
            refetch.emit(());
        })
    };

    let on_vote = {
        let votes = votes.dispatcher();
        let refetch = refetch.clone();
        let mounted = mounted.clone();
        Callback::from(move |(post_id, direction): (String, VoteDirection)| {
            let votes = votes.clone();
            let refetch = refetch.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let response = community::vote(&post_id, direction).await;
                if mounted.is_cancelled() {
                    return;
                }
                match response {
                    Ok(VoteResponse { error: None, .. }) => {
                        votes.dispatch(VoteAction::Insert(post_id, direction));
                        refetch.emit(());
                    }
                    Ok(VoteResponse { error: Some(reason), .. }) => {
                        log::warn!("Vote on {} rejected: {}", post_id, reason);
                    }
                    Err(err) => log::warn!("Vote on {} failed: {}", post_id, err),
                }
            });
        })
    };

    let on_toggle_comment = {
        let commenting_on = commenting_on.clone();
        Callback::from(move |post_id: String| {
            if commenting_on.as_deref() == Some(post_id.as_str()) {
                commenting_on.set(None);
            } else {
                commenting_on.set(Some(post_id));
            }
        })
    };

    let on_comment = {
        let commenting_on = commenting_on.clone();
        let refetch = refetch.clone();
        let mounted = mounted.clone();
        Callback::from(move |(post_id, text): (String, String)| {
            let content = text.trim().to_string();
            if content.is_empty() {
                return;
            }
            let commenting_on = commenting_on.clone();
            let refetch = refetch.clone();
            let mounted = mounted.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = NewCommentRequest {
                    author: AUTHOR.to_string(),
                    content,
                };
                let added = community::add_comment(&post_id, request).await;
                if let Err(err) = &added {
                    log::warn!("Comment on {} failed: {}", post_id, err);
                }
                if added.is_ok() && !mounted.is_cancelled() {
                    commenting_on.set(None);
                    refetch.emit(());
                }
            });
        })
    };

    let total = state.data().filter(|_| intent.is_none()).map(Vec::len);
    let filters = std::iter::once(None).chain(PostIntent::ALL.into_iter().map(Some));

    let posts = render_fetch(&state, 4, Some(refetch.clone()), |posts| {
        let visible = filter_posts(posts, *intent);
        let empty = visible.is_empty();
        html! {
            <>
                { for visible.into_iter().map(|post| html! {
                    <PostCard
                        key={post.id.clone()}
                        post={post.clone()}
                        vote={votes.get(&post.id)}
                        commenting={commenting_on.as_deref() == Some(post.id.as_str())}
                        on_vote={on_vote.clone()}
                        on_toggle_comment={on_toggle_comment.clone()}
                        on_comment={on_comment.clone()}
                    />
                }) }
                if empty {
                    <div class="text-center py-12 opacity-70">
                        <i class="fas fa-users text-4xl mb-3 opacity-40"></i>
                        <p>{"No posts in this category yet"}</p>
                        <button class="btn btn-sm btn-link" onclick={on_open_composer.clone()}>{"Be the first to post!"}</button>
                    </div>
                }
            </>
        }
    });

    html! {
        <div class="flex flex-col gap-4 max-w-3xl mx-auto">
            <div class="flex items-start justify-between">
                <div>
                    <h1 class="flex items-center gap-2.5 text-xl font-bold">
                        <div class="w-9 h-9 rounded-xl bg-primary/10 flex items-center justify-center">
                            <i class="fas fa-users text-primary"></i>
                        </div>
                        {"Community"}
                    </h1>
                    <p class="text-sm opacity-60 mt-1">
                        {"Connect with fellow students in Dublin "}
                        <span class="text-primary text-xs"><i class="fas fa-wand-magic-sparkles"></i>{" AI-powered matching"}</span>
                    </p>
                </div>
                <button class="btn btn-sm btn-primary" onclick={on_toggle_composer}>
                    <i class="fas fa-circle-plus"></i>{" Post"}
                </button>
            </div>

            <AiInsightCard feature="community" compact={true} />

            if *show_composer {
                <Composer on_cancel={on_close_composer} {on_posted} />
            }

            <div class="flex gap-2 overflow-x-auto pb-1">
                { for filters.map(|option| {
                    let selected = *intent == option;
                    let onclick = {
                        let intent = intent.clone();
                        Callback::from(move |_: MouseEvent| intent.set(option))
                    };
                    html! {
                        <button
                            key={option.map_or("all", |i| i.as_str())}
                            class={classes!("btn", "btn-xs", "whitespace-nowrap", if selected { "btn-primary" } else { "btn-ghost border-base-300" })}
                            {onclick}
                        >
                            {filter_label(option, total)}
                        </button>
                    }
                }) }
            </div>

            {posts}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_votes_are_all_kept() {
        let ledger = Rc::new(VoteLedger::default());
        // Two answers landing from the same render must not drop each other.
        let ledger = ledger
            .reduce(VoteAction::Insert("p1".to_string(), VoteDirection::Up))
            .reduce(VoteAction::Insert("p2".to_string(), VoteDirection::Down));
        assert_eq!(ledger.get("p1"), Some(VoteDirection::Up));
        assert_eq!(ledger.get("p2"), Some(VoteDirection::Down));
        assert_eq!(ledger.get("p3"), None);
    }

    #[test]
    fn test_revote_replaces_direction() {
        let ledger = Rc::new(VoteLedger::default())
            .reduce(VoteAction::Insert("p1".to_string(), VoteDirection::Up))
            .reduce(VoteAction::Insert("p1".to_string(), VoteDirection::Down));
        assert_eq!(ledger.get("p1"), Some(VoteDirection::Down));
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(filter_label(None, Some(12)), "All (12)");
        assert_eq!(filter_label(None, None), "All");
        assert_eq!(filter_label(Some(PostIntent::Seeking), Some(3)), "🔍 SEEKING");
    }
}
