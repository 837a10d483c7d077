use serde_json::Value;
use stash_common::{
    CommunityPost, NewCommentRequest, NewPostRequest, PostIntent, VoteDirection, VoteRequest,
    VoteResponse,
};

use crate::api_client::{self, segment, ApiError};

/// Get community posts, optionally only those with the given intent
pub async fn get_posts(intent: Option<PostIntent>) -> Result<Vec<CommunityPost>, ApiError> {
    log::trace!("Fetching community posts (intent: {:?})", intent);
    let result = match intent {
        Some(intent) => {
            api_client::get_with_query::<Vec<CommunityPost>>("/community", &[("intent", intent.as_str())])
                .await
        }
        None => api_client::get::<Vec<CommunityPost>>("/community").await,
    };
    match &result {
        Ok(posts) => log::debug!("Fetched {} community posts", posts.len()),
        Err(e) => log::error!("Failed to fetch community posts: {}", e),
    }
    result
}

pub async fn create_post(request: NewPostRequest) -> Result<CommunityPost, ApiError> {
    log::debug!("Creating {} post with {} tags", request.intent.as_str(), request.tags.len());
    let result = api_client::post::<CommunityPost, _>("/community", &request).await;
    match &result {
        Ok(post) => log::info!("Created community post {}", post.id),
        Err(e) => log::error!("Failed to create post: {}", e),
    }
    result
}

/// The response body is ignored; the feed is refetched afterwards.
pub async fn add_comment(post_id: &str, request: NewCommentRequest) -> Result<(), ApiError> {
    log::debug!("Commenting on post {}", post_id);
    let endpoint = format!("/community/{}/comment", segment(post_id));
    let result = api_client::post::<Value, _>(&endpoint, &request).await.map(|_| ());
    match &result {
        Ok(()) => log::info!("Added comment to post {}", post_id),
        Err(e) => log::error!("Failed to comment on post {}: {}", post_id, e),
    }
    result
}

pub async fn vote(post_id: &str, direction: VoteDirection) -> Result<VoteResponse, ApiError> {
    log::debug!("Voting {:?} on post {}", direction, post_id);
    let endpoint = format!("/community/{}/vote", segment(post_id));
    let result = api_client::post::<VoteResponse, _>(&endpoint, &VoteRequest { direction }).await;
    match &result {
        Ok(VoteResponse { error: Some(message), .. }) => {
            log::warn!("Vote on post {} rejected: {}", post_id, message)
        }
        Ok(response) => log::info!("Post {} now has {:?} upvotes", post_id, response.upvotes),
        Err(e) => log::error!("Failed to vote on post {}: {}", post_id, e),
    }
    result
}
