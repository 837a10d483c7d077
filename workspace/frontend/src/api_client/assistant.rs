use stash_common::{AiInsights, ChatReply, ChatRequest};

use crate::api_client::{self, ApiError};

pub async fn send_message(message: &str) -> Result<ChatReply, ApiError> {
    log::trace!("Sending chat message ({} chars)", message.len());
    let request = ChatRequest {
        message: message.to_string(),
    };
    let result = api_client::post::<ChatReply, _>("/chat", &request).await;
    match &result {
        Ok(reply) => log::debug!("Chat reply with {} sources", reply.sources.len()),
        Err(e) => log::error!("Chat request failed: {}", e),
    }
    result
}

pub async fn get_insights(feature: &str) -> Result<AiInsights, ApiError> {
    log::trace!("Fetching AI insights for {}", feature);
    let result = api_client::get_with_query::<AiInsights>("/ai/insights", &[("feature", feature)]).await;
    match &result {
        Ok(insights) => log::debug!(
            "Fetched {} insights for {} from {}",
            insights.insights.len(),
            feature,
            insights.source
        ),
        Err(e) => log::error!("Failed to fetch insights for {}: {}", feature, e),
    }
    result
}

/// Insights for `feature`, or the single "AI unavailable" card on any failure.
pub async fn insights_or_fallback(feature: &str) -> AiInsights {
    match get_insights(feature).await {
        Ok(insights) => insights,
        Err(_) => {
            log::warn!("Showing fallback insight for {}", feature);
            AiInsights::fallback(feature)
        }
    }
}
