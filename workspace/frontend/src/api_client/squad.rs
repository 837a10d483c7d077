use rust_decimal::Decimal;
use stash_common::{Ack, NudgeRequest, SettleRequest, SplitRequest, SplitResponse, SquadData};

use crate::api_client::{self, ApiError};

/// Get squad members and recent activity
pub async fn get_squad() -> Result<SquadData, ApiError> {
    log::trace!("Fetching squad");
    let result = api_client::get::<SquadData>("/squad").await;
    match &result {
        Ok(squad) => log::debug!(
            "Fetched {} squad members and {} activity entries",
            squad.members.len(),
            squad.activity.len()
        ),
        Err(e) => log::error!("Failed to fetch squad: {}", e),
    }
    result
}

pub async fn split_expense(request: SplitRequest) -> Result<SplitResponse, ApiError> {
    log::debug!(
        "Splitting {} '{}' with {} members",
        request.total_amount,
        request.description,
        request.member_ids.len()
    );
    let result = api_client::post::<SplitResponse, _>("/squad/split", &request).await;
    match &result {
        Ok(split) => log::info!("Split recorded: {:?} each", split.per_person),
        Err(e) => log::error!("Failed to split expense: {}", e),
    }
    result
}

pub async fn nudge(member_id: &str) -> Result<Ack, ApiError> {
    log::debug!("Nudging squad member {}", member_id);
    let request = NudgeRequest {
        member_id: member_id.to_string(),
    };
    let result = api_client::post::<Ack, _>("/squad/nudge", &request).await;
    match &result {
        Ok(ack) => log::info!("Nudge to {}: {:?}", member_id, ack.message),
        Err(e) => log::error!("Failed to nudge {}: {}", member_id, e),
    }
    result
}

/// Settle with a member; an `amount` of zero settles the full balance.
pub async fn settle(member_id: &str, amount: Decimal) -> Result<Ack, ApiError> {
    log::debug!("Settling {} with squad member {}", amount, member_id);
    let request = SettleRequest {
        member_id: member_id.to_string(),
        amount,
    };
    let result = api_client::post::<Ack, _>("/squad/settle", &request).await;
    match &result {
        Ok(ack) => log::info!("Settled with {}: success={}", member_id, ack.success),
        Err(e) => log::error!("Failed to settle with {}: {}", member_id, e),
    }
    result
}
