use stash_common::{
    ClaimResponse, MissionToggleRequest, MissionToggleResponse, StreakData, StreakReward,
    SurvivalMission,
};

use crate::api_client::{self, segment, ApiError};

pub async fn get_streaks() -> Result<StreakData, ApiError> {
    log::trace!("Fetching streaks");
    let result = api_client::get::<StreakData>("/streaks").await;
    match &result {
        Ok(streaks) => log::debug!("Current streak: {} days", streaks.current_streak),
        Err(e) => log::error!("Failed to fetch streaks: {}", e),
    }
    result
}

pub async fn get_missions() -> Result<Vec<SurvivalMission>, ApiError> {
    log::trace!("Fetching survival missions");
    let result = api_client::get::<Vec<SurvivalMission>>("/survival-missions").await;
    match &result {
        Ok(missions) => log::debug!("Fetched {} missions", missions.len()),
        Err(e) => log::error!("Failed to fetch missions: {}", e),
    }
    result
}

pub async fn toggle_mission(mission_id: &str) -> Result<MissionToggleResponse, ApiError> {
    log::debug!("Toggling mission {}", mission_id);
    let request = MissionToggleRequest {
        mission_id: mission_id.to_string(),
    };
    let result =
        api_client::post::<MissionToggleResponse, _>("/survival-missions/toggle", &request).await;
    match &result {
        Ok(toggle) => log::info!(
            "Mission {} completed={} (+{} coins)",
            mission_id,
            toggle.completed,
            toggle.coins_earned
        ),
        Err(e) => log::error!("Failed to toggle mission {}: {}", mission_id, e),
    }
    result
}

pub async fn get_rewards() -> Result<Vec<StreakReward>, ApiError> {
    log::trace!("Fetching streak rewards");
    let result = api_client::get::<Vec<StreakReward>>("/streaks/rewards").await;
    match &result {
        Ok(rewards) => log::debug!("Fetched {} streak rewards", rewards.len()),
        Err(e) => log::error!("Failed to fetch streak rewards: {}", e),
    }
    result
}

pub async fn claim_reward(reward_id: &str) -> Result<ClaimResponse, ApiError> {
    log::debug!("Claiming streak reward {}", reward_id);
    let endpoint = format!("/streaks/rewards/{}/claim", segment(reward_id));
    let result = api_client::post_empty::<ClaimResponse>(&endpoint).await;
    match &result {
        Ok(claim) if claim.success => log::info!("Claimed reward {}", reward_id),
        Ok(claim) => log::warn!("Claim of {} refused: {:?}", reward_id, claim.message),
        Err(e) => log::error!("Failed to claim reward {}: {}", reward_id, e),
    }
    result
}
