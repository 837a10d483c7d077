use stash_common::ProfileData;

use crate::api_client::{self, ApiError};

pub async fn get_profile() -> Result<ProfileData, ApiError> {
    log::trace!("Fetching profile");
    let result = api_client::get::<ProfileData>("/profile").await;
    match &result {
        Ok(profile) => log::debug!("Fetched profile for {}", profile.name),
        Err(e) => log::error!("Failed to fetch profile: {}", e),
    }
    result
}
