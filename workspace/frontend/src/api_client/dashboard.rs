use stash_common::DashboardData;

use crate::api_client::{self, ApiError};

/// Get the dashboard summary
pub async fn get_dashboard() -> Result<DashboardData, ApiError> {
    log::trace!("Fetching dashboard");
    let result = api_client::get::<DashboardData>("/dashboard").await;
    match &result {
        Ok(data) => log::debug!(
            "Fetched dashboard for {} ({} days of runway)",
            data.user.name,
            data.runway.days_left
        ),
        Err(e) => log::error!("Failed to fetch dashboard: {}", e),
    }
    result
}
