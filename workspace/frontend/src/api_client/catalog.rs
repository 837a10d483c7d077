use stash_common::{FxData, GroceryItem, MarketListing, Perk};

use crate::api_client::{self, ApiError};

pub async fn get_perks() -> Result<Vec<Perk>, ApiError> {
    log::trace!("Fetching perks");
    let result = api_client::get::<Vec<Perk>>("/perks").await;
    match &result {
        Ok(perks) => log::debug!("Fetched {} perks", perks.len()),
        Err(e) => log::error!("Failed to fetch perks: {}", e),
    }
    result
}

pub async fn get_grocery_items() -> Result<Vec<GroceryItem>, ApiError> {
    log::trace!("Fetching grocery catalog");
    let result = api_client::get::<Vec<GroceryItem>>("/grocery").await;
    match &result {
        Ok(items) => log::debug!("Fetched {} grocery items", items.len()),
        Err(e) => log::error!("Failed to fetch grocery items: {}", e),
    }
    result
}

pub async fn get_market_listings() -> Result<Vec<MarketListing>, ApiError> {
    log::trace!("Fetching market listings");
    let result = api_client::get::<Vec<MarketListing>>("/market").await;
    match &result {
        Ok(listings) => log::debug!("Fetched {} market listings", listings.len()),
        Err(e) => log::error!("Failed to fetch market listings: {}", e),
    }
    result
}

pub async fn get_fx() -> Result<FxData, ApiError> {
    log::trace!("Fetching FX rates");
    let result = api_client::get::<FxData>("/fx").await;
    match &result {
        Ok(fx) => log::debug!(
            "Fetched {}/{} at {} with {} history points",
            fx.base_currency,
            fx.target_currency,
            fx.current_rate,
            fx.historical_rates.len()
        ),
        Err(e) => log::error!("Failed to fetch FX rates: {}", e),
    }
    result
}
