use stash_common::{CoinBalance, CoinsData, PurchaseRequest, PurchaseResponse, RewardsShopData};

use crate::api_client::{self, ApiError};

pub async fn get_coins() -> Result<CoinsData, ApiError> {
    log::trace!("Fetching coin wallet");
    let result = api_client::get::<CoinsData>("/coins").await;
    match &result {
        Ok(coins) => log::debug!(
            "Coin balance {} with {} history entries",
            coins.balance,
            coins.history.len()
        ),
        Err(e) => log::error!("Failed to fetch coins: {}", e),
    }
    result
}

pub async fn get_balance() -> Result<CoinBalance, ApiError> {
    log::trace!("Fetching coin balance");
    let result = api_client::get::<CoinBalance>("/coins/balance").await;
    if let Err(e) = &result {
        log::error!("Failed to fetch coin balance: {}", e);
    }
    result
}

pub async fn get_shop() -> Result<RewardsShopData, ApiError> {
    log::trace!("Fetching rewards shop");
    let result = api_client::get::<RewardsShopData>("/rewards-shop").await;
    match &result {
        Ok(shop) => log::debug!("Fetched {} shop rewards", shop.rewards.len()),
        Err(e) => log::error!("Failed to fetch rewards shop: {}", e),
    }
    result
}

/// A refused purchase still answers 200 with `success: false`.
pub async fn purchase(reward_id: &str) -> Result<PurchaseResponse, ApiError> {
    log::debug!("Purchasing reward {}", reward_id);
    let request = PurchaseRequest {
        reward_id: reward_id.to_string(),
    };
    let result = api_client::post::<PurchaseResponse, _>("/rewards-shop/purchase", &request).await;
    match &result {
        Ok(purchase) if purchase.success => log::info!(
            "Purchased reward {}, new balance {:?}",
            reward_id,
            purchase.new_balance
        ),
        Ok(purchase) => log::warn!("Purchase of {} refused: {:?}", reward_id, purchase.message),
        Err(e) => log::error!("Failed to purchase reward {}: {}", reward_id, e),
    }
    result
}
