use stash_common::{NewExpenseRequest, ReceiptScanResponse, TransactionDto};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::api_client::{self, ApiError};

/// Get all logged transactions
pub async fn get_transactions() -> Result<Vec<TransactionDto>, ApiError> {
    log::trace!("Fetching transactions");
    let result = api_client::get::<Vec<TransactionDto>>("/transactions").await;
    match &result {
        Ok(transactions) => log::debug!("Fetched {} transactions", transactions.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Log a new expense
pub async fn add_expense(request: NewExpenseRequest) -> Result<TransactionDto, ApiError> {
    log::debug!("Logging expense of {} in {}", request.amount, request.category);
    let result = api_client::post::<TransactionDto, _>("/transactions", &request).await;
    match &result {
        Ok(tx) => log::info!("Logged expense {} at {}", tx.id, tx.merchant),
        Err(e) => log::error!("Failed to log expense: {}", e),
    }
    result
}

fn receipt_form(file: &File) -> Result<FormData, ApiError> {
    let describe = |e: JsValue| ApiError::Encode(format!("{:?}", e));
    let form = FormData::new().map_err(describe)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(describe)?;
    Ok(form)
}

/// Upload a receipt image for parsing
pub async fn scan_receipt(file: File) -> Result<ReceiptScanResponse, ApiError> {
    log::trace!("Scanning receipt {} ({} bytes)", file.name(), file.size());
    let form = receipt_form(&file)?;
    let result = api_client::post_multipart::<ReceiptScanResponse>("/expense/scan", form).await;
    match &result {
        Ok(scan) => log::info!(
            "Receipt scan finished via {}: success={}",
            scan.method.label(),
            scan.success
        ),
        Err(e) => log::error!("Failed to scan receipt: {}", e),
    }
    result
}
