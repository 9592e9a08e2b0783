use serde_json::Value;

use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::{error::ApiError, list::PageRequest},
    },
    model::store::{PaginatedStoresDto, StoreDto},
};

pub async fn get_stores(request: &PageRequest) -> Result<PaginatedStoresDto, ApiError> {
    let url = format!("/api/v1/store?{}", request.query());
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_store(id: i64) -> Result<StoreDto, ApiError> {
    let url = format!("/api/v1/store/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_store(id: i64, draft: &Value) -> Result<StoreDto, ApiError> {
    let url = format!("/api/v1/store/{}", id);
    let body = serialize_json(draft)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
