use serde_json::Value;

use crate::{
    client::{
        api::helper::{get, parse_response, put, send_request, serialize_json},
        model::{error::ApiError, list::PageRequest},
    },
    model::server::{PaginatedServersDto, ServerDto},
};

pub async fn get_servers(request: &PageRequest) -> Result<PaginatedServersDto, ApiError> {
    let url = format!("/api/v1/server?{}", request.query());
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_server(id: i64) -> Result<ServerDto, ApiError> {
    let url = format!("/api/v1/server/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Persists a submitted form draft. The draft is the opaque JSON object the
/// form controller produced; the API echoes the stored entity back.
pub async fn update_server(id: i64, draft: &Value) -> Result<ServerDto, ApiError> {
    let url = format!("/api/v1/server/{}", id);
    let body = serialize_json(draft)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}
