use serde::{Deserialize, Serialize};

use crate::model::asset::AssetDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServerTypeDto {
    pub name: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub id: i64,
    pub server_name: String,
    pub server_type: ServerTypeDto,
    pub active: bool,
    pub thumbnail: Option<AssetDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedServersDto {
    pub content: Vec<ServerDto>,
    /// 1-based page index echoed by the API.
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}
