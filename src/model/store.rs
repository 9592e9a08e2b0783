use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::asset::AssetDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoreDto {
    pub id: i64,
    pub full_name: String,
    pub short_name: String,
    pub phone_number: String,
    pub street: String,
    pub active: bool,
    pub thumbnail: Option<AssetDto>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedStoresDto {
    pub content: Vec<StoreDto>,
    /// 1-based page index echoed by the API.
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}
