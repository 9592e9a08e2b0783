use serde::{Deserialize, Serialize};

/// Descriptor returned by the upload endpoint. Stored wholesale in an
/// entity's `thumbnail` field.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub uri: String,
}
