use js_sys::{Array, Uint8Array};
use reqwasm::http::Request;
use web_sys::wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::{
    client::{api::helper::decode_error_message, model::error::UploadError},
    model::asset::AssetDto,
};

/// Uploads one file as a multipart body under the `file` field and returns
/// the stored asset descriptor. Failures are reported to the caller, who
/// decides display policy; the form draft is only written on success.
pub async fn upload_asset(
    endpoint: &str,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<AssetDto, UploadError> {
    let parts = Array::new();
    parts.push(&JsValue::from(Uint8Array::from(bytes.as_slice())));
    let file = File::new_with_u8_array_sequence(&parts, file_name)
        .map_err(|e| UploadError::Prepare(format!("{:?}", e)))?;

    let form = FormData::new().map_err(|e| UploadError::Prepare(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", &file, file_name)
        .map_err(|e| UploadError::Prepare(format!("{:?}", e)))?;

    // The browser supplies the multipart content type and boundary.
    let response = Request::post(endpoint)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let status = response.status() as u64;
    if !(200..300).contains(&status) {
        let message = decode_error_message(&response).await;
        return Err(UploadError::Rejected { status, message });
    }

    response
        .json::<AssetDto>()
        .await
        .map_err(|e| UploadError::Parse(e.to_string()))
}
