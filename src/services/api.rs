//! HTTP client for the DataLens backend.
//!
//! All endpoints answer JSON: either `{ "error": "..." }` or the operation's
//! success payload. Decoding goes through [`ApiReply`] so an error body is
//! surfaced as [`AppError::Server`] regardless of HTTP status.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use crate::types::{
    ApiReply, AppError, AppResult, DuplicatesResult, FilterRequest, FilteredResult,
    FindDuplicatesRequest, GlobalSearchRequest, Record, SearchResult, UploadResult,
};

/// Upload a data file for parsing and analysis.
///
/// Sends the file as a multipart body under field `file` and returns the
/// parsed dataset summary.
pub async fn upload_file(file: File, base_url: &str) -> AppResult<UploadResult> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Network(format!("failed to append file: {:?}", e)))?;

    let url = format!("{}/data/upload", base_url);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("request failed: {}", e)))?;

    decode(response).await
}

/// Ask the backend for rows duplicated in `column`.
///
/// The stored preview is echoed back as the request's `data` field.
pub async fn find_duplicates(
    preview: Vec<Record>,
    column: &str,
    base_url: &str,
) -> AppResult<DuplicatesResult> {
    let body = FindDuplicatesRequest {
        data: preview,
        column: column.to_string(),
    };
    post_json(&format!("{}/data/find_duplicates", base_url), &body).await
}

/// Case-insensitive search across all columns.
pub async fn global_search(search_str: &str, base_url: &str) -> AppResult<SearchResult> {
    let body = GlobalSearchRequest {
        search_str: search_str.to_string(),
    };
    post_json(&format!("{}/data/global_search", base_url), &body).await
}

/// Filter rows by a column value, exact or substring.
pub async fn filter_by_column(
    column: &str,
    value: &str,
    exact_match: bool,
    base_url: &str,
) -> AppResult<FilteredResult> {
    let body = FilterRequest {
        column: column.to_string(),
        value: value.to_string(),
        exact_match,
    };
    post_json(&format!("{}/data/filter_by_column", base_url), &body).await
}

/// POST a JSON body and decode the reply.
async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> AppResult<T> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| AppError::Network(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("request failed: {}", e)))?;

    decode(response).await
}

/// Decode a backend reply into its payload or an error.
async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("failed to read response: {}", e)))?;

    match serde_json::from_str::<ApiReply<T>>(&text) {
        Ok(ApiReply::Failure { error }) => Err(AppError::Server(error)),
        Ok(ApiReply::Success(payload)) => Ok(payload),
        Err(_) if !ok => Err(AppError::Server(format!("server error ({})", status))),
        Err(e) => Err(AppError::Decode(e.to_string())),
    }
}
