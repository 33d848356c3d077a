//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Row Types** - tabular row records
//! - **API Types** - backend request/response structures
//! - **Log Types** - activity log entries
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Row Types
// =============================================================================

/// A single tabular row: column name to scalar value.
///
/// `serde_json` is built with `preserve_order`, so key iteration order is
/// the order the server emitted the columns in.
pub type Record = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// API Response Types
// =============================================================================

/// Dataset statistics computed by the backend on upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadStats {
    /// Total row count of the parsed file.
    pub rows: u64,
    /// Total column count.
    pub columns: u64,
    /// Fully-duplicated row count (all columns equal).
    pub duplicates: u64,
}

/// Response from the upload endpoint.
///
/// Held as the application's `current_data` until the next successful
/// upload replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Original filename as uploaded.
    pub filename: String,
    /// Column names in the file's native order.
    pub columns: Vec<String>,
    /// Row/column/duplicate counts.
    pub stats: UploadStats,
    /// Bounded sample of parsed rows for display.
    #[serde(default)]
    pub preview: Vec<Record>,
}

/// Response from the duplicate-detection endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DuplicatesResult {
    /// Number of rows sharing a value in the selected column.
    pub count: u64,
    #[serde(default)]
    pub duplicates: Vec<Record>,
}

/// Response from the global-search endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchResult {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Record>,
}

/// Response from the filter-by-column endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilteredResult {
    pub count: u64,
    #[serde(default)]
    pub filtered_data: Vec<Record>,
}

// =============================================================================
// API Request Types
// =============================================================================

/// Body for `POST /data/find_duplicates`.
#[derive(Clone, Debug, Serialize)]
pub struct FindDuplicatesRequest {
    /// The stored preview rows, sent back verbatim.
    pub data: Vec<Record>,
    /// Column to detect duplicates on.
    pub column: String,
}

/// Body for `POST /data/global_search`.
#[derive(Clone, Debug, Serialize)]
pub struct GlobalSearchRequest {
    pub search_str: String,
}

/// Body for `POST /data/filter_by_column`.
#[derive(Clone, Debug, Serialize)]
pub struct FilterRequest {
    pub column: String,
    pub value: String,
    pub exact_match: bool,
}

/// Decoded shape of any backend reply.
///
/// Every endpoint answers either `{ "error": "..." }` or its success
/// payload. The error variant comes first so a body carrying an `error`
/// field never decodes as a payload, whatever the HTTP status was.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Failure { error: String },
    Success(T),
}

// =============================================================================
// Log Types
// =============================================================================

/// Activity log severity level.
#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Warning => "⚠️",
        }
    }
}

/// A single entry in the on-page activity log.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS).
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all backend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Request could not be built or sent.
    Network(String),
    /// Backend answered with an `error` field or a bare failure status.
    Server(String),
    /// Response body did not match the expected payload shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            AppError::Server(msg) => write!(f, "{}", msg),
            AppError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_result_deserialization() {
        // Shape emitted by the backend's upload handler, including the
        // `success` flag the decoder ignores.
        let json = r#"{
            "success": true,
            "filename": "orders.csv",
            "columns": ["Order ID", "Customer", "Amount"],
            "stats": { "rows": 120, "columns": 3, "duplicates": 4 },
            "preview": [
                { "Order ID": 1001, "Customer": "Acme", "Amount": 19.5 },
                { "Order ID": 1002, "Customer": null, "Amount": 7 }
            ]
        }"#;

        let result: UploadResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.filename, "orders.csv");
        assert_eq!(result.columns, vec!["Order ID", "Customer", "Amount"]);
        assert_eq!(result.stats.rows, 120);
        assert_eq!(result.stats.duplicates, 4);
        assert_eq!(result.preview.len(), 2);
        assert_eq!(result.preview[1]["Customer"], serde_json::Value::Null);
    }

    #[test]
    fn test_preview_preserves_column_order() {
        let json = r#"{
            "filename": "t.csv",
            "columns": ["b", "a"],
            "stats": { "rows": 1, "columns": 2, "duplicates": 0 },
            "preview": [ { "b": 1, "a": 2 } ]
        }"#;

        let result: UploadResult = serde_json::from_str(json).unwrap();
        let keys: Vec<&String> = result.preview[0].keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_api_reply_error_takes_precedence() {
        let reply: ApiReply<UploadResult> =
            serde_json::from_str(r#"{ "error": "The file is empty" }"#).unwrap();
        match reply {
            ApiReply::Failure { error } => assert_eq!(error, "The file is empty"),
            ApiReply::Success(_) => panic!("error body decoded as payload"),
        }
    }

    #[test]
    fn test_api_reply_success_payload() {
        let reply: ApiReply<DuplicatesResult> = serde_json::from_str(
            r#"{ "success": true, "count": 3, "duplicates": [ { "id": 1 }, { "id": 1 }, { "id": 1 } ] }"#,
        )
        .unwrap();
        match reply {
            ApiReply::Success(result) => {
                assert_eq!(result.count, 3);
                assert_eq!(result.duplicates.len(), 3);
            }
            ApiReply::Failure { error } => panic!("payload decoded as error: {}", error),
        }
    }

    #[test]
    fn test_find_duplicates_request_echoes_preview() {
        let preview: Vec<Record> = vec![
            json!({ "id": 1, "name": "a" }).as_object().unwrap().clone(),
            json!({ "id": 2, "name": "b" }).as_object().unwrap().clone(),
        ];
        let request = FindDuplicatesRequest {
            data: preview.clone(),
            column: "name".to_string(),
        };

        let body: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(body["column"], "name");
        assert_eq!(body["data"], serde_json::Value::Array(preview.into_iter().map(Into::into).collect()));
    }

    #[test]
    fn test_filter_request_serialization() {
        let request = FilterRequest {
            column: "Customer".to_string(),
            value: "Acme".to_string(),
            exact_match: false,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "column": "Customer", "value": "Acme", "exact_match": false }));
    }
}
