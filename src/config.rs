//! Application configuration.
//!
//! Centralized configuration for the DataLens frontend. In development these
//! are hardcoded; in production they could be loaded from environment or a
//! config file.

/// Backend API base URL.
///
/// The DataLens backend server (upload parsing, duplicate detection,
/// search and filtering).
pub const BACKEND_URL: &str = "http://localhost:5001";

/// Maximum number of activity-log entries kept in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
