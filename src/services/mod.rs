//! Backend services.
//!
//! This module provides the HTTP calls to the DataLens backend:
//!
//! - [`api::upload_file`] - multipart file upload and parsing
//! - [`api::find_duplicates`] - duplicate detection on a column
//! - [`api::global_search`] - case-insensitive search across all columns
//! - [`api::filter_by_column`] - filter rows by a column value

pub mod api;

pub use api::*;
