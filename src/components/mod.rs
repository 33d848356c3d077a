//! UI Components for the DataLens application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - file upload
//! - [`ResultsSection`] - dataset summary, duplicate search, search/filter
//! - [`DataTable`] - declarative row table
//! - [`ActivityLog`] - on-page operation log

mod footer;
mod hero;
mod logs;
mod results;
mod table;
mod upload;

pub use footer::*;
pub use hero::*;
pub use logs::*;
pub use results::*;
pub use table::*;
pub use upload::*;

/// Blocking notification via the browser's alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        // A failed alert only loses the notification, nothing to recover.
        let _ = window.alert_with_message(message);
    }
}
