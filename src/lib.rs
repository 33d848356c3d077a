//! DataLens - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading tabular data files and running
//! server-side duplicate detection, search and filtering on them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection                                          │
//! │  ├── ActivityLog                                            │
//! │  └── ResultsSection (when a dataset is loaded)              │
//! │      ├── file info + column selector + Find Duplicates      │
//! │      ├── SearchPanel / FilterPanel                          │
//! │      └── DataTable                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API payloads, row records, errors
//! - [`components`] - UI components
//! - [`services`] - backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Rows
    Record,
    // API
    DuplicatesResult, FilteredResult, SearchResult, UploadResult, UploadStats,
    // Logs
    LogEntry, LogLevel,
    // Errors
    AppError, AppResult,
};

pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 DataLens - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application.
    //
    // `current_data` is None until the first successful upload; the upload
    // handler is its only writer, every analysis operation only reads it.
    let (current_data, set_current_data) = create_signal(None::<UploadResult>);
    let (table_rows, set_table_rows) = create_signal(Vec::<Record>::new());
    let (selected_column, set_selected_column) = create_signal(String::new());
    let (is_busy, set_is_busy) = create_signal(false);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                set_current_data=set_current_data
                set_table_rows=set_table_rows
                set_selected_column=set_selected_column
                is_busy=is_busy
                set_is_busy=set_is_busy
                set_logs=set_logs
            />

            <ActivityLog logs=logs set_logs=set_logs/>

            <ResultsSection
                current_data=current_data
                table_rows=table_rows
                set_table_rows=set_table_rows
                selected_column=selected_column
                set_selected_column=set_selected_column
                is_busy=is_busy
                set_is_busy=set_is_busy
                set_logs=set_logs
            />
        </div>

        <Footer/>
    }
}
