//! File upload component.
//!
//! Handles file selection, upload to the backend, and storing the parsed
//! result as the application's current dataset.

use leptos::*;

use crate::components::{alert, push_log};
use crate::services::upload_file;
use crate::types::{LogEntry, LogLevel, Record, UploadResult};
use crate::BACKEND_URL;

#[component]
pub fn UploadSection(
    set_current_data: WriteSignal<Option<UploadResult>>,
    set_table_rows: WriteSignal<Vec<Record>>,
    set_selected_column: WriteSignal<String>,
    is_busy: ReadSignal<bool>,
    set_is_busy: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    let on_upload_click = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        let Some(file) = file else {
            alert("Please select a file first");
            return;
        };

        spawn_local(async move {
            set_is_busy.set(true);
            push_log(
                set_logs,
                LogLevel::Info,
                &format!("Uploading {}...", file.name()),
            );

            match upload_file(file, BACKEND_URL).await {
                Ok(result) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        &format!(
                            "Parsed {}: {} rows, {} columns, {} duplicate rows",
                            result.filename,
                            result.stats.rows,
                            result.stats.columns,
                            result.stats.duplicates
                        ),
                    );
                    // First column is the default duplicate-search target.
                    set_selected_column.set(result.columns.first().cloned().unwrap_or_default());
                    set_table_rows.set(result.preview.clone());
                    set_current_data.set(Some(result));
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    push_log(set_logs, LogLevel::Error, &format!("Upload failed: {}", e));
                    alert(&format!("Error processing file: {}", e));
                }
            }

            set_is_busy.set(false);
        });
    };

    view! {
        <div class="upload-section" id="uploadZone">
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || if is_busy.get() { "⏳ Processing..." } else { "Select a data file" }}
            </div>
            <div class="upload-hint">"Supported formats: CSV, XLSX, XLS"</div>

            <input
                type="file"
                id="fileInput"
                accept=".csv,.xlsx,.xls"
                node_ref=file_input
            />

            <button
                class="btn btn-primary"
                id="uploadBtn"
                on:click=on_upload_click
                disabled=move || is_busy.get()
            >
                "Upload & Analyze"
            </button>
        </div>
    }
}
