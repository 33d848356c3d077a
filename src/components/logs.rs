//! On-page activity log.
//!
//! Every operation (upload, duplicate search, search, filter) appends
//! entries here so the user can see what happened without opening the
//! browser console.

use leptos::*;

use crate::types::{LogEntry, LogLevel};
use crate::MAX_LOG_ENTRIES;

/// Append an entry, trimming the oldest past [`MAX_LOG_ENTRIES`].
///
/// Also mirrors the message to the console logger.
pub fn push_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();

    log::info!("{}", message);

    set_logs.update(|logs| {
        logs.push(LogEntry {
            level,
            message: message.to_string(),
            timestamp,
        });
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    });
}

#[component]
pub fn ActivityLog(
    logs: ReadSignal<Vec<LogEntry>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let on_clear = move |_| set_logs.set(Vec::new());

    view! {
        <Show when=move || !logs.get().is_empty() fallback=|| view! {}>
            <div class="logs-panel">
                <div class="logs-header">
                    <div class="logs-title">"Activity"</div>
                    <button class="btn btn-secondary" on:click=on_clear>"Clear"</button>
                </div>
                <div class="logs-list">
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-timestamp">{entry.timestamp.clone()}</span>
                                    " "
                                    {entry.level.emoji()}
                                    " "
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
