//! Results section: dataset summary, duplicate search, global search and
//! column filtering over the uploaded dataset.
//!
//! Only rendered once an upload has succeeded; every operation here reads
//! the stored dataset and replaces the shared table rows on success.

use leptos::*;

use crate::components::{alert, push_log, DataTable};
use crate::services::{filter_by_column, find_duplicates, global_search};
use crate::types::{LogEntry, LogLevel, Record, UploadResult};
use crate::BACKEND_URL;

#[component]
pub fn ResultsSection(
    current_data: ReadSignal<Option<UploadResult>>,
    table_rows: ReadSignal<Vec<Record>>,
    set_table_rows: WriteSignal<Vec<Record>>,
    selected_column: ReadSignal<String>,
    set_selected_column: WriteSignal<String>,
    is_busy: ReadSignal<bool>,
    set_is_busy: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let columns = move || {
        current_data
            .get()
            .map(|data| data.columns)
            .unwrap_or_default()
    };

    let on_column_change = move |ev| {
        set_selected_column.set(event_target_value(&ev));
    };

    let on_find_dupes = move |_| {
        // No-op until a successful upload has stored a dataset.
        let Some(data) = current_data.get_untracked() else {
            return;
        };
        let column = selected_column.get_untracked();

        spawn_local(async move {
            set_is_busy.set(true);
            match find_duplicates(data.preview, &column, BACKEND_URL).await {
                Ok(result) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        &format!("{} duplicate entries in column \"{}\"", result.count, column),
                    );
                    alert(&format!("Found {} duplicate entries", result.count));
                    set_table_rows.set(result.duplicates);
                }
                Err(e) => {
                    log::error!("duplicate search failed: {}", e);
                    push_log(
                        set_logs,
                        LogLevel::Error,
                        &format!("Duplicate search failed: {}", e),
                    );
                    alert(&format!("Error finding duplicates: {}", e));
                }
            }
            set_is_busy.set(false);
        });
    };

    let on_show_preview = move |_| {
        if let Some(data) = current_data.get_untracked() {
            set_table_rows.set(data.preview);
        }
    };

    view! {
        <Show when=move || current_data.get().is_some() fallback=|| view! {}>
            <div class="results-section" id="resultsSection">
                <div class="file-info">
                    <span class="file-name" id="filename">
                        {move || current_data.get().map(|d| d.filename).unwrap_or_default()}
                    </span>
                    <span class="file-dimensions" id="dimensions">
                        {move || {
                            current_data
                                .get()
                                .map(|d| format!("{} × {}", d.stats.rows, d.stats.columns))
                                .unwrap_or_default()
                        }}
                    </span>
                    <span class="dupe-count" id="dupeCount">
                        {move || {
                            current_data
                                .get()
                                .map(|d| format!("{} duplicate rows", d.stats.duplicates))
                                .unwrap_or_default()
                        }}
                    </span>
                </div>

                <div class="toolbar">
                    <label for="dupeColumn">"Column:"</label>
                    <select id="dupeColumn" on:change=on_column_change>
                        <For
                            each=columns
                            key=|name| name.clone()
                            children=move |name| {
                                let value = name.clone();
                                view! {
                                    <option
                                        value=value.clone()
                                        selected=move || selected_column.get() == value
                                    >
                                        {name}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <button
                        class="btn btn-primary"
                        id="findDupesBtn"
                        on:click=on_find_dupes
                        disabled=move || is_busy.get()
                    >
                        "Find Duplicates"
                    </button>
                    <button class="btn btn-secondary" on:click=on_show_preview>
                        "Show Preview"
                    </button>
                </div>

                <SearchPanel
                    current_data=current_data
                    set_table_rows=set_table_rows
                    is_busy=is_busy
                    set_is_busy=set_is_busy
                    set_logs=set_logs
                />
                <FilterPanel
                    current_data=current_data
                    set_table_rows=set_table_rows
                    is_busy=is_busy
                    set_is_busy=set_is_busy
                    set_logs=set_logs
                />

                <DataTable rows=table_rows/>
            </div>
        </Show>
    }
}

/// Server-side text search across all columns.
#[component]
fn SearchPanel(
    current_data: ReadSignal<Option<UploadResult>>,
    set_table_rows: WriteSignal<Vec<Record>>,
    is_busy: ReadSignal<bool>,
    set_is_busy: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (match_count, set_match_count) = create_signal(None::<u64>);

    let on_search = move |_| {
        if current_data.get_untracked().is_none() {
            return;
        }
        let search_str = query.get_untracked();

        spawn_local(async move {
            set_is_busy.set(true);
            match global_search(&search_str, BACKEND_URL).await {
                Ok(result) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        &format!("{} rows match \"{}\"", result.count, search_str),
                    );
                    set_match_count.set(Some(result.count));
                    set_table_rows.set(result.results);
                }
                Err(e) => {
                    log::error!("global search failed: {}", e);
                    push_log(set_logs, LogLevel::Error, &format!("Search failed: {}", e));
                    alert(&format!("Error searching: {}", e));
                }
            }
            set_is_busy.set(false);
        });
    };

    view! {
        <div class="panel search-panel">
            <input
                type="text"
                id="searchInput"
                placeholder="Search all columns..."
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button
                class="btn btn-secondary"
                id="searchBtn"
                on:click=on_search
                disabled=move || is_busy.get()
            >
                "Search"
            </button>
            <span class="panel-status">
                {move || match_count.get().map(|n| format!("{} matching rows", n))}
            </span>
        </div>
    }
}

/// Server-side filter by column value, exact or substring.
#[component]
fn FilterPanel(
    current_data: ReadSignal<Option<UploadResult>>,
    set_table_rows: WriteSignal<Vec<Record>>,
    is_busy: ReadSignal<bool>,
    set_is_busy: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (filter_column, set_filter_column) = create_signal(String::new());
    let (filter_value, set_filter_value) = create_signal(String::new());
    let (exact_match, set_exact_match) = create_signal(true);
    let (match_count, set_match_count) = create_signal(None::<u64>);

    let columns = move || {
        current_data
            .get()
            .map(|data| data.columns)
            .unwrap_or_default()
    };

    // Default to the first column whenever a new dataset arrives.
    create_effect(move |_| {
        if let Some(first) = columns().first() {
            set_filter_column.set(first.clone());
        }
    });

    let on_filter = move |_| {
        if current_data.get_untracked().is_none() {
            return;
        }
        let column = filter_column.get_untracked();
        let value = filter_value.get_untracked();
        let exact = exact_match.get_untracked();

        spawn_local(async move {
            set_is_busy.set(true);
            match filter_by_column(&column, &value, exact, BACKEND_URL).await {
                Ok(result) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        &format!("{} rows where \"{}\" matches \"{}\"", result.count, column, value),
                    );
                    set_match_count.set(Some(result.count));
                    set_table_rows.set(result.filtered_data);
                }
                Err(e) => {
                    log::error!("filter failed: {}", e);
                    push_log(set_logs, LogLevel::Error, &format!("Filter failed: {}", e));
                    alert(&format!("Error filtering: {}", e));
                }
            }
            set_is_busy.set(false);
        });
    };

    view! {
        <div class="panel filter-panel">
            <select
                id="filterColumn"
                on:change=move |ev| set_filter_column.set(event_target_value(&ev))
            >
                <For
                    each=columns
                    key=|name| name.clone()
                    children=move |name| {
                        let value = name.clone();
                        view! {
                            <option
                                value=value.clone()
                                selected=move || filter_column.get() == value
                            >
                                {name}
                            </option>
                        }
                    }
                />
            </select>
            <input
                type="text"
                id="filterValue"
                placeholder="Value..."
                prop:value=filter_value
                on:input=move |ev| set_filter_value.set(event_target_value(&ev))
            />
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    id="filterExact"
                    prop:checked=exact_match
                    on:change=move |ev| set_exact_match.set(event_target_checked(&ev))
                />
                "Exact match"
            </label>
            <button
                class="btn btn-secondary"
                id="filterBtn"
                on:click=on_filter
                disabled=move || is_busy.get()
            >
                "Filter"
            </button>
            <span class="panel-status">
                {move || match_count.get().map(|n| format!("{} matching rows", n))}
            </span>
        </div>
    }
}
