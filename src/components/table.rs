//! Declarative data table.
//!
//! Rendering is split from event handling: [`header_row`] and [`cell_text`]
//! compute the table model from plain row records and are testable without a
//! live page; [`DataTable`] is a thin Leptos view over them.

use leptos::*;
use serde_json::Value;

use crate::types::Record;

/// Header names for a row set: the first record's keys in native order.
///
/// Returns an empty vector for an empty row set. Later records are assumed
/// to share the same key set.
pub fn header_row(rows: &[Record]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Display text for a single cell value.
///
/// Strings render verbatim, null as empty, everything else in its JSON
/// form. Assigned as text content, so values cannot inject markup.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn DataTable(rows: ReadSignal<Vec<Record>>) -> impl IntoView {
    view! {
        <div class="table-wrap">
            {move || {
                let rows = rows.get();
                let headers = header_row(&rows);
                if rows.is_empty() {
                    view! { <div class="table-empty">"No rows to display"</div> }.into_view()
                } else {
                    view! {
                        <table class="data-table" id="previewTable">
                            <thead>
                                <tr>
                                    {headers
                                        .iter()
                                        .map(|name| view! { <th>{name.clone()}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                {headers
                                                    .iter()
                                                    .map(|name| {
                                                        let text = row
                                                            .get(name)
                                                            .map(cell_text)
                                                            .unwrap_or_default();
                                                        view! { <td>{text}</td> }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_header_row_empty() {
        assert!(header_row(&[]).is_empty());
    }

    #[test]
    fn test_header_row_native_key_order() {
        let rows = vec![record(json!({ "Order ID": 1, "Customer": "Acme", "Amount": 19.5 }))];
        assert_eq!(header_row(&rows), ["Order ID", "Customer", "Amount"]);
    }

    #[test]
    fn test_header_row_uses_first_record_only() {
        let rows = vec![
            record(json!({ "a": 1, "b": 2 })),
            record(json!({ "b": 2, "a": 1, "c": 3 })),
        ];
        assert_eq!(header_row(&rows), ["a", "b"]);
    }

    #[test]
    fn test_cell_text_scalars() {
        assert_eq!(cell_text(&json!("Acme")), "Acme");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(19.5)), "19.5");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_cell_text_does_not_quote_strings() {
        assert_eq!(cell_text(&json!("<b>x</b>")), "<b>x</b>");
    }
}
