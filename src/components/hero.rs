//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"DataLens - Data Analysis"</h1>
            <p class="subtitle">
                "Upload a CSV or Excel file to preview its contents, "
                "find duplicate rows, and search or filter the data."
            </p>
        </div>
    }
}
