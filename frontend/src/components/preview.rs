//! Dataset preview table: the first rows of the file, every column.

use leptos::*;

use crate::types::{CsvInfo, PreviewTable};

#[component]
pub fn DatasetPreview(preview: PreviewTable, csv_info: CsvInfo) -> impl IntoView {
    let header = preview
        .columns
        .into_iter()
        .map(|c| view! { <th>{c}</th> })
        .collect_view();

    let rows = preview
        .rows
        .into_iter()
        .map(|row| {
            let cells = row.into_iter().map(|c| view! { <td>{c}</td> }).collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <section class="panel">
            <h2>"📄 Dataset Preview"</h2>
            <div class="csv-info">
                {format!(
                    "{} rows · {} columns · encoding {} · separator '{}'",
                    csv_info.row_count,
                    csv_info.columns.len(),
                    csv_info.encoding,
                    csv_info.delimiter,
                )}
            </div>
            <div class="table-scroll">
                <table class="data-table">
                    <thead><tr>{header}</tr></thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}
