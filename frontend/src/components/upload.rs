//! Upload box: explore another CSV without touching the server's file.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use super::logs::{local_log, push_log};
use crate::config::BACKEND_URL;
use crate::services::upload_csv;
use crate::types::{DashboardResponse, LogEntry, LogLevel};

#[component]
pub fn UploadSection(
    set_dashboard: WriteSignal<Option<DashboardResponse>>,
    set_source: WriteSignal<String>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_error.set(None);
        let name = file.name();

        spawn_local(async move {
            set_is_uploading.set(true);
            set_logs.update(|logs| {
                push_log(logs, local_log(LogLevel::Info, format!("📤 Uploading {}...", name)))
            });

            match upload_csv(file, BACKEND_URL).await {
                Ok(response) => {
                    let rows = response.metadata.csv_info.row_count;
                    set_logs.update(|logs| {
                        push_log(
                            logs,
                            local_log(LogLevel::Success, format!("✅ {}: {} players loaded", name, rows)),
                        )
                    });
                    set_source.set(name);
                    set_dashboard.set(Some(response));
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    let message = e.to_string();
                    set_logs.update(|logs| {
                        push_log(logs, local_log(LogLevel::Error, format!("❌ {}", message)))
                    });
                    set_error.set(Some(message));
                }
            }

            set_is_uploading.set(false);
        });
    };

    let trigger_file_input = move |_| {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("fileInput"));
        if let Some(html_input) = input.as_ref().and_then(|i| i.dyn_ref::<HtmlInputElement>()) {
            html_input.click();
        }
    };

    view! {
        <div class="upload-section" id="uploadZone" on:click=trigger_file_input>
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || if is_uploading.get() {
                    "⏳ Uploading and processing..."
                } else {
                    "Explore another FIFA 23 CSV"
                }}
            </div>

            <Show when=move || !is_uploading.get() fallback=|| view! {}>
                <div class="upload-hint">
                    "Needs the columns Full Name, Club Name, Nationality, Overall, Finishing, "
                    "Shot Power, Positioning, International Reputation, Wage(in Euro), Skill Moves"
                </div>
            </Show>

            <Show when=move || error.get().is_some() fallback=|| view! {}>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <input
                type="file"
                id="fileInput"
                accept=".csv"
                style="display:none"
                on:change=on_file_change
            />
        </div>
    }
}
