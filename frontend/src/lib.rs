//! FIFA 23 Intelligence Dashboard - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that renders the views computed by the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (data source, player count)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DashboardView (preview, charts, tables)                │
//! │  ├── UploadSection                                           │
//! │  └── LogsPanel                                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API response mirrors, log entries, errors
//! - [`components`] - UI components (charts, tables, upload, logs)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
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
    AggregationView, AppError, AppResult, DashboardResponse, LogEntry, LogLevel, PlayerProjection,
    ViewEntry,
};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("⚽ FIFA insights - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
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
    let (dashboard, set_dashboard) = create_signal(None::<DashboardResponse>);
    let (load_error, set_load_error) = create_signal(None::<String>);
    let (source, set_source) = create_signal("fifa23.csv".to_string());
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    // Initialize SSE connection ONCE at app startup
    init_sse_logs(set_logs);

    spawn_local(async move {
        match fetch_dashboard(BACKEND_URL).await {
            Ok(response) => set_dashboard.set(Some(response)),
            Err(e) => {
                log::error!("Failed to load dashboard: {}", e);
                set_load_error.set(Some(e.to_string()));
            }
        }
    });

    let row_count = Signal::derive(move || {
        dashboard.with(|d| d.as_ref().map(|d| d.metadata.csv_info.row_count))
    });

    view! {
        <Header source=source row_count=row_count/>

        <div class="container">
            <Hero/>

            <Show when=move || load_error.get().is_some() fallback=|| view! {}>
                <div class="error-message">{move || load_error.get().unwrap_or_default()}</div>
            </Show>

            {move || match dashboard.get() {
                Some(data) => view! { <DashboardView data=data/> }.into_view(),
                None if load_error.get().is_none() => {
                    view! { <div class="loading">"⏳ Loading dashboard..."</div> }.into_view()
                }
                None => ().into_view(),
            }}

            <UploadSection set_dashboard=set_dashboard set_source=set_source set_logs=set_logs/>

            <LogsPanel logs=logs set_logs=set_logs/>
        </div>

        <Footer/>
    }
}
