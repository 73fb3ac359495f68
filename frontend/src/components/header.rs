//! Top bar: app name and the source of the data on screen.

use leptos::*;

#[component]
pub fn Header(
    /// File the dashboard was computed from
    source: ReadSignal<String>,
    /// Rows in that file, once loaded
    row_count: Signal<Option<usize>>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"FIFA 23 INSIGHTS"</a>
            </div>
            <div class="header-right">
                <span class="badge">{move || source.get()}</span>
                <span class="badge">
                    {move || match row_count.get() {
                        Some(n) => format!("{} players", n),
                        None => "-- players".to_string(),
                    }}
                </span>
            </div>
        </header>
    }
}
