//! Hero section component

use leptos::*;

use crate::config::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"⚽ " {APP_TITLE}</h1>
            <p class="subtitle">
                "An interactive dashboard exploring clubs, nations, and player performance metrics."
            </p>
        </div>
    }
}
