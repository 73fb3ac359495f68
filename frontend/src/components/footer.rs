//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Data: FIFA 23 player attributes • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="/health" class="footer-link" target="_blank">"API status"</a>
            </div>
        </footer>
    }
}
