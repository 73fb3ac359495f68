//! Clubs with five-star skill moves players.

use leptos::*;

use super::chart::BarChart;
use crate::types::FiveStarSummary;

#[component]
pub fn FiveStarSection(summary: FiveStarSummary) -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"🎯 Clubs with Players Having 5-Star Skill Moves"</h2>
            <p>
                "Total clubs with at least one 5-star skill player: "
                <strong>{summary.club_count}</strong>
            </p>
            <BarChart
                title="Top 10 Clubs with 5-Star Skill Players".to_string()
                entries=summary.view.entries
            />
        </section>
    }
}
