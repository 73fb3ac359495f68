//! All dashboard panels for one response.

use leptos::*;

use super::attackers::TopAttackers;
use super::chart::BarChart;
use super::five_star::FiveStarSection;
use super::preview::DatasetPreview;
use crate::types::DashboardResponse;

#[component]
pub fn DashboardView(data: DashboardResponse) -> impl IntoView {
    let DashboardResponse {
        status,
        generated_at,
        preview,
        views,
        metadata,
        ..
    } = data;

    let warning = (status == "warning").then(|| {
        let sample = metadata
            .warnings
            .sample
            .iter()
            .take(3)
            .map(|w| view! { <li>{format!("Line {}, {}: '{}'", w.line, w.column, w.value)}</li> })
            .collect_view();
        view! {
            <div class="warning-banner">
                {format!("⚠️ {} value(s) could not be read as numbers and were treated as missing", metadata.warnings.total)}
                <ul>{sample}</ul>
            </div>
        }
    });

    view! {
        <div class="dashboard">
            {warning}
            <DatasetPreview preview=preview csv_info=metadata.csv_info/>

            <section class="panel">
                <h2>"🌍 Club Popularity (Avg International Reputation)"</h2>
                <BarChart title="Top 10 Most Popular Clubs".to_string() entries=views.club_reputation.entries/>
            </section>

            <TopAttackers players=views.top_attackers/>

            <section class="panel">
                <h2>"🏴‍☠️ Top Nations by Average Attacking Prowess"</h2>
                <BarChart title="Top 10 Nations by Attacking Strength".to_string() entries=views.nation_attack.entries/>
            </section>

            <section class="panel">
                <h2>"💰 Top Clubs by Total Wage (in Euro)"</h2>
                <BarChart title="Top 10 Clubs by Total Wage".to_string() entries=views.club_wages.entries unit=" €"/>
            </section>

            <FiveStarSection summary=views.five_star/>

            <div class="generated-at">{format!("Generated at {}", generated_at)}</div>
        </div>
    }
}
