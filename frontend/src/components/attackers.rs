//! Top attackers: ranking table and chart.

use leptos::*;

use super::chart::{format_value, BarChart};
use crate::types::{PlayerProjection, ViewEntry};

fn cell(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| "-".to_string())
}

/// Chart entries for the players that have a score.
pub fn attacker_entries(players: &[PlayerProjection]) -> Vec<ViewEntry> {
    players
        .iter()
        .filter_map(|p| {
            p.attacking_prowess.map(|value| ViewEntry {
                label: p.full_name.clone(),
                value,
            })
        })
        .collect()
}

#[component]
pub fn TopAttackers(players: Vec<PlayerProjection>) -> impl IntoView {
    let entries = attacker_entries(&players);

    let rows = players
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <tr>
                    <td>{i + 1}</td>
                    <td>{p.full_name}</td>
                    <td>{p.club_name}</td>
                    <td>{p.nationality}</td>
                    <td class="num">{cell(p.attacking_prowess)}</td>
                    <td class="num">{cell(p.overall)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="panel">
            <h2>"⚡ Top Players by Attacking Prowess"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Full Name"</th>
                        <th>"Club Name"</th>
                        <th>"Nationality"</th>
                        <th>"Attacking Prowess"</th>
                        <th>"Overall"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <BarChart title="Top Attackers in FIFA 23".to_string() entries=entries/>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacker_entries_skip_missing_scores() {
        let players = vec![
            PlayerProjection {
                full_name: "A".into(),
                club_name: "Club A".into(),
                nationality: "Spain".into(),
                attacking_prowess: Some(88.0),
                overall: Some(90.0),
            },
            PlayerProjection {
                full_name: "B".into(),
                club_name: "Club B".into(),
                nationality: "Italy".into(),
                attacking_prowess: None,
                overall: Some(70.0),
            },
        ];

        let entries = attacker_entries(&players);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "A");
        assert_eq!(cell(None), "-");
    }
}
