//! End-to-end runs of the pipeline over CSV files on disk.

use std::fs;
use std::path::PathBuf;

use fifa_insights::{
    load, run_file, DashboardOptions, DashboardResponse, DataLoadError, SchemaError,
};
use tempfile::{tempdir, TempDir};

const HEADER: &str = "ID,Full Name,Overall,Club Name,Nationality,Finishing,Shot Power,Positioning,International Reputation,Wage(in Euro),Skill Moves";

fn write_csv(rows: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fifa23.csv");
    let mut content = HEADER.to_string();
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn three_player_scenario() {
    let (_dir, path) = write_csv(&[
        "1,Player One,80,Club A,Spain,70,70,70,4,1000,5",
        "2,Player Two,70,Club A,Spain,60,60,60,2,2000,3",
        "3,Player Three,85,Club B,France,90,90,90,5,500,5",
    ]);

    let dashboard = run_file(&path, &DashboardOptions::default()).unwrap();

    let reputation: Vec<(&str, f64)> = dashboard
        .club_reputation
        .entries
        .iter()
        .map(|e| (e.label.as_str(), e.value))
        .collect();
    assert_eq!(reputation, vec![("Club B", 5.0), ("Club A", 3.0)]);

    assert_eq!(dashboard.five_star.club_count, 2);
    assert_eq!(dashboard.five_star.view.len(), 2);
    assert!(dashboard.five_star.view.entries.iter().all(|e| e.value == 1.0));

    assert_eq!(dashboard.club_wages.get("Club A"), Some(3000.0));
    assert_eq!(dashboard.top_attackers[0].full_name, "Player Three");
    assert_eq!(dashboard.csv_info.headers.len(), 11);
    assert_eq!(dashboard.warnings.total, 0);
}

#[test]
fn repeated_runs_are_identical() {
    let (_dir, path) = write_csv(&[
        "1,A,80,Club A,Spain,70,71,72,4,1000,5",
        "2,B,70,Club B,Italy,60,,60,2,abc,3",
        "3,C,85,Club C,Spain,90,90,90,5,500,5",
        "4,D,75,Club A,Brazil,80,80,80,3,700,4",
    ]);
    let options = DashboardOptions::default();

    let mut first = run_file(&path, &options).unwrap();
    let second = run_file(&path, &options).unwrap();

    first.generated_at = second.generated_at;
    assert_eq!(first, second);
    assert_eq!(first.warnings.total, 1);
}

#[test]
fn derived_columns_are_added_without_dropping_rows() {
    let (_dir, path) = write_csv(&[
        "1,A,80,Club A,Spain,50,70,60,4,1000,5",
        "2,B,70,,Italy,,,,2,,3",
    ]);

    let dataset = load(&path).unwrap();
    let columns = dataset.columns().len();
    let derived = fifa_insights::derive(dataset);

    assert_eq!(derived.len(), 2);
    assert_eq!(derived.columns().len(), columns + 2);
    assert_eq!(derived.rows()[0].attacking_prowess, Some(60.0));
    assert_eq!(derived.rows()[1].attacking_prowess, None);
    assert_eq!(derived.rows()[1].normalized_wage, None);
}

#[test]
fn response_json_uses_camel_case() {
    let (_dir, path) = write_csv(&["1,A,80,Club A,Spain,70,70,70,4,1000,5"]);

    let dashboard = run_file(&path, &DashboardOptions::default()).unwrap();
    let json = serde_json::to_value(DashboardResponse::from(&dashboard)).unwrap();

    assert_eq!(json["status"], "ready");
    assert!(json["reportId"].is_string());
    assert_eq!(json["views"]["clubWages"]["entries"][0]["value"], 1000.0);
    assert_eq!(json["metadata"]["csvInfo"]["rowCount"], 1);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-players.csv");

    let err = run_file(&path, &DashboardOptions::default()).unwrap_err();
    assert!(matches!(err, DataLoadError::Csv(_)));
    assert!(err.to_string().contains("no-such-players.csv"));
}

#[test]
fn missing_column_names_the_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fifa23.csv");
    fs::write(
        &path,
        "Full Name,Club Name,Nationality,Overall,Finishing,Shot Power,Positioning,International Reputation,Skill Moves\nA,Club A,Spain,80,70,70,70,4,5",
    )
    .unwrap();

    let err = run_file(&path, &DashboardOptions::default()).unwrap_err();
    match err {
        DataLoadError::Schema(SchemaError::MissingColumns(ref cols)) => {
            assert_eq!(cols, &vec!["Wage(in Euro)".to_string()]);
        }
        ref other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains("Wage(in Euro)"));
}
