//! High-level pipeline: load → derive → five views → [`Dashboard`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fifa_insights::{run_file, DashboardOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = run_file("fifa23.csv", &DashboardOptions::default())?;
//!     for entry in &dashboard.club_reputation.entries {
//!         println!("{:<30} {:.2}", entry.label, entry.value);
//!     }
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::views::{
    clubs_with_five_star_skill_moves, top_clubs_by_reputation, top_clubs_by_total_wage,
    top_nations_by_attacking_prowess, top_players_by_attacking_prowess,
};
use crate::api::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::dataset::{self, Dataset, DerivedDataset};
use crate::error::{CoercionWarning, LoadResult};
use crate::models::{AggregationView, FiveStarSummary, PlayerProjection};

/// Number of warnings kept in the dashboard.
const WARNING_SAMPLE: usize = 10;

/// Number of warnings echoed to the log.
const LOGGED_WARNINGS: usize = 3;

/// Knobs for dashboard construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Entries kept in each view.
    pub top_n: usize,
    /// Raw rows shown in the dataset preview.
    pub preview_rows: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            preview_rows: 5,
        }
    }
}

/// CSV file information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Coercion warnings raised while loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarningSummary {
    pub total: usize,
    /// First few warnings, in file order.
    pub sample: Vec<CoercionWarning>,
}

/// Dataset preview: the first rows of the file, every column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Every view of one load, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub csv_info: CsvInfo,
    pub preview: Preview,
    pub club_reputation: AggregationView,
    pub top_attackers: Vec<PlayerProjection>,
    pub nation_attack: AggregationView,
    pub club_wages: AggregationView,
    pub five_star: FiveStarSummary,
    pub warnings: WarningSummary,
    pub generated_at: DateTime<Utc>,
}

/// Load a CSV file and compute its dashboard.
pub fn run_file<P: AsRef<Path>>(path: P, options: &DashboardOptions) -> LoadResult<Dashboard> {
    let data = prepare_file(path)?;
    Ok(build_dashboard(&data, options))
}

/// Compute a dashboard from CSV content already in memory.
pub fn run_bytes(bytes: &[u8], options: &DashboardOptions) -> LoadResult<Dashboard> {
    let data = prepare_bytes(bytes)?;
    Ok(build_dashboard(&data, options))
}

/// Load a CSV file and add the derived columns.
pub fn prepare_file<P: AsRef<Path>>(path: P) -> LoadResult<DerivedDataset> {
    let path = path.as_ref();
    log_info(format!("📖 Reading {}...", path.display()));
    let dataset = dataset::load(path)?;
    Ok(prepare(dataset))
}

/// Load CSV content already in memory and add the derived columns.
pub fn prepare_bytes(bytes: &[u8]) -> LoadResult<DerivedDataset> {
    log_info(format!("📖 Reading {} bytes of CSV...", bytes.len()));
    let dataset = dataset::load_bytes(bytes)?;
    Ok(prepare(dataset))
}

fn prepare(dataset: Dataset) -> DerivedDataset {
    let source = dataset.source();
    log_success(format!("Detected encoding: {}", source.encoding));
    log_success(format!("Detected separator: '{}'", format_delimiter(source.delimiter)));
    log_success(format!(
        "Read {} rows, {} columns, schema OK",
        dataset.len(),
        source.headers.len()
    ));

    log_info("🧮 Deriving attacking prowess and normalized wage...");
    let derived = dataset::derive(dataset);
    report_warnings(derived.warnings());
    derived
}

/// Run the five views over a derived dataset.
pub fn build_dashboard(data: &DerivedDataset, options: &DashboardOptions) -> Dashboard {
    let n = options.top_n;
    log_info(format!("📊 Computing views (top {})...", n));

    let club_reputation = top_clubs_by_reputation(data, n);
    log_info_indent(format!("Club popularity: {} clubs", club_reputation.len()), 1);

    let top_attackers = top_players_by_attacking_prowess(data, n);
    log_info_indent(format!("Top attackers: {} players", top_attackers.len()), 1);

    let nation_attack = top_nations_by_attacking_prowess(data, n);
    log_info_indent(format!("Nation attack: {} nations", nation_attack.len()), 1);

    let club_wages = top_clubs_by_total_wage(data, n);
    log_info_indent(format!("Club wages: {} clubs", club_wages.len()), 1);

    let five_star = clubs_with_five_star_skill_moves(data, n);
    log_info_indent(
        format!("Five-star skillers: {} clubs in total", five_star.club_count),
        1,
    );

    log_success("Dashboard ready");

    let source = data.source();
    Dashboard {
        csv_info: CsvInfo {
            encoding: source.encoding.clone(),
            delimiter: source.delimiter,
            headers: source.headers.clone(),
            row_count: data.len(),
        },
        preview: Preview {
            columns: source.headers.clone(),
            rows: data.preview(options.preview_rows),
        },
        club_reputation,
        top_attackers,
        nation_attack,
        club_wages,
        five_star,
        warnings: WarningSummary {
            total: data.warnings().len(),
            sample: data.warnings().iter().take(WARNING_SAMPLE).cloned().collect(),
        },
        generated_at: Utc::now(),
    }
}

fn report_warnings(warnings: &[CoercionWarning]) {
    if warnings.is_empty() {
        log_success("All numeric cells parsed");
        return;
    }

    log_warning(format!(
        "{} value(s) could not be read as numbers and were treated as missing",
        warnings.len()
    ));
    for warning in warnings.iter().take(LOGGED_WARNINGS) {
        log_info_indent(warning.to_string(), 1);
    }
}

/// Format delimiter for display
pub fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}
