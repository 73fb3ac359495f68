//! REST API types for frontend integration.
//!
//! Field names are camelCase on the wire; the frontend mirrors these
//! structs for deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::dataset::DerivedDataset;
use crate::error::CoercionWarning;
use crate::models::{AggregationView, FiveStarSummary, PlayerProjection};
use crate::transform::pipeline::{format_delimiter, Dashboard};
use crate::transform::views::{
    clubs_with_five_star_skill_moves, top_clubs_by_reputation, top_clubs_by_total_wage,
    top_nations_by_attacking_prowess, top_players_by_attacking_prowess, ViewKind,
};

/// Response for `GET /api/dashboard` and `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Identifier of this computation
    pub report_id: String,

    /// "ready", or "warning" when some cells were treated as missing
    pub status: String,

    /// RFC 3339 timestamp
    pub generated_at: String,

    pub preview: PreviewTable,
    pub views: DashboardViews,
    pub metadata: ResponseMetadata,
}

/// First rows of the dataset, every column as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The five views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub club_reputation: AggregationView,
    pub top_attackers: Vec<PlayerProjection>,
    pub nation_attack: AggregationView,
    pub club_wages: AggregationView,
    pub five_star: FiveStarSummary,
}

/// Metadata about the load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub csv_info: CsvMetadata,
    pub warnings: WarningStats,
}

/// CSV file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvMetadata {
    pub encoding: String,
    pub delimiter: String,
    pub row_count: usize,
    pub columns: Vec<String>,
}

/// Cells that could not be read as numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningStats {
    pub total: usize,
    pub sample: Vec<CoercionWarning>,
}

impl From<&Dashboard> for DashboardResponse {
    fn from(dashboard: &Dashboard) -> Self {
        let status = if dashboard.warnings.total == 0 { "ready" } else { "warning" };

        DashboardResponse {
            report_id: Uuid::new_v4().to_string(),
            status: status.to_string(),
            generated_at: dashboard.generated_at.to_rfc3339(),
            preview: PreviewTable {
                columns: dashboard.preview.columns.clone(),
                rows: dashboard.preview.rows.clone(),
            },
            views: DashboardViews {
                club_reputation: dashboard.club_reputation.clone(),
                top_attackers: dashboard.top_attackers.clone(),
                nation_attack: dashboard.nation_attack.clone(),
                club_wages: dashboard.club_wages.clone(),
                five_star: dashboard.five_star.clone(),
            },
            metadata: ResponseMetadata {
                csv_info: CsvMetadata {
                    encoding: dashboard.csv_info.encoding.clone(),
                    delimiter: format_delimiter(dashboard.csv_info.delimiter),
                    row_count: dashboard.csv_info.row_count,
                    columns: dashboard.csv_info.headers.clone(),
                },
                warnings: WarningStats {
                    total: dashboard.warnings.total,
                    sample: dashboard.warnings.sample.clone(),
                },
            },
        }
    }
}

// ============================================================================
// Single view
// ============================================================================

/// Response for `GET /api/views/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub name: String,
    pub title: String,
    pub n: usize,
    pub data: ViewData,
}

/// Payload of a single view; `kind` tells the frontend how to render it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewData {
    Series(AggregationView),
    Players { players: Vec<PlayerProjection> },
    FiveStar(FiveStarSummary),
}

impl ViewResponse {
    /// Compute `kind` over `data` with `n` entries.
    pub fn compute(kind: ViewKind, data: &DerivedDataset, n: usize) -> Self {
        let payload = match kind {
            ViewKind::ClubReputation => ViewData::Series(top_clubs_by_reputation(data, n)),
            ViewKind::TopAttackers => ViewData::Players {
                players: top_players_by_attacking_prowess(data, n),
            },
            ViewKind::NationAttack => ViewData::Series(top_nations_by_attacking_prowess(data, n)),
            ViewKind::ClubWages => ViewData::Series(top_clubs_by_total_wage(data, n)),
            ViewKind::FiveStarSkillers => {
                ViewData::FiveStar(clubs_with_five_star_skill_moves(data, n))
            }
        };

        ViewResponse {
            name: kind.as_str().to_string(),
            title: kind.title().to_string(),
            n,
            data: payload,
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}
