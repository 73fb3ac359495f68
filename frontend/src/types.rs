//! Common types used across the frontend application.
//!
//! The API types mirror the backend's JSON responses field for field.
//!
//! # Categories
//!
//! - **Log Types** - Real-time log streaming
//! - **View Types** - Aggregation views and player rows
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
///
/// Matches the backend's log levels for SSE streaming.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single log entry, streamed from `/api/logs` or raised locally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub indent: u8,
    /// Timestamp string (HH:MM:SS)
    #[serde(default)]
    pub timestamp: String,
}

// =============================================================================
// View Types
// =============================================================================

/// One bar of a chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub label: String,
    pub value: f64,
}

/// Entries sorted descending by value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationView {
    pub entries: Vec<ViewEntry>,
}

/// Row of the top attackers table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProjection {
    pub full_name: String,
    pub club_name: String,
    pub nationality: String,
    pub attacking_prowess: Option<f64>,
    pub overall: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveStarSummary {
    pub club_count: usize,
    pub view: AggregationView,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `GET /api/dashboard` and `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub report_id: String,
    /// "ready" or "warning"
    pub status: String,
    pub generated_at: String,
    pub preview: PreviewTable,
    pub views: DashboardViews,
    pub metadata: ResponseMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub club_reputation: AggregationView,
    pub top_attackers: Vec<PlayerProjection>,
    pub nation_attack: AggregationView,
    pub club_wages: AggregationView,
    pub five_star: FiveStarSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub csv_info: CsvInfo,
    pub warnings: WarningStats,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: String,
    pub row_count: usize,
    pub columns: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarningStats {
    pub total: usize,
    pub sample: Vec<CoercionWarning>,
}

/// A cell that could not be read as a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoercionWarning {
    pub line: usize,
    pub column: String,
    pub value: String,
}

/// Error body returned by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// File upload failed.
    Upload(String),
    /// Network/HTTP error.
    Network(String),
    /// Backend answered with an error status.
    Server { status: u16, message: String },
    /// Response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => write!(f, "Server error ({}): {}", status, message),
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
