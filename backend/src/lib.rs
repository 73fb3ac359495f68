//! # FIFA insights - aggregation pipeline over FIFA 23 player attributes
//!
//! Loads a player CSV, adds two derived columns and computes the five
//! dashboard views served to the frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Dataset   │────▶│  Dashboard  │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │  (+derive)  │     │ (5 views)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fifa_insights::{run_file, DashboardOptions};
//!
//! fn main() {
//!     let dashboard = run_file("fifa23.csv", &DashboardOptions::default()).unwrap();
//!     println!("{} clubs have a five-star skiller", dashboard.five_star.club_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Player, AggregationView, PlayerProjection)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`validation`] - Required column check
//! - [`dataset`] - Typed dataset and derived columns
//! - [`transform`] - Aggregation primitives, views and pipeline
//! - [`cache`] - In-memory dashboard cache
//! - [`config`] - Server configuration
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Dataset
pub mod dataset;

// Transformation
pub mod transform;

// Caching
pub mod cache;

// Configuration
pub mod config;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CoercionWarning, CsvError, CsvResult, DataLoadError, LoadResult, SchemaError, ServerError,
    ServerResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AggregationView, DerivedPlayer, FiveStarSummary, Player, PlayerProjection, ViewEntry,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, parse_bytes_auto, parse_file_auto,
    parse_table, ParseResult, RawTable,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid_header, resolve_columns, ColumnMap, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - Dataset
// =============================================================================

pub use dataset::{attacking_prowess, derive, load, load_bytes, Dataset, DerivedDataset};

// =============================================================================
// Re-exports - Views and pipeline
// =============================================================================

pub use transform::{
    build_dashboard, clubs_with_five_star_skill_moves, prepare_bytes, prepare_file, run_bytes,
    run_file, top_clubs_by_reputation, top_clubs_by_total_wage, top_nations_by_attacking_prowess,
    top_players_by_attacking_prowess, AggregateOp, CsvInfo, Dashboard, DashboardOptions,
    ViewKind,
};

// =============================================================================
// Re-exports - Cache and config
// =============================================================================

pub use cache::{DashboardCache, Snapshot};
pub use config::DashboardConfig;

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::{
    error_response, CsvMetadata, DashboardResponse, ResponseMetadata, ViewData, ViewResponse,
    WarningStats,
};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
