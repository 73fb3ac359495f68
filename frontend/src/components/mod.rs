//! UI Components for the dashboard.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the data source
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DashboardView`] - Every panel for one dashboard response
//! - [`DatasetPreview`] - First rows of the CSV
//! - [`BarChart`] - Horizontal bar chart
//! - [`TopAttackers`] - Ranking table and chart
//! - [`FiveStarSection`] - Five-star skill moves clubs
//! - [`UploadSection`] - Upload another CSV
//! - [`LogsPanel`] - Real-time processing logs (SSE)

mod attackers;
mod chart;
mod dashboard;
mod five_star;
mod footer;
mod header;
mod hero;
mod logs;
mod preview;
mod upload;

pub use attackers::*;
pub use chart::*;
pub use dashboard::*;
pub use five_star::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use logs::*;
pub use preview::*;
pub use upload::*;
