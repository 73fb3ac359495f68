//! Runtime configuration for the server and the CLI.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::transform::pipeline::DashboardOptions;

/// Data file used when none is given.
pub const DEFAULT_DATA_PATH: &str = "fifa23.csv";

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Upper bound on request bodies, uploads included.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Largest `n` accepted by `GET /api/views/{name}`.
pub const MAX_VIEW_ENTRIES: usize = 100;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// CSV file behind `GET /api/dashboard`
    pub data_path: PathBuf,
    pub port: u16,
    /// Built frontend served for every non-API path
    pub static_dir: Option<PathBuf>,
    pub options: DashboardOptions,
}

impl DashboardConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
            static_dir: None,
            options: DashboardOptions::default(),
        }
    }
}
