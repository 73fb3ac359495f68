//! Application configuration.
//!
//! Compile-time settings for the dashboard frontend.

/// Backend API base URL.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Page title.
pub const APP_TITLE: &str = "FIFA 23 Intelligence Dashboard";

/// Maximum file size for upload (in bytes).
///
/// Matches the backend body limit, 50 MB.
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
