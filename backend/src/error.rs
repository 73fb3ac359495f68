//! Error types for the FIFA insights pipeline.
//!
//! - [`CsvError`] - CSV reading and parsing errors
//! - [`SchemaError`] - Required columns absent from the header
//! - [`DataLoadError`] - Top-level load failure, aborts the run
//! - [`CoercionWarning`] - A cell that could not be read as a number (non-fatal)
//! - [`ServerError`] - HTTP layer errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV reading and parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the file.
    #[error("Cannot read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the bytes.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Malformed CSV record.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors when the header does not satisfy the input contract.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    /// One or more required columns are absent.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Load Errors (top-level)
// =============================================================================

/// Unrecoverable failure while loading the dataset.
///
/// Any of these aborts the whole run: no partial dashboard is produced.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// CSV reading or parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Header does not match the expected schema.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

// =============================================================================
// Coercion Warnings
// =============================================================================

/// A cell that could not be coerced to a number.
///
/// Recovered locally: the value is treated as missing and the load continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoercionWarning {
    /// 1-based line number in the source file (header is line 1).
    pub line: usize,
    /// Column name.
    pub column: String,
    /// Raw cell text.
    pub value: String,
}

impl CoercionWarning {
    pub fn new(line: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, column '{}': '{}' is not numeric, treated as missing",
            self.line, self.column, self.value
        )
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Dataset could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] DataLoadError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unknown resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Load(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Errors reach the client as `{ "status": "error", "error": "..." }`.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ServerError::Load(e) => e.to_string(),
            ServerError::BadRequest(m) | ServerError::NotFound(m) | ServerError::Internal(m) => m,
        };

        let body = Json(crate::api::types::error_response(&message));
        (status, body).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, DataLoadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> DataLoadError
        let load_err: DataLoadError = CsvError::EmptyFile.into();
        assert!(load_err.to_string().contains("empty"));

        // SchemaError -> DataLoadError -> ServerError
        let schema_err = SchemaError::MissingColumns(vec!["Club Name".into()]);
        let load_err: DataLoadError = schema_err.into();
        let server_err: ServerError = load_err.into();
        assert!(server_err.to_string().contains("Club Name"));
    }

    #[test]
    fn test_server_error_status_codes() {
        let load = ServerError::Load(CsvError::EmptyFile.into());
        assert_eq!(load.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ServerError::BadRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::NotFound("view".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CsvError::Io {
            path: PathBuf::from("data/fifa23.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/fifa23.csv"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_missing_columns_listed() {
        let err = SchemaError::MissingColumns(vec!["Overall".into(), "Skill Moves".into()]);
        assert_eq!(
            err.to_string(),
            "Missing required column(s): Overall, Skill Moves"
        );
    }

    #[test]
    fn test_coercion_warning_format() {
        let warning = CoercionWarning::new(7, "Wage(in Euro)", "€115K");
        let msg = warning.to_string();
        assert!(msg.contains("Line 7"));
        assert!(msg.contains("column 'Wage(in Euro)'"));
        assert!(msg.contains("'€115K'"));
    }
}
