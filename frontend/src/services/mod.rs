//! Backend communication.
//!
//! # Services
//!
//! - [`dashboard`] - Fetch the dashboard for the configured CSV file
//! - [`upload`] - Upload another CSV and get its dashboard back

pub mod dashboard;
pub mod upload;

pub use dashboard::*;
pub use upload::*;

use gloo_net::http::Response;

use crate::types::{AppError, AppResult, DashboardResponse, ErrorBody};

/// Turn a backend response into a dashboard or a readable error.
pub(crate) async fn read_dashboard(response: Response) -> AppResult<DashboardResponse> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(AppError::Server {
            status,
            message: error_message(&text),
        });
    }

    response
        .json::<DashboardResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Extract `error` from a `{ "status": "error", "error": ... }` body,
/// falling back to the raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"status":"error","error":"Missing required column(s): Overall"}"#),
            "Missing required column(s): Overall"
        );
        assert_eq!(error_message("Payload Too Large"), "Payload Too Large");
        assert_eq!(error_message(""), "Unknown error");
    }
}
