//! Fetch the dashboard computed by the backend.

use gloo_net::http::Request;

use super::read_dashboard;
use crate::types::{AppError, AppResult, DashboardResponse};

/// `GET /api/dashboard`
pub async fn fetch_dashboard(backend_url: &str) -> AppResult<DashboardResponse> {
    let url = format!("{}/api/dashboard", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_dashboard(response).await
}
