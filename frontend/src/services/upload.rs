//! Upload a CSV file to the backend and get its dashboard back.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::read_dashboard;
use crate::config::MAX_FILE_SIZE;
use crate::types::{AppError, AppResult, DashboardResponse};

/// `POST /api/upload` with the file in the `file` field.
pub async fn upload_csv(file: File, backend_url: &str) -> AppResult<DashboardResponse> {
    check_size(file.size())?;

    let form_data =
        FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/api/upload", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    read_dashboard(response).await
}

/// Reject files the backend would refuse anyway.
pub fn check_size(bytes: f64) -> AppResult<()> {
    if bytes > MAX_FILE_SIZE as f64 {
        return Err(AppError::Upload(format!(
            "File is {:.1} MB, the limit is {} MB",
            bytes / (1024.0 * 1024.0),
            MAX_FILE_SIZE / (1024 * 1024)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        assert!(check_size(1024.0).is_ok());
        assert!(check_size(MAX_FILE_SIZE as f64).is_ok());

        let err = check_size(60.0 * 1024.0 * 1024.0).unwrap_err();
        assert_eq!(err, AppError::Upload("File is 60.0 MB, the limit is 50 MB".to_string()));
    }
}
