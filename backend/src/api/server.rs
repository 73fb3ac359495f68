//! HTTP Server for the insights dashboard.
//!
//! # API Endpoints
//!
//! | Method | Path                | Description                              |
//! |--------|---------------------|------------------------------------------|
//! | GET    | `/health`           | Health check                             |
//! | GET    | `/api/dashboard`    | Dashboard for the configured CSV file    |
//! | GET    | `/api/views/{name}` | One view, `?n=` entries (1..=100)        |
//! | POST   | `/api/upload`       | Dashboard for an uploaded CSV            |
//! | GET    | `/api/logs`         | SSE stream for real-time logs            |

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::{header, Method},
    response::{sse::Event, sse::KeepAlive, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde::Deserialize;
use serde_json::{json, Value};
use std::{convert::Infallible, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::logs::{log_error, log_info, log_warning, LOG_BROADCASTER};
use super::types::{DashboardResponse, ViewResponse};
use crate::cache::DashboardCache;
use crate::config::{DashboardConfig, MAX_BODY_BYTES, MAX_VIEW_ENTRIES};
use crate::error::{ServerError, ServerResult};
use crate::transform::pipeline::{run_bytes, DashboardOptions};
use crate::transform::views::ViewKind;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub config: DashboardConfig,
    pub cache: DashboardCache,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let cache = DashboardCache::new(config.data_path.clone(), config.options);
        Self { config, cache }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let static_dir = state.config.static_dir.clone();

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/views/{name}", get(get_view))
        .route("/api/upload", post(upload_csv))
        .route("/api/logs", get(sse_logs))
        .with_state(state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Start the HTTP server.
///
/// The configured file is loaded once before binding; a load failure stops
/// the server from starting.
pub async fn start_server(config: DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.addr();
    let state = Arc::new(AppState::new(config));

    state.cache.get_or_load().await?;

    println!("🚀 FIFA insights server running on http://localhost:{}", addr.port());
    println!("   GET  /api/dashboard    - Dashboard for {}", state.config.data_path.display());
    println!("   GET  /api/views/{{name}} - Single view (?n=1..{})", MAX_VIEW_ENTRIES);
    println!("   POST /api/upload       - Explore another CSV");
    println!("   GET  /api/logs         - SSE log stream");
    println!("   GET  /health           - Health check");
    if let Some(dir) = &state.config.static_dir {
        println!("   Serving frontend from {}", dir.display());
    }
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "fifa-insights",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "dashboard": "GET /api/dashboard",
            "views": "GET /api/views/{name}",
            "upload": "POST /api/upload",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// # GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> ServerResult<Json<DashboardResponse>> {
    let snapshot = state.cache.get_or_load().await.map_err(|e| {
        log_error(format!("Reload failed: {}", e));
        e
    })?;
    Ok(Json(DashboardResponse::from(&snapshot.dashboard)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub n: Option<usize>,
}

/// # GET /api/views/{name}
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(query): Query<ViewQuery>,
) -> ServerResult<Json<ViewResponse>> {
    let kind: ViewKind = name.parse().map_err(ServerError::NotFound)?;

    let n = query.n.unwrap_or(state.config.options.top_n);
    if !(1..=MAX_VIEW_ENTRIES).contains(&n) {
        return Err(ServerError::BadRequest(format!(
            "n must be between 1 and {}, got {}",
            MAX_VIEW_ENTRIES, n
        )));
    }

    let snapshot = state.cache.get_or_load().await?;
    Ok(Json(ViewResponse::compute(kind, &snapshot.data, n)))
}

/// # POST /api/upload
///
/// Computes a dashboard for the uploaded file. The shared cache is not
/// touched and nothing is stored.
async fn upload_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ServerResult<Json<DashboardResponse>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServerError::BadRequest(format!("Read error: {}", e)))?;
            file_data = Some(bytes.to_vec());
        }
    }

    let bytes = file_data.ok_or_else(|| ServerError::BadRequest("No file provided".into()))?;

    log_info(format!(
        "📄 New upload: {} ({} bytes)",
        file_name.as_deref().unwrap_or("unknown"),
        bytes.len()
    ));

    let response = analyze_upload(bytes, state.config.options).await?;
    Ok(Json(response))
}

/// Run the pipeline over uploaded CSV content.
///
/// Unreadable content and missing columns are the client's fault and come
/// back as [`ServerError::BadRequest`].
pub async fn analyze_upload(
    bytes: Vec<u8>,
    options: DashboardOptions,
) -> ServerResult<DashboardResponse> {
    let dashboard = tokio::task::spawn_blocking(move || run_bytes(&bytes, &options))
        .await
        .map_err(|e| ServerError::Internal(format!("Upload task failed: {}", e)))?
        .map_err(|e| {
            log_warning(format!("Upload rejected: {}", e));
            ServerError::BadRequest(e.to_string())
        })?;

    Ok(DashboardResponse::from(&dashboard))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    // Lagged receivers skip the entries they missed
    let stream = BroadcastStream::new(rx).filter_map(|result| {
        let entry = result.ok()?;
        let json = serde_json::to_string(&entry).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const CONTENT: &str = "Full Name,Club Name,Nationality,Overall,Finishing,Shot Power,Positioning,International Reputation,Wage(in Euro),Skill Moves
Player One,Club A,Spain,80,70,70,70,4,1000,5
Player Two,Club A,Spain,70,60,60,60,2,2000,3
Player Three,Club B,France,85,90,90,90,5,500,5";

    fn state_with(content: &str) -> (TempDir, Arc<AppState>) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fifa23.csv");
        fs::write(&path, content).unwrap();

        let config = DashboardConfig {
            data_path: path,
            ..DashboardConfig::default()
        };
        (dir, Arc::new(AppState::new(config)))
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "fifa-insights");
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let (_dir, state) = state_with(CONTENT);

        let Json(response) = get_dashboard(State(state)).await.unwrap();
        assert_eq!(response.status, "ready");
        assert_eq!(response.metadata.csv_info.row_count, 3);
        assert_eq!(response.views.club_reputation.labels(), vec!["Club B", "Club A"]);
        assert_eq!(response.views.five_star.club_count, 2);
    }

    #[tokio::test]
    async fn test_get_dashboard_reload_failure() {
        let (dir, state) = state_with(CONTENT);
        fs::remove_file(dir.path().join("fifa23.csv")).unwrap();

        let err = get_dashboard(State(state)).await.unwrap_err();
        assert!(matches!(err, ServerError::Load(_)));
    }

    #[tokio::test]
    async fn test_get_view_with_n() {
        let (_dir, state) = state_with(CONTENT);

        let Json(view) = get_view(
            State(state),
            Path("club-reputation".to_string()),
            Query(ViewQuery { n: Some(1) }),
        )
        .await
        .unwrap();

        assert_eq!(view.name, "club-reputation");
        assert_eq!(view.n, 1);
        match view.data {
            crate::api::types::ViewData::Series(series) => {
                assert_eq!(series.labels(), vec!["Club B"]);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_view_rejects_unknown_name_and_bad_n() {
        let (_dir, state) = state_with(CONTENT);

        let err = get_view(
            State(Arc::clone(&state)),
            Path("best-goalkeepers".to_string()),
            Query(ViewQuery::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServerError::NotFound(_)));

        for n in [0, MAX_VIEW_ENTRIES + 1] {
            let err = get_view(
                State(Arc::clone(&state)),
                Path("club-wages".to_string()),
                Query(ViewQuery { n: Some(n) }),
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ServerError::BadRequest(_)));
        }
    }

    #[tokio::test]
    async fn test_analyze_upload() {
        let response = analyze_upload(CONTENT.as_bytes().to_vec(), DashboardOptions::default())
            .await
            .unwrap();
        assert_eq!(response.views.top_attackers[0].full_name, "Player Three");
    }

    #[tokio::test]
    async fn test_analyze_upload_missing_column_is_bad_request() {
        let content = "Full Name,Club Name\nPlayer One,Club A";
        let err = analyze_upload(content.as_bytes().to_vec(), DashboardOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::BadRequest(_)));
        assert!(err.to_string().contains("Nationality"));
    }
}
