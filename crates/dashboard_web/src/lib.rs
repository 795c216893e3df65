//! HTTP driver for the dashboard.
//!
//! # Responsibility
//! - Map each page request to one controller cycle.
//! - Surface controller failures as a raw error page.
//!
//! # Invariants
//! - Database work runs on the blocking pool, never on the async executor.
//! - No result is cached between requests.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use dashboard_core::{error_page, DashboardService, EntityKind, SqliteConnector};
use log::{error, info, warn};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<DashboardService<SqliteConnector>>,
}

impl AppState {
    pub fn new(connector: SqliteConnector) -> Self {
        Self {
            service: Arc::new(DashboardService::new(connector)),
        }
    }
}

/// Navigation selection carried in the query string (`?page=Goals`).
#[derive(Debug, Deserialize)]
pub struct Navigation {
    page: Option<String>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .with_state(state)
}

async fn dashboard(State(state): State<AppState>, Query(nav): Query<Navigation>) -> Response {
    let started_at = Instant::now();
    let selection = match nav.page.as_deref().map(str::trim) {
        None | Some("") => EntityKind::default(),
        Some(label) => match EntityKind::from_label(label) {
            Some(kind) => kind,
            None => {
                warn!(
                    "event=http_request module=web status=error route=/ error_code=unknown_page page={label}"
                );
                return (
                    StatusCode::BAD_REQUEST,
                    format!("unknown page `{label}`; expected Contacts or Goals"),
                )
                    .into_response();
            }
        },
    };

    let service = Arc::clone(&state.service);
    let outcome = tokio::task::spawn_blocking(move || service.render(selection)).await;
    let response = match outcome {
        Ok(Ok(page)) => Html(page.to_html()).into_response(),
        Ok(Err(err)) => failure(selection, &err.to_string()),
        Err(err) => {
            error!("event=http_request module=web status=error route=/ error_code=worker_failed error={err}");
            failure(selection, &err.to_string())
        }
    };

    info!(
        "event=http_request module=web status={} route=/ page={selection} duration_ms={}",
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

fn failure(selection: EntityKind, message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(error_page(selection, message)),
    )
        .into_response()
}
