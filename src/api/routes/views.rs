//! View Routes
//!
//! The navigation boundary: resolve a page path into its contents.
//!
//! - GET /api/v1/views       - Navigable views
//! - GET /api/v1/views/      - The dashboard
//! - GET /api/v1/views/*path - Contents of one view, 404 with a not-found
//!   payload for unknown paths

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::ViewInfo;
use crate::api::state::AppState;
use crate::dashboard::{View, ViewPayload};

/// GET /api/v1/views
pub async fn list_views() -> Json<Vec<ViewInfo>> {
    let views = View::all()
        .iter()
        .filter_map(|view| {
            view.path().map(|path| ViewInfo {
                view: *view,
                title: view.title().to_string(),
                path: path.to_string(),
            })
        })
        .collect();

    Json(views)
}

/// GET /api/v1/views/*path
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> (StatusCode, Json<ViewPayload>) {
    let path = format!("/{}", path.trim_start_matches('/'));
    resolve(&state, &path).await
}

/// GET /api/v1/views/
pub async fn get_root_view(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ViewPayload>) {
    resolve(&state, "/").await
}

async fn resolve(state: &AppState, path: &str) -> (StatusCode, Json<ViewPayload>) {
    let now = Utc::now();

    let payload = state
        .with_planner(|planner| ViewPayload::for_path(path, planner, now))
        .await;

    let status = match payload.view() {
        View::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    (status, Json(payload))
}
