//! WeDay REST API
//!
//! HTTP API layer for WeDay, built with Axum.
//!
//! # Endpoints
//!
//! ## Records
//! For each of `guests`, `tasks`, `vendors` and `expenses`:
//! - `GET /api/v1/{kind}` - List records (`?q=` search, `?filter=`, tasks also `?sorted=true`)
//! - `POST /api/v1/{kind}` - Create a record
//! - `GET /api/v1/{kind}/stats` - Aggregates
//! - `GET /api/v1/{kind}/categories` - Distinct categories
//! - `GET /api/v1/{kind}/:id` - Get a record
//! - `PUT /api/v1/{kind}/:id` - Replace a record
//! - `DELETE /api/v1/{kind}/:id` - Remove a record
//! - `PATCH /api/v1/{kind}/:id/flag` - Change one field
//! - `POST /api/v1/{kind}/:id/toggle` - Flip the primary boolean
//!
//! ## Budget
//! - `GET /api/v1/budget` - Total budget and budget stats
//! - `PUT /api/v1/budget` - Change the total budget
//!
//! ## Views
//! - `GET /api/v1/views` - Navigable views
//! - `GET /api/v1/views/` - The dashboard, same as `/`
//! - `GET /api/v1/views/*path` - Contents of one view
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use weday::api::{serve, AppState};
//! use weday::config::ApiConfig;
//! use weday::planner::Planner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::from_planner(Planner::seeded(), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Uri},
    routing::{get, patch, post},
    Router,
};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::planner::{Expense, Guest, ParseError, Task, Vendor};
use routes::records::{self, LedgerSlot};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        // Record routes
        .nest(
            "/guests",
            ledger_routes::<Guest>().route("/stats", get(routes::stats::guest_stats)),
        )
        .nest(
            "/tasks",
            ledger_routes::<Task>().route("/stats", get(routes::stats::task_stats)),
        )
        .nest(
            "/vendors",
            ledger_routes::<Vendor>().route("/stats", get(routes::stats::vendor_stats)),
        )
        .nest(
            "/expenses",
            ledger_routes::<Expense>().route("/stats", get(routes::stats::budget_stats)),
        )
        // Budget routes
        .route(
            "/budget",
            get(routes::budget::get_budget).put(routes::budget::set_budget),
        )
        // View routes
        .route("/views", get(routes::views::list_views))
        .route("/views/", get(routes::views::get_root_view))
        .route("/views/*path", get(routes::views::get_view));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CRUD routes for one record kind
fn ledger_routes<R>() -> Router<Arc<AppState>>
where
    R: LedgerSlot,
    R::Draft: DeserializeOwned + Send,
    R::Flag: DeserializeOwned + Send,
    R::Filter: FromStr<Err = ParseError> + Send,
{
    Router::new()
        .route("/", get(records::list::<R>).post(records::create::<R>))
        .route("/categories", get(records::categories::<R>))
        .route(
            "/:id",
            get(records::get::<R>)
                .put(records::update::<R>)
                .delete(records::remove::<R>),
        )
        .route("/:id/flag", patch(records::set_flag::<R>))
        .route("/:id/toggle", post(records::toggle::<R>))
}

/// Allow the configured origins, or any origin when none are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("WeDay API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("WeDay API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Planner;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::from_planner(Planner::seeded(), ApiConfig::default());
        build_router(state)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("Content-Type", "application/json");
        }
        let request = request
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        // Extractor rejections come back as plain text
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_test_app();

        for uri in ["/health/live", "/health/ready", "/health"] {
            let (status, _) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_list_search_and_filter() {
        let app = create_test_app();

        let (status, body) = send(&app, "GET", "/api/v1/guests", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 4);

        let (_, body) = send(&app, "GET", "/api/v1/guests?q=SMITH", None).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["records"][0]["name"], "John Smith");

        let (_, body) = send(&app, "GET", "/api/v1/guests?filter=attending", None).await;
        assert_eq!(body["total"], 2);

        // search wins over filter
        let (_, body) = send(&app, "GET", "/api/v1/tasks?q=cake&filter=completed", None).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["records"][0]["title"], "Order wedding cake");

        let (_, body) = send(&app, "GET", "/api/v1/expenses?filter=unpaid", None).await;
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn test_invalid_guest_filter_is_rejected() {
        let app = create_test_app();

        let (status, body) = send(&app, "GET", "/api/v1/guests?filter=maybe", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_VALUE");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_sorted_tasks() {
        let app = create_test_app();

        let (_, body) = send(&app, "GET", "/api/v1/tasks?sorted=true", None).await;
        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0]["title"], "Send save-the-dates");
        assert_eq!(records[7]["title"], "Book venue");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = create_test_app();

        let (status, created) = send(
            &app,
            "POST",
            "/api/v1/guests",
            Some(r#"{"name": "Ada Lovelace", "email": "ada@example.com"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 5);
        assert_eq!(created["status"], "pending");

        let (status, fetched) = send(&app, "GET", "/api/v1/guests/5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_create_invalid_json() {
        let app = create_test_app();

        let (status, body) = send(&app, "POST", "/api/v1/vendors", Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_string());

        let (_, list) = send(&app, "GET", "/api/v1/vendors", None).await;
        assert_eq!(list["total"], 4);
    }

    #[tokio::test]
    async fn test_update_replaces_one_record() {
        let app = create_test_app();

        let (status, _) = send(
            &app,
            "PUT",
            "/api/v1/vendors/2",
            Some(r#"{"name": "Divine Catering Co", "category": "Catering", "booked": true, "cost": 5200}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, vendor) = send(&app, "GET", "/api/v1/vendors/2", None).await;
        assert_eq!(vendor["name"], "Divine Catering Co");
        assert_eq!(vendor["booked"], true);

        let (_, list) = send(&app, "GET", "/api/v1/vendors", None).await;
        assert_eq!(list["total"], 4);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let app = create_test_app();

        let (status, body) = send(&app, "GET", "/api/v1/tasks/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, "DELETE", "/api/v1/tasks/99", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "POST", "/api/v1/tasks/99/toggle", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, "GET", "/api/v1/tasks", None).await;
        assert_eq!(list["total"], 8);
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let app = create_test_app();

        let (status, _) = send(&app, "DELETE", "/api/v1/expenses/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, "GET", "/api/v1/expenses", None).await;
        assert_eq!(list["total"], 4);
        assert!(list["records"]
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["id"] != 1));
    }

    #[tokio::test]
    async fn test_flag_and_toggle() {
        let app = create_test_app();

        let (status, _) = send(
            &app,
            "PATCH",
            "/api/v1/guests/4/flag",
            Some(r#"{"field": "status", "value": "attending"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, stats) = send(&app, "GET", "/api/v1/guests/stats", None).await;
        assert_eq!(stats["attending"], 3);
        assert_eq!(stats["attending_with_plus_ones"], 5);

        let (status, _) = send(&app, "POST", "/api/v1/tasks/2/toggle", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, stats) = send(&app, "GET", "/api/v1/tasks/stats", None).await;
        assert_eq!(stats["completed"], 2);
    }

    #[tokio::test]
    async fn test_categories() {
        let app = create_test_app();

        let (_, body) = send(&app, "GET", "/api/v1/vendors/categories", None).await;
        assert_eq!(
            body["categories"],
            serde_json::json!(["Catering", "Florist", "Photography", "Venue"])
        );
    }

    #[tokio::test]
    async fn test_budget_roundtrip() {
        let app = create_test_app();

        let (_, budget) = send(&app, "GET", "/api/v1/budget", None).await;
        assert_eq!(budget["total_budget"], 30000.0);
        assert_eq!(budget["stats"]["remaining"], 8000.0);

        let (status, budget) =
            send(&app, "PUT", "/api/v1/budget", Some(r#"{"total_budget": 20000}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(budget["stats"]["over_budget"], true);

        let (_, stats) = send(&app, "GET", "/api/v1/expenses/stats", None).await;
        assert_eq!(stats["remaining"], -2000.0);

        let (status, _) =
            send(&app, "PUT", "/api/v1/budget", Some(r#"{"total_budget": -5}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_views() {
        let app = create_test_app();

        let (_, views) = send(&app, "GET", "/api/v1/views", None).await;
        assert_eq!(views.as_array().unwrap().len(), 5);

        let (status, body) = send(&app, "GET", "/api/v1/views/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "dashboard");
        assert_eq!(body["upcoming_tasks"].as_array().unwrap().len(), 5);

        let (status, body) = send(&app, "GET", "/api/v1/views/budget", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_actual"], 22000.0);

        let (status, body) = send(&app, "GET", "/api/v1/views/settings", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["view"], "not_found");
        assert_eq!(body["path"], "/settings");
    }

    #[tokio::test]
    async fn test_views_root_is_dashboard() {
        let app = create_test_app();

        let (status, body) = send(&app, "GET", "/api/v1/views/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "dashboard");
    }

    #[tokio::test]
    async fn test_empty_planner_totals() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let state = AppState::from_planner(Planner::new(30000.0, date), ApiConfig::default());
        let app = build_router(state);

        let (_, budget) = send(&app, "GET", "/api/v1/budget", None).await;
        for field in ["total_estimated", "total_actual", "total_paid", "percent_used"] {
            let value = budget["stats"][field].as_f64().unwrap();
            assert_eq!(value, 0.0, "{field}");
            assert!(value.is_sign_positive(), "{field}");
        }

        let (_, vendors) = send(&app, "GET", "/api/v1/vendors/stats", None).await;
        assert!(vendors["total_cost"].as_f64().unwrap().is_sign_positive());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app();

        let (status, body) = send(&app, "GET", "/api/v1/weddings", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
