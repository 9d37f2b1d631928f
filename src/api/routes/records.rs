//! Record Routes
//!
//! CRUD endpoints shared by every ledger. Mounted once per kind under
//! `/api/v1/{guests,tasks,vendors,expenses}`.
//!
//! - GET /           - List records (`?q=` search or `?filter=`)
//! - POST /          - Create a record from a draft
//! - GET /categories - Distinct category names
//! - GET /:id        - Get a record
//! - PUT /:id        - Replace a record
//! - DELETE /:id     - Remove a record
//! - PATCH /:id/flag - Change one field (`{"field": ..., "value": ...}`)
//! - POST /:id/toggle - Flip the kind's primary boolean
//!
//! Mutations addressed to an unknown id are accepted and do nothing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::dto::{CategoriesResponse, ListQuery, ListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::ledger::{Ledger, Record, RecordId, Selection};
use crate::planner::{display_order, Expense, Guest, ParseError, Task, Vendor};

/// A record kind served over HTTP, and where its ledger lives
pub trait LedgerSlot: Record + Serialize + Send + Sync + 'static {
    fn slot(state: &AppState) -> &RwLock<Ledger<Self>>;

    /// Reorder a listing before it is returned
    fn arrange(_records: &mut Vec<Self>, _query: &ListQuery) {}
}

impl LedgerSlot for Guest {
    fn slot(state: &AppState) -> &RwLock<Ledger<Self>> {
        &state.guests
    }
}

impl LedgerSlot for Task {
    fn slot(state: &AppState) -> &RwLock<Ledger<Self>> {
        &state.tasks
    }

    fn arrange(records: &mut Vec<Self>, query: &ListQuery) {
        if query.sorted {
            records.sort_by(display_order);
        }
    }
}

impl LedgerSlot for Vendor {
    fn slot(state: &AppState) -> &RwLock<Ledger<Self>> {
        &state.vendors
    }
}

impl LedgerSlot for Expense {
    fn slot(state: &AppState) -> &RwLock<Ledger<Self>> {
        &state.expenses
    }
}

/// GET /api/v1/{kind}
pub async fn list<R>(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse<R>>>
where
    R: LedgerSlot,
    R::Filter: FromStr<Err = ParseError> + Send,
{
    let selection = parse_selection::<R::Filter>(&query)?;

    let mut records = {
        let ledger = R::slot(&state).read().await;
        match &selection {
            Some(selection) => ledger.select(selection).to_vec(),
            None => ledger.list().to_vec(),
        }
    };
    R::arrange(&mut records, &query);

    Ok(Json(ListResponse {
        total: records.len(),
        records,
    }))
}

/// GET /api/v1/{kind}/:id
pub async fn get<R: LedgerSlot>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
) -> ApiResult<Json<R>> {
    let ledger = R::slot(&state).read().await;

    ledger
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("{} with id {} not found", R::KIND, id)))
}

/// POST /api/v1/{kind}
pub async fn create<R>(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<R::Draft>,
) -> ApiResult<(StatusCode, Json<R>)>
where
    R: LedgerSlot,
    R::Draft: DeserializeOwned + Send,
{
    let mut ledger = R::slot(&state).write().await;
    let record = ledger.add(draft).clone();

    tracing::info!(kind = R::KIND, id = %record.id(), "Created record");

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/v1/{kind}/:id
pub async fn update<R>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
    Json(draft): Json<R::Draft>,
) -> StatusCode
where
    R: LedgerSlot,
    R::Draft: DeserializeOwned + Send,
{
    R::slot(&state).write().await.update(id, draft);
    StatusCode::NO_CONTENT
}

/// DELETE /api/v1/{kind}/:id
pub async fn remove<R: LedgerSlot>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
) -> StatusCode {
    R::slot(&state).write().await.remove(id);
    StatusCode::NO_CONTENT
}

/// PATCH /api/v1/{kind}/:id/flag
pub async fn set_flag<R>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
    Json(flag): Json<R::Flag>,
) -> StatusCode
where
    R: LedgerSlot,
    R::Flag: DeserializeOwned + Send,
{
    R::slot(&state).write().await.set_flag(id, flag);
    StatusCode::NO_CONTENT
}

/// POST /api/v1/{kind}/:id/toggle
pub async fn toggle<R: LedgerSlot>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<RecordId>,
) -> StatusCode {
    R::slot(&state).write().await.toggle(id);
    StatusCode::NO_CONTENT
}

/// GET /api/v1/{kind}/categories
pub async fn categories<R: LedgerSlot>(
    State(state): State<Arc<AppState>>,
) -> Json<CategoriesResponse> {
    let categories = R::slot(&state).read().await.categories();
    Json(CategoriesResponse { categories })
}

/// Turn list query parameters into the active selection, if any
fn parse_selection<F>(query: &ListQuery) -> ApiResult<Option<Selection<F>>>
where
    F: FromStr<Err = ParseError>,
{
    if let Some(q) = &query.q {
        return Ok(Some(Selection::search(q)));
    }

    match &query.filter {
        Some(filter) => Ok(Some(Selection::filter(filter.parse()?))),
        None => Ok(None),
    }
}
