//! Budget Routes
//!
//! - GET /api/v1/budget - Total budget, wedding date and budget stats
//! - PUT /api/v1/budget - Change the total budget

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{BudgetRequest, BudgetResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/budget
pub async fn get_budget(State(state): State<Arc<AppState>>) -> Json<BudgetResponse> {
    Json(budget_response(&state).await)
}

/// PUT /api/v1/budget
pub async fn set_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BudgetRequest>,
) -> ApiResult<Json<BudgetResponse>> {
    validate_budget(req.total_budget)?;

    *state.total_budget.write().await = req.total_budget;
    tracing::info!(total_budget = req.total_budget, "Updated total budget");

    Ok(Json(budget_response(&state).await))
}

async fn budget_response(state: &AppState) -> BudgetResponse {
    let expenses = state.expenses.read().await;
    let total_budget = *state.total_budget.read().await;

    BudgetResponse {
        total_budget,
        wedding_date: state.wedding_date,
        stats: expenses.stats(total_budget),
    }
}

/// A budget must be a finite, non-negative amount
fn validate_budget(total_budget: f64) -> ApiResult<()> {
    if !total_budget.is_finite() {
        return Err(ApiError::Validation(
            "Total budget must be a finite number".to_string(),
        ));
    }

    if total_budget < 0.0 {
        return Err(ApiError::Validation(
            "Total budget cannot be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget(0.0).is_ok());
        assert!(validate_budget(30000.0).is_ok());
        assert!(validate_budget(-1.0).is_err());
        assert!(validate_budget(f64::INFINITY).is_err());
        assert!(validate_budget(f64::NAN).is_err());
    }
}
