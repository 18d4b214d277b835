//! Expense handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::SessionId;
use crate::{AppState, error::ApiError};
use crate::dto::ledger::{AddExpenseRequest, ExpenseListResponse, ExpenseResponse};

/// Records an expense
pub async fn add_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    request.validate()?;

    let response = state
        .sessions
        .write(SessionId::from_uuid(id), |session| {
            let currency = session.ledger().currency();
            let amount = request.amount.to_money(currency)?;
            let distribution = request.distribution()?;

            let expense_id =
                session.add_expense(request.reason.as_str(), &request.payer, amount, distribution)?;
            Ok(session.ledger().expense(&expense_id).map(ExpenseResponse::from))
        })
        .await?
        .ok_or_else(|| ApiError::Internal("Recorded expense not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists expenses in the order they were recorded
pub async fn list_expenses(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseListResponse>, ApiError> {
    let expenses = state
        .sessions
        .read(SessionId::from_uuid(id), |session| {
            Ok(session.ledger().expenses().iter().map(ExpenseResponse::from).collect())
        })
        .await?;
    Ok(Json(ExpenseListResponse { expenses }))
}
