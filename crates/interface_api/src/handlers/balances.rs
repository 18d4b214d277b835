//! Balance calculation handler

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use core_kernel::SessionId;
use crate::{AppState, error::ApiError};
use crate::dto::bill::CalculationResponse;

/// Recomputes every participant's net balance
pub async fn calculate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let response = state
        .sessions
        .write(SessionId::from_uuid(id), |session| {
            CalculationResponse::from_balances(session.calculate()?)
        })
        .await?;
    Ok(Json(response))
}
