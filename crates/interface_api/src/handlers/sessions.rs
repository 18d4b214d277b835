//! Session handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::SessionId;
use crate::{AppState, error::ApiError};
use crate::dto::session::*;

/// Opens a new session; the body is optional
pub async fn create_session(
    State(state): State<AppState>,
    request: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let currency = request.currency.unwrap_or(state.config.currency);
    let policy = request.rounding_policy.unwrap_or(state.config.rounding_policy);

    let response = state
        .sessions
        .create(currency, policy, |session| SessionResponse::from(session))
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Gets a session by ID
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .read(SessionId::from_uuid(id), |session| Ok(SessionResponse::from(session)))
        .await?;
    Ok(Json(response))
}

/// Closes a session and discards its data
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(SessionId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Clears a session's roster and expenses
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state
        .sessions
        .write(SessionId::from_uuid(id), |session| {
            session.reset();
            Ok(SessionResponse::from(&*session))
        })
        .await?;
    Ok(Json(response))
}
