//! Participant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::SessionId;
use crate::{AppState, error::ApiError};
use crate::dto::ledger::{AddParticipantRequest, ParticipantListResponse, ParticipantResponse};

/// Adds a participant to the end of the roster
pub async fn add_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), ApiError> {
    request.validate()?;

    let participant = state
        .sessions
        .write(SessionId::from_uuid(id), |session| session.add_participant(&request.name))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse {
            name: participant.name().to_string(),
        }),
    ))
}

/// Lists participants in roster order
pub async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParticipantListResponse>, ApiError> {
    let participants = state
        .sessions
        .read(SessionId::from_uuid(id), |session| {
            Ok(session
                .ledger()
                .participants()
                .iter()
                .map(|p| p.name().to_string())
                .collect())
        })
        .await?;
    Ok(Json(ParticipantListResponse { participants }))
}
