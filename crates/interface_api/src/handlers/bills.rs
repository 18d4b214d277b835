//! Bill and receipt handlers

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use core_kernel::SessionId;
use domain_ledger::{LedgerError, ReceiptDocument, ReceiptExporter};
use crate::{AppState, error::ApiError};
use crate::dto::bill::BillResponse;

/// Gets one participant's bill
pub async fn get_bill(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<BillResponse>, ApiError> {
    let bill = state
        .sessions
        .write(SessionId::from_uuid(id), |session| session.generate_bill(&name))
        .await?;
    Ok(Json(BillResponse::from(bill)))
}

/// Downloads one participant's receipt as a text attachment
///
/// The bill is rendered under the session lock; the temporary file is
/// written and read back on the blocking pool after the lock is released.
pub async fn download_receipt(
    State(state): State<AppState>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let renderer = state.renderer;
    let document = state
        .sessions
        .write(SessionId::from_uuid(id), |session| {
            let bill = session.generate_bill(&name)?;
            Ok(renderer.render(&bill))
        })
        .await?;

    let (file_name, body) = write_receipt(state.exporter.clone(), document).await?;

    let disposition = format!("attachment; filename=\"{}\"", file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

async fn write_receipt(
    exporter: ReceiptExporter,
    document: ReceiptDocument,
) -> Result<(String, Vec<u8>), ApiError> {
    let written = tokio::task::spawn_blocking(move || {
        let receipt = exporter.export(&document)?;
        let file_name = receipt.file_name().to_string();
        Ok::<_, LedgerError>((file_name, receipt.into_bytes()?))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("receipt export task failed: {}", e)))?;

    Ok(written?)
}
