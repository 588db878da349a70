use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

use super::{ApiError, AppState};
use crate::services::ExportFormat;

/// `GET /api/export/{format}`
///
/// `json` returns the tools and system status; `csv` returns the tools only.
pub async fn export_data(
    State(state): State<Arc<AppState>>,
    format: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(format) = format?;
    let format: ExportFormat = format.parse()?;
    let data = state.export_service.export(format).await?;

    info!(format = %format, bytes = data.body.len(), "Catalog exported");

    let disposition = format!("attachment; filename=\"{}\"", data.filename());
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data.body,
    )
        .into_response())
}
