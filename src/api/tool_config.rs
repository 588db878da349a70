use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::debug;

use super::validation::{json_body, parse_id};
use super::{ApiError, AppState};
use crate::models::{NewToolConfiguration, ToolConfiguration};

/// `POST /api/tool-config`
pub async fn save_tool_config(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewToolConfiguration>, JsonRejection>,
) -> Result<Json<ToolConfiguration>, ApiError> {
    let config = json_body(payload, "Invalid configuration data")?;

    let saved = state.store().save_tool_configuration(config).await?;
    debug!(
        id = saved.id,
        tool_id = saved.tool_id,
        user_id = saved.user_id,
        "Tool configuration saved"
    );

    Ok(Json(saved))
}

/// `GET /api/tool-config/{tool_id}/{user_id}`
///
/// Responds with `{}` when nothing is stored for the pair.
pub async fn get_tool_config(
    State(state): State<Arc<AppState>>,
    ids: Result<Path<(String, String)>, PathRejection>,
) -> Response {
    let ids = match ids {
        Ok(Path((tool_id, user_id))) => parse_id(&tool_id).zip(parse_id(&user_id)),
        Err(rejection) => {
            debug!("Rejected configuration path: {}", rejection.body_text());
            None
        }
    };

    let config = match ids {
        Some((tool_id, user_id)) => state.store().get_tool_configuration(tool_id, user_id).await,
        None => None,
    };

    match config {
        Some(config) => Json(config).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    }
}
