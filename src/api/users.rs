use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;
use tracing::info;

use super::validation::{json_body, path_id, validate_username};
use super::{ApiError, AppState};
use crate::models::{NewUser, User};

/// `POST /api/users`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let payload = json_body(payload, "Invalid user data")?;
    let username = validate_username(&payload.username)?.to_string();

    let user = state
        .store()
        .create_user(NewUser {
            username,
            password: payload.password,
        })
        .await?;

    info!(user_id = user.id, username = %user.username, "User created");
    Ok(Json(user))
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Some(id) = path_id(id) else {
        return Err(ApiError::not_found("User"));
    };

    state
        .store()
        .get_user(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}
