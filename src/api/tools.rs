//! Tool catalog endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;
use tracing::info;

use super::validation::{json_body, path_id, validate_search_term, validate_tool_status};
use super::{ApiError, AppState, CategorySummary, ToolFilterQuery, UpdateToolStatusRequest};
use crate::models::{Tool, ToolStatus};

fn apply_filter(tools: Vec<Tool>, query: &ToolFilterQuery) -> Result<Vec<Tool>, ApiError> {
    let search = validate_search_term(query.search.as_deref())?;
    let status = match query.status.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<ToolStatus>()
                .map_err(|_| ApiError::validation("Invalid status filter"))?,
        ),
    };

    Ok(tools
        .into_iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .filter(|t| search.is_none_or(|term| t.matches_search(term)))
        .collect())
}

/// `GET /api/tools`
pub async fn list_tools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ToolFilterQuery>,
) -> Result<Json<Vec<Tool>>, ApiError> {
    let tools = state.store().get_all_tools().await;
    Ok(Json(apply_filter(tools, &query)?))
}

/// `GET /api/tools/category/{category}`
///
/// The category must match exactly; an unknown category is an empty list.
pub async fn list_tools_by_category(
    State(state): State<Arc<AppState>>,
    category: Result<Path<String>, PathRejection>,
    Query(query): Query<ToolFilterQuery>,
) -> Result<Json<Vec<Tool>>, ApiError> {
    let Path(category) = category?;
    let tools = state.store().get_tools_by_category(&category).await;
    Ok(Json(apply_filter(tools, &query)?))
}

/// `GET /api/tools/{id}`
pub async fn get_tool(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Tool>, ApiError> {
    let Some(id) = path_id(id) else {
        return Err(ApiError::tool_not_found());
    };

    state
        .store()
        .get_tool(id)
        .await
        .map(Json)
        .ok_or_else(ApiError::tool_not_found)
}

/// `PATCH /api/tools/{id}/status`
///
/// The body is checked before the lookup, so a bad status never reaches the
/// store.
pub async fn update_tool_status(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateToolStatusRequest>, JsonRejection>,
) -> Result<Json<Tool>, ApiError> {
    let payload = json_body(payload, "Invalid status")?;
    let status = validate_tool_status(payload.status.as_deref())?;

    let Some(id) = path_id(id) else {
        return Err(ApiError::tool_not_found());
    };

    let tool = state
        .store()
        .update_tool_status(id, status)
        .await
        .ok_or_else(ApiError::tool_not_found)?;

    info!(tool_id = tool.id, name = %tool.name, status = %tool.status, "Tool status updated");
    Ok(Json(tool))
}

/// `GET /api/categories`
///
/// Per-category totals in catalog order.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategorySummary>>, ApiError> {
    let tools = state.store().get_all_tools().await;

    let mut summaries: Vec<CategorySummary> = Vec::new();
    for tool in &tools {
        let index = match summaries.iter().position(|s| s.category == tool.category) {
            Some(index) => index,
            None => {
                summaries.push(CategorySummary {
                    category: tool.category.clone(),
                    total: 0,
                    active: 0,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        summary.total += 1;
        if tool.status == ToolStatus::Active {
            summary.active += 1;
        }
    }

    Ok(Json(summaries))
}
