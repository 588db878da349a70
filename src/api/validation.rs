use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use tracing::debug;

use super::ApiError;
use crate::constants::limits::{MAX_SEARCH_LEN, MAX_USERNAME_LEN};
use crate::models::ToolStatus;

/// Parses a numeric path segment. Anything that is not an `i32` yields
/// `None`, which callers treat as an id that matches nothing.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// Like [`parse_id`], for a path segment axum may have failed to decode.
/// An undecodable segment is an id that matches nothing.
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Option<i32> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            debug!("Rejected id segment: {}", rejection.body_text());
            None
        }
    }
}

/// Unwraps a JSON body, turning any rejection (bad syntax, wrong types,
/// missing content type) into a 400 carrying `message`.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection.body_text());
            Err(ApiError::validation(message))
        }
    }
}

pub fn validate_tool_status(status: Option<&str>) -> Result<ToolStatus, ApiError> {
    status
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ApiError::validation("Invalid status"))
}

pub fn validate_username(username: &str) -> Result<&str, ApiError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Username cannot be empty"));
    }

    if trimmed.len() > MAX_USERNAME_LEN {
        return Err(ApiError::validation(format!(
            "Username must be {} characters or less",
            MAX_USERNAME_LEN
        )));
    }

    Ok(trimmed)
}

/// Blank search terms are dropped rather than rejected.
pub fn validate_search_term(term: Option<&str>) -> Result<Option<&str>, ApiError> {
    let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    if term.len() > MAX_SEARCH_LEN {
        return Err(ApiError::validation(format!(
            "Search term must be {} characters or less",
            MAX_SEARCH_LEN
        )));
    }

    Ok(Some(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("21"), Some(21));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("21abc"), None);
        assert_eq!(parse_id("99999999999"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_validate_tool_status() {
        assert_eq!(
            validate_tool_status(Some("active")).unwrap(),
            ToolStatus::Active
        );
        assert_eq!(
            validate_tool_status(Some("inactive")).unwrap(),
            ToolStatus::Inactive
        );
        assert!(validate_tool_status(Some("enabled")).is_err());
        assert!(validate_tool_status(Some("")).is_err());
        assert!(validate_tool_status(None).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("  operator ").unwrap(), "operator");
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("a".repeat(65).as_str()).is_err());
    }

    #[test]
    fn test_validate_search_term() {
        assert_eq!(validate_search_term(Some(" tor ")).unwrap(), Some("tor"));
        assert_eq!(validate_search_term(Some("   ")).unwrap(), None);
        assert_eq!(validate_search_term(None).unwrap(), None);
        assert!(validate_search_term(Some("x".repeat(101).as_str())).is_err());
    }
}
