use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-tool, per-user settings blob. `config` is an opaque JSON-encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfiguration {
    pub id: i32,
    pub tool_id: i32,
    pub user_id: i32,
    pub config: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewToolConfiguration {
    pub tool_id: i32,
    pub user_id: i32,
    pub config: String,
}
