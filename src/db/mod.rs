//! Entity storage.
//!
//! [`Storage`] is the seam between the HTTP layer and whatever keeps the
//! entities. The only implementation today is [`MemStore`], which holds
//! everything in process memory and forgets it on restart.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    NewTool, NewToolConfiguration, NewUser, SystemStatus, SystemStatusPatch, Tool,
    ToolConfiguration, ToolStatus, User,
};

pub mod catalog;
pub mod memory;

pub use memory::MemStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No {0} ids left")]
    IdsExhausted(&'static str),
}

/// Lookups return `None` for a missing entity; that is never an error.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> Option<User>;

    async fn get_user_by_username(&self, username: &str) -> Option<User>;

    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the username is already taken
    /// and [`StoreError::IdsExhausted`] once the user id space runs out.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// All tools in id order.
    async fn get_all_tools(&self) -> Vec<Tool>;

    /// Exact, case-sensitive category match.
    async fn get_tools_by_category(&self, category: &str) -> Vec<Tool>;

    async fn get_tool(&self, id: i32) -> Option<Tool>;

    async fn create_tool(&self, tool: NewTool) -> Result<Tool, StoreError>;

    /// Sets the status and bumps `last_updated`. Returns `None` if the tool
    /// does not exist; nothing is created in that case.
    async fn update_tool_status(&self, id: i32, status: ToolStatus) -> Option<Tool>;

    async fn get_system_status(&self) -> Option<SystemStatus>;

    /// Merges the patch into the singleton, creating it first if absent.
    async fn update_system_status(&self, patch: SystemStatusPatch) -> SystemStatus;

    async fn get_tool_configuration(&self, tool_id: i32, user_id: i32)
    -> Option<ToolConfiguration>;

    /// Replaces any configuration stored for the same `(tool_id, user_id)`.
    /// Every save is assigned a fresh id.
    async fn save_tool_configuration(
        &self,
        config: NewToolConfiguration,
    ) -> Result<ToolConfiguration, StoreError>;
}
