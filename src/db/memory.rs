use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::catalog::CATALOG;
use super::{Storage, StoreError};
use crate::models::{
    NewTool, NewToolConfiguration, NewUser, SystemStatus, SystemStatusPatch, Tool,
    ToolConfiguration, ToolStatus, User,
};

/// Threat count shown on a fresh dashboard.
const SEEDED_THREATS_DETECTED: i64 = 2;

/// The system status is a singleton and always carries this id.
const SYSTEM_STATUS_ID: i32 = 1;

/// Hands out the counter's current value and advances it.
///
/// Fails instead of wrapping once the next id would not fit in an `i32`, so
/// ids stay strictly increasing and never go negative.
fn take_id(counter: &mut i32, entity: &'static str) -> Result<i32, StoreError> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or(StoreError::IdsExhausted(entity))?;
    Ok(id)
}

#[derive(Debug)]
struct Tables {
    users: BTreeMap<i32, User>,
    tools: BTreeMap<i32, Tool>,
    system_status: Option<SystemStatus>,
    tool_configurations: HashMap<(i32, i32), ToolConfiguration>,
    next_user_id: i32,
    next_tool_id: i32,
    next_config_id: i32,
}

impl Tables {
    fn new() -> Self {
        let mut status = SystemStatus::with_defaults(SYSTEM_STATUS_ID);
        status.threats_detected = SEEDED_THREATS_DETECTED;

        Self {
            users: BTreeMap::new(),
            tools: BTreeMap::new(),
            system_status: Some(status),
            tool_configurations: HashMap::new(),
            next_user_id: 1,
            next_tool_id: 1,
            next_config_id: 1,
        }
    }

    fn insert_tool(&mut self, tool: NewTool) -> Result<Tool, StoreError> {
        let id = take_id(&mut self.next_tool_id, "tool")?;

        let tool = Tool {
            id,
            name: tool.name,
            description: tool.description,
            category: tool.category,
            icon: tool.icon,
            status: tool.status,
            last_updated: Utc::now(),
        };
        self.tools.insert(id, tool.clone());
        Ok(tool)
    }
}

/// In-process store. Cloning is cheap and every clone shares the same data.
///
/// All state sits behind one lock, so each operation (including id
/// allocation and the username check on insert) is atomic.
#[derive(Clone)]
pub struct MemStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemStore {
    /// Store with the system status and the built-in tool catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let mut tables = Tables::new();
        let now = Utc::now();
        for (id, entry) in (1..).zip(CATALOG) {
            tables.tools.insert(
                id,
                Tool {
                    id,
                    name: entry.name.to_string(),
                    description: entry.description.to_string(),
                    category: entry.category.to_string(),
                    icon: entry.icon.to_string(),
                    status: entry.status,
                    last_updated: now,
                },
            );
            tables.next_tool_id = id + 1;
        }
        debug!(tools = tables.tools.len(), "Seeded tool catalog");

        Self::from_tables(tables)
    }

    /// Store with the system status but no tools.
    #[must_use]
    pub fn without_catalog() -> Self {
        Self::from_tables(Tables::new())
    }

    fn from_tables(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl Storage for MemStore {
    async fn get_user(&self, id: i32) -> Option<User> {
        self.tables.read().await.users.get(&id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict(format!(
                "Username '{}' is already taken",
                user.username
            )));
        }

        let id = take_id(&mut tables.next_user_id, "user")?;

        let user = User {
            id,
            username: user.username,
            password: user.password,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_all_tools(&self) -> Vec<Tool> {
        self.tables.read().await.tools.values().cloned().collect()
    }

    async fn get_tools_by_category(&self, category: &str) -> Vec<Tool> {
        self.tables
            .read()
            .await
            .tools
            .values()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    async fn get_tool(&self, id: i32) -> Option<Tool> {
        self.tables.read().await.tools.get(&id).cloned()
    }

    async fn create_tool(&self, tool: NewTool) -> Result<Tool, StoreError> {
        self.tables.write().await.insert_tool(tool)
    }

    async fn update_tool_status(&self, id: i32, status: ToolStatus) -> Option<Tool> {
        let mut tables = self.tables.write().await;
        let tool = tables.tools.get_mut(&id)?;
        tool.status = status;
        tool.last_updated = Utc::now();
        Some(tool.clone())
    }

    async fn get_system_status(&self) -> Option<SystemStatus> {
        self.tables.read().await.system_status.clone()
    }

    async fn update_system_status(&self, patch: SystemStatusPatch) -> SystemStatus {
        let mut tables = self.tables.write().await;

        let mut status = tables
            .system_status
            .take()
            .unwrap_or_else(|| SystemStatus::with_defaults(SYSTEM_STATUS_ID));
        status.apply(patch);

        tables.system_status = Some(status.clone());
        status
    }

    async fn get_tool_configuration(
        &self,
        tool_id: i32,
        user_id: i32,
    ) -> Option<ToolConfiguration> {
        self.tables
            .read()
            .await
            .tool_configurations
            .get(&(tool_id, user_id))
            .cloned()
    }

    async fn save_tool_configuration(
        &self,
        config: NewToolConfiguration,
    ) -> Result<ToolConfiguration, StoreError> {
        let mut tables = self.tables.write().await;

        let id = take_id(&mut tables.next_config_id, "tool configuration")?;

        let saved = ToolConfiguration {
            id,
            tool_id: config.tool_id,
            user_id: config.user_id,
            config: config.config,
            created_at: Utc::now(),
        };
        tables
            .tool_configurations
            .insert((saved.tool_id, saved.user_id), saved.clone());
        Ok(saved)
    }
}
