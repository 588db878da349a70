pub mod system_status;
pub mod tool;
pub mod tool_config;
pub mod user;

pub use system_status::{SystemStatus, SystemStatusPatch};
pub use tool::{NewTool, Tool, ToolStatus};
pub use tool_config::{NewToolConfiguration, ToolConfiguration};
pub use user::{NewUser, User};
