//! [`ExportService`] implementation backed by a [`Storage`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

use crate::constants::export::CSV_HEADER;
use crate::db::Storage;
use crate::models::{SystemStatus, Tool};
use crate::services::export_service::{ExportError, ExportFormat, ExportService, ExportedData};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    tools: Vec<Tool>,
    system_status: Option<SystemStatus>,
    exported_at: DateTime<Utc>,
}

pub struct StoreExportService {
    store: Arc<dyn Storage>,
}

impl StoreExportService {
    #[must_use]
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }

    /// One quoted row per tool under a fixed header.
    fn format_tools_as_csv(tools: &[Tool]) -> String {
        let mut csv = String::from(CSV_HEADER);
        csv.push('\n');
        for tool in tools {
            let _ = writeln!(
                csv,
                "{},{},{},{}",
                Self::quote(&tool.name),
                Self::quote(&tool.category),
                Self::quote(tool.status.as_str()),
                Self::quote(&tool.description)
            );
        }
        csv
    }
}

#[async_trait]
impl ExportService for StoreExportService {
    async fn export(&self, format: ExportFormat) -> Result<ExportedData, ExportError> {
        let tools = self.store.get_all_tools().await;

        let body = match format {
            ExportFormat::Csv => Self::format_tools_as_csv(&tools),
            ExportFormat::Json => {
                let document = ExportDocument {
                    tools,
                    system_status: self.store.get_system_status().await,
                    exported_at: Utc::now(),
                };
                serde_json::to_string_pretty(&document)?
            }
        };

        Ok(ExportedData { format, body })
    }
}
