pub mod export_service;
pub use export_service::{ExportError, ExportFormat, ExportService, ExportedData};

pub mod export_service_impl;
pub use export_service_impl::StoreExportService;
