pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod models;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use cli::{Cli, Commands};
pub use config::Config;
use db::{MemStore, Storage};
use services::{ExportFormat, ExportService, StoreExportService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    config.validate()?;

    init_tracing(&config);

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    match cli.command {
        None => run_server(config, prometheus_handle).await,
        Some(Commands::Serve { port }) => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config, prometheus_handle).await
        }
        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }
        Some(Commands::Export { format, output }) => {
            cmd_export(&format, output.as_deref()).await
        }
        Some(Commands::Tools { category }) => cmd_tools(category.as_deref()).await,
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<metrics_exporter_prometheus::PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("KNOX v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}

async fn cmd_export(format: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse()?;
    let service = StoreExportService::new(Arc::new(MemStore::seeded()));
    let data = service.export(format).await?;

    match output {
        Some(path) => {
            std::fs::write(path, &data.body)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            println!("✓ Exported catalog as {} to {}", format, path.display());
        }
        None => print!("{}", data.body),
    }

    Ok(())
}

async fn cmd_tools(category: Option<&str>) -> anyhow::Result<()> {
    let store = MemStore::seeded();
    let tools = match category {
        Some(category) => store.get_tools_by_category(category).await,
        None => store.get_all_tools().await,
    };

    if tools.is_empty() {
        println!("No tools found.");
        return Ok(());
    }

    println!("Tools ({} total)", tools.len());
    println!("{:-<70}", "");

    for tool in tools {
        let indicator = if tool.status == models::ToolStatus::Active {
            "🟢"
        } else {
            "•"
        };
        println!("{} [{:>2}] {} ({})", indicator, tool.id, tool.name, tool.category);
        println!("       {}", tool.description);
    }

    println!();
    println!("Legend: 🟢 Active | • Inactive");

    Ok(())
}
