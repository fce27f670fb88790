use std::time::Duration;

use tactics_dashboard_rs::api::{Api, ApiState};
use tactics_dashboard_rs::config_handler;
use tactics_dashboard_rs::export_service::ExportService;
use tactics_dashboard_rs::rest_client::AnalyticsClient;
use tracing::log;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG: &str = "info,hyper=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();

    let config = config_handler::get_config()?;

    let client = AnalyticsClient::new(&config.api_url, Duration::from_secs(config.request_timeout_s))?;
    let exporter = ExportService::new(config.club_info());
    log::info!("[MAIN] {} {} against {}", config.club_name, config.platform_name, config.api_url);

    Api::serve(config.port, ApiState::new(client, exporter)).await
}

/// `RUST_LOG` when set and valid, otherwise info.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log.and_then(|e| EnvFilter::try_new(e).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}
