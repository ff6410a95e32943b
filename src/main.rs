//! Study Assistant Proxy Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport. A missing upstream credential stops the process
//! before any request is served.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use study_assistant_proxy::core::config::API_KEY_VAR;
use study_assistant_proxy::core::{Config, StudyServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment; fails without a credential
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Upstream credential loaded from {}", API_KEY_VAR);
    info!("Upstream: {:?}", config.upstream);

    let server = StudyServer::new(config.clone())?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so that stdout stays free for the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
