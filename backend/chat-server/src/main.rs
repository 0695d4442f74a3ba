use chat_config::Config;
use chat_server::startup::{Services, build_services};
use chat_server::{build_router, logger, metrics_exporter};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Logger first, so every later step is recorded
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting chat-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let metrics_handle = metrics_exporter::install_recorder()?;

    let database_path = config.database_path()?;
    info!("Opening profile database: {}", database_path.display());

    let Services {
        state,
        dispatch_loop,
    } = build_services(&config, &database_path).await?;
    let shutdown = state.shutdown.clone();

    let dispatch_task = tokio::spawn(dispatch_loop.run(shutdown.subscribe_guard()));

    let app = build_router(state, Some(metrics_handle));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
        })
        .await?;

    if let Err(e) = dispatch_task.await {
        warn!("Dispatch loop ended abnormally: {}", e);
    }

    info!("Graceful shutdown complete");
    Ok(())
}
