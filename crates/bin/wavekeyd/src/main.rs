//! # wavekeyd — wavekey daemon
//!
//! Composition root that wires everything together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env overrides)
//! - Construct the host capabilities and inject them into the executor
//! - Build the shared dispatcher and activity log
//! - Spawn the wireless-link supervisor (discovery → session → restart)
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGINT): unwind the link session cleanly,
//!   let any in-flight action complete
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use tokio::sync::watch;

use wavekey_adapter_ble::{BtleScanner, run_link};
use wavekey_adapter_http_axum::router;
use wavekey_adapter_http_axum::state::AppState;
use wavekey_adapter_virtual::{VirtualAudio, VirtualBrightness, VirtualClassifier, VirtualScreen};
use wavekey_app::activity_log::ActivityLog;
use wavekey_app::dispatcher::CommandDispatcher;
use wavekey_app::executor::ActionExecutor;
use wavekeyd::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    wavekeyd::init_tracing(&config.log.filter);

    let log = ActivityLog::with_capacity(config.log.activity_capacity());

    // Host capabilities are injected here, not reached through globals, so
    // the whole command path is testable with fakes.
    let audio = VirtualAudio::default();
    let screen = VirtualScreen::new(config.host.screenshot_dir());
    let brightness = VirtualBrightness::default();
    let executor = ActionExecutor::new(audio, screen, brightness, config.executor.action_timeout());
    let dispatcher = Arc::new(CommandDispatcher::new(executor, log.clone()));
    let classifier = Arc::new(VirtualClassifier);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // The HTTP façade stays up even on a host without a radio; the link
    // supervisor is simply not started.
    let supervisor = match BtleScanner::new(config.link.clone()).await {
        Ok(scanner) => Some(tokio::spawn(run_link(
            scanner,
            config.link.device_name.clone(),
            config.link.retry_interval(),
            Arc::clone(&dispatcher),
            log.clone(),
            shutdown_rx,
        ))),
        Err(err) => {
            tracing::error!(error = %err, "wireless link disabled");
            log.append(format!("wireless link unavailable: {err}"));
            None
        }
    };

    let state = AppState::new(dispatcher, log, classifier);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "wavekeyd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await?;

    // Wait for the link session to unwind before exiting.
    if let Some(handle) = supervisor {
        handle.await?;
    }

    Ok(())
}

async fn shutdown_signal(shutdown: watch::Sender<bool>) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
    let _ = shutdown.send(true);
}
