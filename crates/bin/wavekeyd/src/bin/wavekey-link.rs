//! # wavekey-link — standalone wireless-link client
//!
//! The same discovery/session state machine `wavekeyd` runs, without the
//! HTTP façade. Useful on hosts that only need the peripheral-driven
//! actions. Commands still flow through the serializing dispatcher, so the
//! behaviour is identical to the daemon's wireless path.

use std::sync::Arc;

use tokio::sync::watch;

use wavekey_adapter_ble::{BtleScanner, run_link};
use wavekey_adapter_virtual::{VirtualAudio, VirtualBrightness, VirtualScreen};
use wavekey_app::activity_log::ActivityLog;
use wavekey_app::dispatcher::CommandDispatcher;
use wavekey_app::executor::ActionExecutor;
use wavekeyd::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    wavekeyd::init_tracing(&config.log.filter);

    let log = ActivityLog::with_capacity(config.log.activity_capacity());

    let audio = VirtualAudio::default();
    let screen = VirtualScreen::new(config.host.screenshot_dir());
    let brightness = VirtualBrightness::default();
    let executor = ActionExecutor::new(audio, screen, brightness, config.executor.action_timeout());
    let dispatcher = Arc::new(CommandDispatcher::new(executor, log.clone()));

    // Without the HTTP façade there is nothing to serve; a missing radio is
    // a startup error here, not a degraded mode.
    let scanner = BtleScanner::new(config.link.clone()).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    run_link(
        scanner,
        config.link.device_name.clone(),
        config.link.retry_interval(),
        dispatcher,
        log,
        shutdown_rx,
    )
    .await;

    Ok(())
}
