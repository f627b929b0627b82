use internship_tracker::catalog::Catalog;
use internship_tracker::notify::{DisabledNotifier, LogNotifier, Notifier};
use internship_tracker::storage::FileStore;
use internship_tracker::{router, AppConfig, AppState};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    fs::create_dir_all(&config.data_dir).await?;

    let notifier: Arc<dyn Notifier> = if config.notifications {
        Arc::new(LogNotifier)
    } else {
        Arc::new(DisabledNotifier)
    };
    let state = AppState::new(FileStore::new(&config.data_dir), Catalog::default(), notifier);
    {
        let record = state.record.lock().await;
        info!(
            streak = record.streak,
            data_dir = %config.data_dir.display(),
            "loaded daily progress"
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            warn!("failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await
        }
    }
}
