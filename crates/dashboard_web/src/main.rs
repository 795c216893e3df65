//! Dashboard server entry point.
//!
//! Loads `.env`, reads configuration once, initializes logging and serves
//! the dashboard until Ctrl-C.

use dashboard_core::{core_version, init_logging, AppConfig, SqliteConnector};
use dashboard_web::{build_router, AppState};
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env is normal; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let log_dir = config
        .log_dir
        .as_ref()
        .map(|dir| dir.to_string_lossy().into_owned());
    init_logging(config.log_level, log_dir.as_deref())?;

    let state = AppState::new(SqliteConnector::new(config.db.clone()));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {err}", config.bind_addr))?;
    info!(
        "event=server_start module=web status=ok bind_addr={} version={} db_configured={}",
        config.bind_addr,
        core_version(),
        config.db.conn_str.is_some()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))?;

    info!("event=server_stop module=web status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_signal module=web status=error error={err}");
        std::future::pending::<()>().await;
    }
}
