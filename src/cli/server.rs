use std::sync::Arc;

use anyhow::Result;
use jungmarker_airtable::AirtableClient;
use jungmarker_contact::{Relay, SmsSender};
use jungmarker_notification::{EmailService, TwilioClient};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::routes::AppState;

/// Wires the collaborators named in `config` into a relay.
pub fn relay(config: &Config) -> Result<Relay> {
    let store = AirtableClient::new(&config.airtable);
    let mailer = EmailService::new(&config.email)?;
    let sms = config
        .sms
        .is_configured()
        .then(|| Arc::new(TwilioClient::new(&config.sms)) as Arc<dyn SmsSender>);

    Ok(Relay::new(Arc::new(store), Arc::new(mailer), sms))
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting jungmarker server...");

    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = AppState {
        relay: relay(&config)?,
    };

    let app = crate::routes::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
