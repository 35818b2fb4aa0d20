use std::net::SocketAddr;

use mbl_api::{app, app_config::Config, AppState};
use mbl_core::Catalog;
use mbl_notify::Notifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mbl_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");

    let catalog = Catalog::new(config.booking.allow_list());
    let recipients = config.telegram.recipients();
    if recipients.is_empty() || config.telegram.bot_token.is_empty() {
        tracing::warn!("Telegram not configured; booking fan-out will report failure");
    }
    let notifier = Notifier::telegram(&config.telegram.bot_token, recipients);

    let state = AppState::new(catalog, notifier);
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
