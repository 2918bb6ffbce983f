use std::net::SocketAddr;
use std::sync::Arc;

use skybook_api::{app, AppState};
use skybook_client::AmadeusClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skybook_api=debug,skybook_client=debug,tower_http=debug,axum::rejection=trace"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = skybook_client::Config::load().expect("Failed to load config");
    tracing::info!("Starting Skybook on port {}", config.server.port);

    let client = AmadeusClient::new(config.amadeus.clone());
    let state = AppState::new(Arc::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
