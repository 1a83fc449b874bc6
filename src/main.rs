//! Server entry point: read settings, open and migrate the store, serve the API.

use quiz_backend::{app, apply_migrations, AppState, Settings, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quiz_backend=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = Store::connect(&settings).await?;
    apply_migrations(&store).await?;

    let router = app(AppState::new(store), &settings);
    let listener = TcpListener::bind(settings.bind_addr()?).await?;
    tracing::info!(database = %settings.database_url, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
