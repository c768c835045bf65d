use rusty_library_catalog::{
    api::{handlers::AppState, router::create_router},
    application::library::LibraryController,
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    // 初期蔵書で開始するか、空のカタログで開始するか
    let controller = if config.seed_catalog {
        LibraryController::seeded()
    } else {
        LibraryController::default()
    };
    tracing::info!(
        books = controller.catalog().len(),
        seeded = config.seed_catalog,
        "catalog initialized"
    );

    // Create application state
    let app_state = Arc::new(AppState::new(controller));

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
