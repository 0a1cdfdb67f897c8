use std::sync::Arc;

use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

use talk2me::server::{
    config::Config, error::AppError, router, startup, state::AppState, storage::LocalBlobStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let blobs = LocalBlobStore::new(&config.media_root);

    tracing::info!("Serving media from {}", blobs.root().display());

    let state = AppState::new(db, Arc::new(blobs), config.media_url.clone());

    let (api_routes, openapi) = router::router();
    let app = api_routes
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .nest_service("/media", ServeDir::new(&config.media_root))
        .layer(session)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
