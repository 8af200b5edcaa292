use anyhow::Result;
use tower_http::{
    LatencyUnit,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use api::{
    jwt::{JwtConfig, JwtService},
    routes, seed,
    state::AppState,
};
use common::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Quadra API service");

    let config = ServerConfig::from_env();
    let jwt_service = JwtService::new(JwtConfig::from_env());
    let state = AppState::new(jwt_service);

    if config.seed_demo_data {
        seed::seed_demo_courts(&state).await;
    }

    // Start the web server
    let app = routes::create_router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Quadra API service listening on {}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
