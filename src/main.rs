use squadload_rs::{config, routes, state};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "squadload_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    let port = config.port;
    let eviction_interval = config.eviction_interval;
    if config.gps_source.is_none() {
        tracing::warn!("GPS_CSV_URL / GPS_CSV_PATH not set; GPS endpoints will return 503");
    }
    if config.wellness_source.is_none() {
        tracing::warn!("WELLNESS_CSV_URL / WELLNESS_CSV_PATH not set; wellness endpoints will return 503");
    }
    let state = state::AppState::new(config);

    let eviction_state = state.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(eviction_interval).await;
            eviction_state.evict_expired();
        }
    });

    let app = routes::router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SquadLoad-RS listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("GPS reports: http://{}/api/gps/...", addr);
    tracing::info!("Wellness reports: http://{}/api/wellness/...", addr);
    tracing::info!("Sync: POST http://{}/api/sync", addr);

    axum::serve(listener, app).await
}
