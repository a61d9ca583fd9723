use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use powerlifting_program_generator::api::programs::{AppState, generate_program};
use powerlifting_program_generator::config::Config;
use powerlifting_program_generator::services::program_generator::ProgramGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        config: config.clone(),
        generator: ProgramGenerator::default(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/api/programs", post(generate_program))
        .layer(cors)
        .with_state(state);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.bind_host, config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
