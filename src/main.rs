//! Arbiter - Application Entry Point
//!
//! This is the main entry point for the Arbiter server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arbiter::{
    config::CONFIG,
    constants::{API_BASE_PATH, MAX_REQUEST_BODY_SIZE},
    db,
    handlers,
    judge::{ExecutionClient, JudgeScheduler, PgVerdictStore, SubmissionRunner},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Arbiter server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;
    db::test_connection(&db_pool).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Seed sample data on a fresh database
    db::seed::seed_sample_data(&db_pool).await?;

    // Assemble the judging pipeline: execution client, verdict store, runner,
    // and the fixed-size worker pool, all owned here and injected explicitly.
    let execution_client = Arc::new(ExecutionClient::new(&CONFIG.judge)?);
    let verdict_store = Arc::new(PgVerdictStore::new(db_pool.clone()));
    let runner = Arc::new(SubmissionRunner::new(verdict_store, execution_client));
    let scheduler = Arc::new(JudgeScheduler::start(runner, CONFIG.judge.workers));

    tracing::info!(
        workers = CONFIG.judge.workers,
        execution_service = %CONFIG.judge.execution_base_url,
        "Judge scheduler started"
    );

    // Create application state
    let state = AppState::new(db_pool, scheduler, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_SIZE))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
