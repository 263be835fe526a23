//! Demo server: applies the SDK's generated CRUD to a hiring Job
//! entity, replacing the create handler and adding a filtered list
//! route beside the generated five.
//!
//! Run from the workspace root: `cargo run -p demo-server`

mod jobs;

use axum::routing::{get, post};
use axum::Router;
use jobs::{create_job, ensure_jobs_table, open_jobs, PgJobStore};
use roster_sdk::{
    common_routes_with_ready, AppState, CrudConfig, CrudService, EntityRouter, Settings,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster_sdk=info,demo_server=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    ensure_jobs_table(&pool).await?;

    let service = CrudService::new(PgJobStore::new(pool.clone()), CrudConfig::new("Job"));
    let jobs_routes = EntityRouter::new(service)
        .with_create(post(create_job))
        .route("/open", get(open_jobs))
        .build();

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes_with_ready(state))
        .nest("/api/v1/jobs", jobs_routes)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
