use std::path::Path;
use std::sync::Arc;

use crate::media::{MediaManager, S3UploadIssuer, UploadIssuer};
use crate::model::{CatalogError, CourseStore, DbCourseStore, ModelManager};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use sqlx::migrate::Migrator;
use tokio::net::TcpListener;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod auth;
pub mod error;
pub mod media;
pub mod model;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "kursa";

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = Config::get_or_init(use_local).await;

    let store = DbCourseStore::connect(config.app().database_uri())?;

    let migrator = Migrator::new(Path::new("./migrations"))
        .await
        .map_err(CatalogError::from)?;
    tracing::debug!("applying migrations...");
    migrator.run(store.pool()).await.map_err(CatalogError::from)?;

    let issuer = S3UploadIssuer::from_config(config.media()).await;
    let media = MediaManager::new(Arc::new(issuer), config.media().cdn_base());

    let mm = ModelManager::new(Arc::new(store));
    let state = AppState::new(mm, media);
    let app = web::routes::build_app(state.clone(), config);
    Ok((state, app))
}

/// Same wiring with injected store and credential issuer; integration tests
/// substitute the in-memory fakes here.
pub async fn build_server_with_store(
    store: Arc<dyn CourseStore>,
    issuer: Arc<dyn UploadIssuer>,
) -> AppResult<(AppState, Router)> {
    let config = Config::get_or_init(true).await;

    let media = MediaManager::new(issuer, config.media().cdn_base());
    let mm = ModelManager::new(store);
    let state = AppState::new(mm, media);
    let app = web::routes::build_app(state.clone(), config);
    Ok((state, app))
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (_, app) = build_server().await?;
    let config = Config::get_or_init(false).await;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());
    let axum_handle = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    axum_handle.await?;
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    setup_workers().await?;
    Ok(())
}
