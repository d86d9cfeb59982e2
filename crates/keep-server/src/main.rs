use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{InMemoryNoteRepository, PgNoteRepository};
use application::NoteService;
use config::{ServerConfig, StorageBackend};
use keep::NoteRepository;

/// Note service over whichever repository the config selects
pub type AppNoteService = NoteService<dyn NoteRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub note_service: Arc<AppNoteService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Keep API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::note::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📝 Keep API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));

    let repo: Arc<dyn NoteRepository> = match config.storage {
        StorageBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("✅ Database migrations completed");
            Arc::new(PgNoteRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("⚠️  NOTES_STORAGE=memory - notes are lost on restart");
            Arc::new(InMemoryNoteRepository::new())
        }
    };

    tracing::info!("⏱️  Storage timeout: {:?}", config.storage_timeout);

    let state = AppState {
        note_service: Arc::new(NoteService::new(repo, config.storage_timeout)),
    };

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Keep API ready");

    Ok(router.into())
}
