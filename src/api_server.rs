// Axum server: HTML profile pages plus a small JSON API.
//
// Pages render on the server; the profile body is loaded into the page
// shell by htmx so a slow backend never blocks the first paint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::composer::{ProfileComposer, SectionDescriptor};
use crate::config::SiteConfig;
use crate::profile::{FetchError, ProfileCache, ProfileClient, ProfileService};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileService>,
    pub composer: Arc<ProfileComposer>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing profile client...");
        let client = ProfileClient::new(&config.profile_api_url, config.fetch_timeout)?;

        tracing::info!("Initializing Moka cache (capacity {:?})...", config.cache_capacity);
        let cache = ProfileCache::new(config.cache_capacity);

        let composer = ProfileComposer::new(config.compose_options());

        Ok(Self {
            profiles: Arc::new(ProfileService::new(client, cache)),
            composer: Arc::new(composer),
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages (htmx)
        .route("/", get(pages::index_page))
        .route("/schools", get(pages::school_lookup))
        .route("/schools/:id", get(pages::profile_page))
        .route("/schools/:id/content", get(pages::profile_content))

        // JSON API
        .route("/api/schools/:id/sections", get(get_sections))
        .route("/api/schools/:id/cache", delete(clear_cache))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Sections that would render for a school, in page order.
async fn get_sections(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let profile = state.profiles.load(&school_id).await?;
    let sections: Vec<SectionDescriptor> = state.composer.sections(&profile);

    Ok(Json(serde_json::json!({
        "schoolId": school_id,
        "name": profile.display_name(),
        "sections": sections,
    })))
}

async fn clear_cache(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Json<serde_json::Value> {
    let cleared = state.profiles.clear(&school_id).await;
    tracing::info!("Cache clear for school {} (was cached: {})", school_id, cleared);
    Json(serde_json::json!({
        "schoolId": school_id,
        "cleared": cleared,
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadGateway(String),
    NotFound(String),
}

impl From<FetchError> for AppError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Status { status: 404 } => AppError::NotFound(error.to_string()),
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
