use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    routes,
    store::{MemoryProductStore, PgProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store: Arc<dyn ProductStore> = match config.database.url.as_deref() {
        Some(url) => {
            let pool = database::create_pool(url, &config.database).await?;
            Arc::new(PgProductStore::new(pool))
        }
        None => {
            tracing::warn!("DB_URL is not set, products are kept in memory only");
            Arc::new(MemoryProductStore::new())
        }
    };

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .expose_headers([http::header::LOCATION])
        .allow_origin(allowed_origins);

    let app = router(AppState::new(store))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}

/// Routes with request tracing, without CORS or body-limit layers.
pub fn router(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
