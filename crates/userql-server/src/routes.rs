use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::graphql::{build_schema, UserSchema};
use crate::handlers::graphql as graphql_handlers;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    pub schema: UserSchema,
}

pub fn create_router(store: SharedStore) -> Router {
    let state = AppState {
        schema: build_schema(store),
    };

    let graphql_routes = Router::new()
        .route("/", post(graphql_handlers::execute))
        .route("/schema", get(graphql_handlers::schema_sdl));

    Router::new()
        .route("/health", get(health_check))
        .nest("/graphql", graphql_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> AppError {
    AppError::NotFound
}
