use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::AppError;
use crate::routes::AppState;

/// POST /graphql
pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<async_graphql::Request>, JsonRejection>,
) -> Result<Json<async_graphql::Response>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    if let Some(name) = &request.operation_name {
        tracing::debug!(operation = %name, "executing graphql operation");
    }

    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "graphql operation returned errors");
    }

    Ok(Json(response))
}

/// GET /graphql/schema
pub async fn schema_sdl(State(state): State<AppState>) -> String {
    state.schema.sdl()
}
