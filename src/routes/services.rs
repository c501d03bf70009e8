//! Services catalogue endpoints
//!
//! Public read-only endpoints; no authentication required.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::database::models::{Service, ServiceSummary};
use crate::server::AppState;

/// List the full services catalogue
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<Service>>, StatusCode> {
    let services = state.store.list_services().await.map_err(|e| {
        tracing::error!("failed to list services: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(services))
}

/// Fetch a single service, projected to the fields the checkout page needs
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceSummary>, StatusCode> {
    let service = state.store.get_service(id).await.map_err(|e| {
        tracing::error!("failed to fetch service {id}: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    service.map(Json).ok_or(StatusCode::NOT_FOUND)
}
