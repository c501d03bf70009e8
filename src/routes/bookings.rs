//! Booking endpoints
//!
//! Listing bookings is gated by the auth middleware plus the ownership
//! guard: a caller may only list bookings filed under their own email.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::models::AuthUser;
use crate::auth::ownership::check_ownership;
use crate::database::models::NewBooking;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// List the authenticated caller's bookings.
///
/// The email query parameter must match the authenticated identity; after
/// the guard passes the two are equal, so the filter uses the verified one.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse, axum::response::Response> {
    check_ownership(&user, query.email.as_deref())
        .map_err(AuthError::into_response)?;

    let bookings = state
        .store
        .list_bookings_by_email(&user.email)
        .await
        .map_err(|e| {
            tracing::error!("failed to list bookings: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })?;

    Ok(Json(bookings))
}

/// Create a booking
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> Result<impl IntoResponse, StatusCode> {
    let booking = state.store.insert_booking(payload).await.map_err(|e| {
        tracing::error!("failed to insert booking: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Delete a booking by id
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, StatusCode> {
    let deleted = state.store.delete_booking(id).await.map_err(|e| {
        tracing::error!("failed to delete booking {id}: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(json!({ "deleted_count": deleted })))
}

/// Update the status of a booking; no other field is touched
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusUpdate>,
) -> Result<impl IntoResponse, StatusCode> {
    let modified = state
        .store
        .update_booking_status(id, &payload.status)
        .await
        .map_err(|e| {
            tracing::error!("failed to update booking {id}: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(json!({ "modified_count": modified })))
}
