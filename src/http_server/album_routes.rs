//! Album HTTP Routes
//!
//! CRUD endpoints over the album record store.
//!
//! Bodies are taken as raw bytes and validated here, so a malformed body
//! always gets a JSON error instead of the extractor's plain-text rejection.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::album::{parse_album_fields, parse_new_album, Album, AlbumRepository};

use super::errors::{ApiError, ApiResult, MessageResponse};

pub const UPDATED_MESSAGE: &str = "Album updated succesfully.";
pub const DELETED_MESSAGE: &str = "Album deleted succesfully.";

/// Shared state type
type StoreState<S> = Arc<S>;

/// Create album routes
pub fn album_routes<S: AlbumRepository + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route(
            "/albums",
            get(list_albums_handler::<S>).post(create_album_handler::<S>),
        )
        .route(
            "/albums/:id",
            get(get_album_handler::<S>).put(update_album_handler::<S>),
        )
        .route("/delete/:id", delete(delete_album_handler::<S>))
        .with_state(store)
}

/// List every album
async fn list_albums_handler<S: AlbumRepository + 'static>(
    State(store): State<StoreState<S>>,
) -> ApiResult<Json<Vec<Album>>> {
    Ok(Json(store.list()?))
}

/// Get a single album
async fn get_album_handler<S: AlbumRepository + 'static>(
    State(store): State<StoreState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Album>> {
    Ok(Json(store.get(&id)?))
}

/// Create an album
async fn create_album_handler<S: AlbumRepository + 'static>(
    State(store): State<StoreState<S>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Album>)> {
    let album = parse_new_album(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected album create");
        ApiError::from(e)
    })?;

    let created = store.insert(album).map_err(|e| {
        tracing::warn!(error = %e, "album insert refused");
        ApiError::from(e)
    })?;

    tracing::info!(id = %created.id, "album created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Overwrite title, artist and price of an album
async fn update_album_handler<S: AlbumRepository + 'static>(
    State(store): State<StoreState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<MessageResponse>> {
    let fields = parse_album_fields(&body).map_err(|e| {
        tracing::warn!(id = %id, error = %e, "rejected album update");
        ApiError::from(e)
    })?;

    store.update(&id, fields)?;

    tracing::info!(id = %id, "album updated");
    Ok(Json(MessageResponse::new(UPDATED_MESSAGE)))
}

/// Delete an album
async fn delete_album_handler<S: AlbumRepository + 'static>(
    State(store): State<StoreState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    store.delete(&id)?;

    tracing::info!(id = %id, "album deleted");
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
