use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;
use tracing::{debug, info};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{self, GenreInput, GenreRecord},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/genres/", get(list).post(create))
        .route("/genres", get(list).post(create))
        .route("/genres/{id}", get(show).put(update).delete(delete))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreRecord>>> {
    let genres = state.store.list_genres().await?;
    debug!(count = genres.len(), "listed genres");

    if genres.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(models::dump(genres)))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): WithRejection<Json<GenreInput>, AppError>,
) -> AppResult<StatusCode> {
    let id = state.store.insert_genre(input).await?;
    info!(id, "genre created");
    Ok(StatusCode::CREATED)
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<GenreRecord>> {
    let genre = state.store.get_genre(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(genre.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<GenreInput>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.update_genre(id, input).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "genre updated");
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.delete_genre(id).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
