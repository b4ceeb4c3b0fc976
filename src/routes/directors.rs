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
    models::{self, DirectorInput, DirectorRecord},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/directors/", get(list).post(create))
        .route("/directors", get(list).post(create))
        .route("/directors/{id}", get(show).put(update).delete(delete))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<DirectorRecord>>> {
    let directors = state.store.list_directors().await?;
    debug!(count = directors.len(), "listed directors");

    if directors.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(models::dump(directors)))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): WithRejection<Json<DirectorInput>, AppError>,
) -> AppResult<StatusCode> {
    let id = state.store.insert_director(input).await?;
    info!(id, "director created");
    Ok(StatusCode::CREATED)
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<DirectorRecord>> {
    let director = state.store.get_director(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(director.into()))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<DirectorInput>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.update_director(id, input).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "director updated");
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.delete_director(id).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
