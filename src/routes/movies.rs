use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;
use tracing::{debug, info};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{self, MovieFilter, MovieInput, MovieRecord},
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies/", get(list).post(create))
        .route("/movies", get(list).post(create))
        .route("/movies/{id}", get(show).put(update).delete(delete))
}

/// `GET /movies/?director_id=&genre_id=`. An empty result is a 404, not `[]`.
pub async fn list(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(filter), _): WithRejection<Query<MovieFilter>, AppError>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    let movies = state.store.list_movies(filter).await?;
    debug!(
        count = movies.len(),
        director_id = ?filter.director_id,
        genre_id = ?filter.genre_id,
        "listed movies"
    );

    if movies.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(Json(models::dump(movies)))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): WithRejection<Json<MovieInput>, AppError>,
) -> AppResult<StatusCode> {
    let id = state.store.insert_movie(input).await?;
    info!(id, "movie created");
    Ok(StatusCode::CREATED)
}

pub async fn show(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<MovieRecord>> {
    let movie = state.store.get_movie(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie.into()))
}

/// Full overwrite: keys missing from the body are written as null.
pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(input), _): WithRejection<Json<MovieInput>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.update_movie(id, input).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "movie updated");
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    if !state.store.delete_movie(id).await? {
        return Err(AppError::NotFound);
    }
    info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
