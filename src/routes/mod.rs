use std::sync::Arc;

use axum::Router;

use crate::AppState;

pub mod directors;
pub mod genres;
pub mod movies;

/// All resource routes. Collections answer on both `/movies/` and `/movies`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(movies::router()).merge(directors::router()).merge(genres::router())
}
