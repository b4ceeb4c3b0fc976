use serde::{Deserialize, Serialize};

use crate::entities::{director, genre, movie};

/// Wire form of a movie. `rating` is stored as a float but served as an integer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieRecord {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<i64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieRecord {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating.map(truncate_rating),
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectorRecord {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for DirectorRecord {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenreRecord {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for GenreRecord {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Projects rows onto their wire form, keeping the input order.
pub fn dump<M, R: From<M>>(rows: Vec<M>) -> Vec<R> {
    rows.into_iter().map(R::from).collect()
}

// Truncates toward zero; `as` saturates out-of-range values.
fn truncate_rating(rating: f64) -> i64 {
    rating.trunc() as i64
}

/// Body accepted by `POST /movies/` and `PUT /movies/{id}`.
///
/// Absent keys and explicit nulls both become `None`, which a PUT writes back
/// as null. Any key outside this list, `id` included, is rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorInput {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreInput {
    pub name: Option<String>,
}

/// Query string of `GET /movies/`. Both filters are optional and combine with AND.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}
