use sea_orm::DatabaseConnection;

mod directors;
mod genres;
mod movies;

/// Handle over the catalog tables.
///
/// Reads run directly on the pool. Every mutation opens its own transaction
/// and commits it before returning, so no store state outlives a request.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
