use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, NotSet, QueryFilter, Set,
    TransactionTrait, Unchanged,
};

use super::Store;
use crate::{
    entities::movie,
    error::AppResult,
    models::{MovieFilter, MovieInput},
};

impl Store {
    pub async fn list_movies(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn insert_movie(&self, input: MovieInput) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let res = movie::Entity::insert(active_movie(NotSet, input)).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    /// Overwrites every column of an existing movie. Returns `false` when the
    /// id is unknown, in which case nothing is written.
    pub async fn update_movie(&self, id: i32, input: MovieInput) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };
        active_movie(Unchanged(existing.id), input).update(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = movie::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

fn active_movie(id: ActiveValue<i32>, input: MovieInput) -> movie::ActiveModel {
    movie::ActiveModel {
        id,
        title: Set(input.title),
        description: Set(input.description),
        trailer: Set(input.trailer),
        year: Set(input.year),
        rating: Set(input.rating),
        genre_id: Set(input.genre_id),
        director_id: Set(input.director_id),
    }
}
