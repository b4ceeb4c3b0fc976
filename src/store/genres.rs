use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, NotSet, Set, TransactionTrait, Unchanged};

use super::Store;
use crate::{entities::genre, error::AppResult, models::GenreInput};

impl Store {
    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn insert_genre(&self, input: GenreInput) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let res = genre::Entity::insert(active_genre(NotSet, input)).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    pub async fn update_genre(&self, id: i32, input: GenreInput) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let Some(existing) = genre::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };
        active_genre(Unchanged(existing.id), input).update(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    // Movies pointing at the genre keep their `genre_id`.
    pub async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = genre::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

fn active_genre(id: ActiveValue<i32>, input: GenreInput) -> genre::ActiveModel {
    genre::ActiveModel { id, name: Set(input.name) }
}
