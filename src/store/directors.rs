use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, NotSet, Set, TransactionTrait, Unchanged};

use super::Store;
use crate::{entities::director, error::AppResult, models::DirectorInput};

impl Store {
    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().all(&self.db).await?)
    }

    pub async fn get_director(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn insert_director(&self, input: DirectorInput) -> AppResult<i32> {
        let txn = self.db.begin().await?;
        let res = director::Entity::insert(active_director(NotSet, input)).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    pub async fn update_director(&self, id: i32, input: DirectorInput) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let Some(existing) = director::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };
        active_director(Unchanged(existing.id), input).update(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }

    // Movies pointing at the director keep their `director_id`.
    pub async fn delete_director(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = director::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

fn active_director(id: ActiveValue<i32>, input: DirectorInput) -> director::ActiveModel {
    director::ActiveModel { id, name: Set(input.name) }
}
