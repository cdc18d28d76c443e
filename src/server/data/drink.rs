use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::drink::{CreateDrinkParams, UpdateDrinkParams};

pub struct DrinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrinkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every drink ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::drink::Model>, DbErr> {
        entity::prelude::Drink::find()
            .order_by_asc(entity::drink::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a drink by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::drink::Model>, DbErr> {
        entity::prelude::Drink::find_by_id(id).one(self.db).await
    }

    /// Creates a new drink and returns it with its store-assigned id
    pub async fn create(&self, params: CreateDrinkParams) -> Result<entity::drink::Model, DbErr> {
        entity::drink::ActiveModel {
            title: ActiveValue::Set(params.title),
            recipe: ActiveValue::Set(params.recipe.to_stored()?),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the fields present in `params` to an existing drink
    ///
    /// Returns None if no drink has the given id. An update without fields returns the
    /// drink unchanged without issuing a write.
    pub async fn update(
        &self,
        params: UpdateDrinkParams,
    ) -> Result<Option<entity::drink::Model>, DbErr> {
        let Some(drink) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(drink));
        }

        let mut active: entity::drink::ActiveModel = drink.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }

        if let Some(recipe) = params.recipe {
            active.recipe = ActiveValue::Set(recipe.to_stored()?);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a drink by ID
    ///
    /// Returns true if a row was removed, false if no drink had the given id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drink::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
