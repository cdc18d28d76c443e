use sea_orm::DatabaseConnection;

use crate::server::{
    data::drink::DrinkRepository,
    error::drink::DrinkError,
    model::drink::{CreateDrinkParams, Drink, UpdateDrinkParams},
};

pub struct DrinkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrinkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every drink with its decoded recipe
    pub async fn get_all(&self) -> Result<Vec<Drink>, DrinkError> {
        let repo = DrinkRepository::new(self.db);

        let drinks = repo
            .get_all()
            .await?
            .into_iter()
            .map(Drink::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(drinks)
    }

    /// Creates a new drink
    pub async fn create(&self, params: CreateDrinkParams) -> Result<Drink, DrinkError> {
        let repo = DrinkRepository::new(self.db);

        let drink = repo.create(params).await?;

        Ok(Drink::from_entity(drink)?)
    }

    /// Applies a partial update to a drink
    ///
    /// Returns `DrinkError::NotFound` if no drink has the given id.
    pub async fn update(&self, params: UpdateDrinkParams) -> Result<Drink, DrinkError> {
        let repo = DrinkRepository::new(self.db);
        let id = params.id;

        let drink = repo.update(params).await?.ok_or(DrinkError::NotFound(id))?;

        Ok(Drink::from_entity(drink)?)
    }

    /// Deletes a drink, returning its id
    ///
    /// Returns `DrinkError::NotFound` if no drink has the given id.
    pub async fn delete(&self, id: i32) -> Result<i32, DrinkError> {
        let repo = DrinkRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(DrinkError::NotFound(id));
        }

        // A concurrent delete between lookup and removal still counts as not found
        if !repo.delete(id).await? {
            return Err(DrinkError::NotFound(id));
        }

        Ok(id)
    }
}
