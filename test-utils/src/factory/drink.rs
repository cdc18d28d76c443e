//! Drink factory for creating test drink rows.
//!
//! Rows are inserted directly through the entity, bypassing the service layer, so the
//! stored recipe text can be anything a test needs, including text the service would
//! never write.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Recipe text used when a test doesn't care about the ingredients.
pub const DEFAULT_RECIPE: &str = r#"[{"name":"water","color":"blue","parts":1}]"#;

/// Factory for creating test drinks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drink::DrinkFactory;
///
/// let drink = DrinkFactory::new(&db)
///     .title("Flat White")
///     .recipe(r#"[{"color":"brown","parts":1},{"color":"white","parts":2}]"#)
///     .build()
///     .await?;
/// ```
pub struct DrinkFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    recipe: String,
}

impl<'a> DrinkFactory<'a> {
    /// Creates a new DrinkFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Drink {id}"` where id is auto-incremented
    /// - recipe: [`DEFAULT_RECIPE`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Drink {}", id),
            recipe: DEFAULT_RECIPE.to_string(),
        }
    }

    /// Sets the title for the drink.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw stored recipe text for the drink.
    pub fn recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = recipe.into();
        self
    }

    /// Builds and inserts the drink entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drink::Model)` - Created drink entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drink::Model, DbErr> {
        entity::drink::ActiveModel {
            title: ActiveValue::Set(self.title),
            recipe: ActiveValue::Set(self.recipe),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drink with default values.
///
/// Shorthand for `DrinkFactory::new(db).build().await`.
pub async fn create_drink(db: &DatabaseConnection) -> Result<entity::drink::Model, DbErr> {
    DrinkFactory::new(db).build().await
}

/// Creates a drink with a specific title and default recipe.
pub async fn create_drink_with_title(
    db: &DatabaseConnection,
    title: impl Into<String>,
) -> Result<entity::drink::Model, DbErr> {
    DrinkFactory::new(db).title(title).build().await
}
