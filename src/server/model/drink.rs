//! Drink domain models and parameters.
//!
//! A drink's recipe is persisted as serialized JSON text and exposed as structured data.
//! [`Recipe`] owns both directions: validating client-supplied JSON and encoding/decoding
//! the stored column. [`Drink`] is converted from the entity at the repository boundary and
//! into one of two DTO projections at the controller boundary.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::{
    model::drink::{
        CreateDrinkDto, DrinkLongDto, DrinkShortDto, IngredientDto, IngredientShortDto,
        UpdateDrinkDto,
    },
    server::error::drink::DrinkError,
};

/// One recipe entry. This is also the stored JSON shape.
///
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    /// Kept as a JSON number so integer quantities round-trip as integers.
    pub parts: Number,
}

impl Ingredient {
    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            name: self.name,
            color: self.color,
            parts: self.parts,
        }
    }

    pub fn into_short_dto(self) -> IngredientShortDto {
        IngredientShortDto { color: self.color }
    }
}

/// Non-empty, ordered list of ingredients.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe(Vec<Ingredient>);

impl Recipe {
    /// Validates client-supplied recipe JSON.
    ///
    /// Accepts an array of ingredient objects, or a single ingredient object which is treated
    /// as a one-element list. Every entry needs a string `color` and a numeric `parts`.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - Validated recipe
    /// - `Err(DrinkError::InvalidRecipe)` - Wrong shape, empty list or a bad entry
    pub fn from_value(value: Value) -> Result<Self, DrinkError> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(_) => vec![value],
            other => {
                return Err(DrinkError::InvalidRecipe(format!(
                    "expected a list of ingredients, got {}",
                    other
                )))
            }
        };

        if entries.is_empty() {
            return Err(DrinkError::InvalidRecipe(
                "recipe must contain at least one ingredient".to_string(),
            ));
        }

        let ingredients = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<Ingredient>(entry).map_err(|e| {
                    DrinkError::InvalidRecipe(format!("ingredient {}: {}", index, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(ingredients))
    }

    /// Decodes the text stored in the `recipe` column.
    pub fn from_stored(text: &str) -> Result<Self, DbErr> {
        serde_json::from_str::<Vec<Ingredient>>(text)
            .map(Self)
            .map_err(|e| DbErr::Custom(format!("Failed to decode stored recipe: {}", e)))
    }

    /// Encodes the recipe for the `recipe` column.
    pub fn to_stored(&self) -> Result<String, DbErr> {
        serde_json::to_string(&self.0)
            .map_err(|e| DbErr::Custom(format!("Failed to encode recipe: {}", e)))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.0
    }
}

/// A drink with its decoded recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: Recipe,
}

impl Drink {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Drink)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored recipe text isn't a valid ingredient list
    pub fn from_entity(entity: entity::drink::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            recipe: Recipe::from_stored(&entity.recipe)?,
        })
    }

    /// Public projection: ingredient colors only.
    pub fn into_short_dto(self) -> DrinkShortDto {
        DrinkShortDto {
            id: self.id,
            title: self.title,
            recipe: self
                .recipe
                .0
                .into_iter()
                .map(Ingredient::into_short_dto)
                .collect(),
        }
    }

    /// Full projection including quantities.
    pub fn into_long_dto(self) -> DrinkLongDto {
        DrinkLongDto {
            id: self.id,
            title: self.title,
            recipe: self.recipe.0.into_iter().map(Ingredient::into_dto).collect(),
        }
    }
}

/// Parameters for creating a drink.
#[derive(Debug, Clone)]
pub struct CreateDrinkParams {
    pub title: String,
    pub recipe: Recipe,
}

impl CreateDrinkParams {
    /// Converts the request body into create params.
    ///
    /// # Returns
    /// - `Ok(CreateDrinkParams)` - Both fields present and recipe valid
    /// - `Err(DrinkError::MissingField)` - `title` or `recipe` absent or null
    /// - `Err(DrinkError::InvalidRecipe)` - Recipe has the wrong shape
    pub fn from_dto(dto: CreateDrinkDto) -> Result<Self, DrinkError> {
        let title = dto.title.ok_or(DrinkError::MissingField("title"))?;
        let recipe = dto.recipe.ok_or(DrinkError::MissingField("recipe"))?;

        Ok(Self {
            title,
            recipe: Recipe::from_value(recipe)?,
        })
    }
}

/// Parameters for a partial drink update. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateDrinkParams {
    pub id: i32,
    pub title: Option<String>,
    pub recipe: Option<Recipe>,
}

impl UpdateDrinkParams {
    pub fn from_dto(id: i32, dto: UpdateDrinkDto) -> Result<Self, DrinkError> {
        Ok(Self {
            id,
            title: dto.title,
            recipe: dto.recipe.map(Recipe::from_value).transpose()?,
        })
    }

    /// Whether the update changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}
