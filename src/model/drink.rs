use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// One recipe entry with its quantity, as returned to authorized clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: String,
    #[schema(value_type = f64)]
    pub parts: Number,
}

/// One recipe entry with the quantity stripped, as returned publicly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientShortDto {
    pub color: String,
}

/// Public projection of a drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DrinkShortDto {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<IngredientShortDto>,
}

/// Full projection of a drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DrinkLongDto {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<IngredientDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShortDrinksDto {
    pub success: bool,
    pub drinks: Vec<DrinkShortDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LongDrinksDto {
    pub success: bool,
    pub drinks: Vec<DrinkLongDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedDrinkDto {
    pub success: bool,
    pub delete: i32,
}

/// Body of `POST /drinks`.
///
/// Both fields are optional at the wire level so that a missing field is reported as
/// unprocessable rather than as a body parse failure. `recipe` is kept as raw JSON and
/// validated when converted into server params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateDrinkDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub recipe: Option<Value>,
}

/// Body of `PATCH /drinks/{drink_id}`. Absent or null fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateDrinkDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub recipe: Option<Value>,
}
