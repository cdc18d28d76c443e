use crate::server::{
    data::drink::DrinkRepository,
    model::drink::{CreateDrinkParams, Recipe, UpdateDrinkParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod get_all;

/// Recipe with a single blue ingredient used across repository tests.
fn water_recipe() -> Recipe {
    Recipe::from_value(json!([{"name": "water", "color": "blue", "parts": 1}])).unwrap()
}
