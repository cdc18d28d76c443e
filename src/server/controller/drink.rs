use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        drink::{
            CreateDrinkDto, DeletedDrinkDto, LongDrinksDto, ShortDrinksDto, UpdateDrinkDto,
        },
    },
    server::{
        error::{drink::DrinkError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::drink::{CreateDrinkParams, UpdateDrinkParams},
        service::drink::DrinkService,
        state::AppState,
    },
};

/// Tag for grouping drink endpoints in OpenAPI documentation
pub static DRINK_TAG: &str = "drink";

/// List every drink in its short form.
///
/// Public endpoint. Recipes are reduced to ingredient colors so quantities stay private.
/// Any failure while listing is reported as 404.
///
/// # Returns
/// - `200 OK` - All drinks, short view
/// - `404 Not Found` - Drinks couldn't be listed
#[utoipa::path(
    get,
    path = "/drinks",
    tag = DRINK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved drinks", body = ShortDrinksDto),
        (status = 404, description = "Drinks couldn't be listed", body = ErrorDto)
    ),
)]
pub async fn get_drinks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DrinkService::new(&state.db);

    let drinks = service
        .get_all()
        .await
        .map_err(DrinkError::into_listing_error)?;

    Ok(Json(ShortDrinksDto {
        success: true,
        drinks: drinks.into_iter().map(|d| d.into_short_dto()).collect(),
    }))
}

/// List every drink with full recipe detail.
///
/// # Access Control
/// - `get:drinks-detail`
///
/// # Returns
/// - `200 OK` - All drinks, long view
/// - `400/401/403` - Token missing, invalid or lacking the permission
/// - `422 Unprocessable Entity` - Drinks couldn't be listed
#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = DRINK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved drinks", body = LongDrinksDto),
        (status = 400, description = "Token couldn't be parsed", body = ErrorDto),
        (status = 401, description = "Token missing, expired or for another audience", body = ErrorDto),
        (status = 403, description = "Token lacks get:drinks-detail", body = ErrorDto),
        (status = 422, description = "Drinks couldn't be listed", body = ErrorDto)
    ),
)]
pub async fn get_drinks_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.verifier, &headers)
        .require(&[Permission::ViewDrinkDetail])?;

    let service = DrinkService::new(&state.db);

    let drinks = service.get_all().await?;

    Ok(Json(LongDrinksDto {
        success: true,
        drinks: drinks.into_iter().map(|d| d.into_long_dto()).collect(),
    }))
}

/// Create a new drink.
///
/// Both `title` and `recipe` are required. The recipe may be a list of ingredients or a
/// single ingredient object.
///
/// # Access Control
/// - `post:drinks`
///
/// # Returns
/// - `200 OK` - The created drink, long view, as a one-element list
/// - `400/401/403` - Token missing, invalid or lacking the permission
/// - `422 Unprocessable Entity` - Missing field, invalid recipe, malformed body or duplicate title
#[utoipa::path(
    post,
    path = "/drinks",
    tag = DRINK_TAG,
    request_body = CreateDrinkDto,
    responses(
        (status = 200, description = "Successfully created drink", body = LongDrinksDto),
        (status = 400, description = "Token couldn't be parsed", body = ErrorDto),
        (status = 401, description = "Token missing, expired or for another audience", body = ErrorDto),
        (status = 403, description = "Token lacks post:drinks", body = ErrorDto),
        (status = 422, description = "Drink couldn't be created", body = ErrorDto)
    ),
)]
pub async fn create_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDrinkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.verifier, &headers)
        .require(&[Permission::CreateDrink])?;

    let Json(payload) = payload.map_err(|e| DrinkError::InvalidRequest(e.body_text()))?;

    let service = DrinkService::new(&state.db);

    let params = CreateDrinkParams::from_dto(payload)?;

    let drink = service.create(params).await?;

    tracing::info!("Created drink {} '{}'", drink.id, drink.title);

    Ok(Json(LongDrinksDto {
        success: true,
        drinks: vec![drink.into_long_dto()],
    }))
}

/// Partially update a drink.
///
/// Only fields present and non-null in the body are changed.
///
/// # Access Control
/// - `patch:drinks`
///
/// # Returns
/// - `200 OK` - The updated drink, long view, as a one-element list
/// - `400/401/403` - Token missing, invalid or lacking the permission
/// - `404 Not Found` - No drink has the given id
/// - `422 Unprocessable Entity` - Invalid id, recipe or body, or duplicate title
#[utoipa::path(
    patch,
    path = "/drinks/{drink_id}",
    tag = DRINK_TAG,
    params(
        ("drink_id" = i32, Path, description = "Drink ID")
    ),
    request_body = UpdateDrinkDto,
    responses(
        (status = 200, description = "Successfully updated drink", body = LongDrinksDto),
        (status = 400, description = "Token couldn't be parsed", body = ErrorDto),
        (status = 401, description = "Token missing, expired or for another audience", body = ErrorDto),
        (status = 403, description = "Token lacks patch:drinks", body = ErrorDto),
        (status = 404, description = "Drink not found", body = ErrorDto),
        (status = 422, description = "Drink couldn't be updated", body = ErrorDto)
    ),
)]
pub async fn update_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateDrinkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.verifier, &headers)
        .require(&[Permission::UpdateDrink])?;

    let Path(drink_id) = path.map_err(|e| DrinkError::InvalidRequest(e.body_text()))?;
    let Json(payload) = payload.map_err(|e| DrinkError::InvalidRequest(e.body_text()))?;

    let service = DrinkService::new(&state.db);

    let params = UpdateDrinkParams::from_dto(drink_id, payload)?;

    let drink = service.update(params).await?;

    Ok(Json(LongDrinksDto {
        success: true,
        drinks: vec![drink.into_long_dto()],
    }))
}

/// Delete a drink.
///
/// # Access Control
/// - `delete:drinks`
///
/// # Returns
/// - `200 OK` - The id of the deleted drink
/// - `400/401/403` - Token missing, invalid or lacking the permission
/// - `404 Not Found` - No drink has the given id
/// - `422 Unprocessable Entity` - Invalid id or store failure
#[utoipa::path(
    delete,
    path = "/drinks/{drink_id}",
    tag = DRINK_TAG,
    params(
        ("drink_id" = i32, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted drink", body = DeletedDrinkDto),
        (status = 400, description = "Token couldn't be parsed", body = ErrorDto),
        (status = 401, description = "Token missing, expired or for another audience", body = ErrorDto),
        (status = 403, description = "Token lacks delete:drinks", body = ErrorDto),
        (status = 404, description = "Drink not found", body = ErrorDto),
        (status = 422, description = "Drink couldn't be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.verifier, &headers)
        .require(&[Permission::DeleteDrink])?;

    let Path(drink_id) = path.map_err(|e| DrinkError::InvalidRequest(e.body_text()))?;

    let service = DrinkService::new(&state.db);

    let deleted = service.delete(drink_id).await?;

    tracing::info!("Deleted drink {}", deleted);

    Ok(Json(DeletedDrinkDto {
        success: true,
        delete: deleted,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
