//! Route table, response layers and the OpenAPI document.

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE,
        },
        HeaderName, HeaderValue, Method,
    },
    routing::{get, patch},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorCode, ErrorDto},
        drink::{
            CreateDrinkDto, DeletedDrinkDto, DrinkLongDto, DrinkShortDto, IngredientDto,
            IngredientShortDto, LongDrinksDto, ShortDrinksDto, UpdateDrinkDto,
        },
    },
    server::{
        controller::drink::{
            self, create_drink, delete_drink, get_drinks, get_drinks_detail, not_found,
            update_drink,
        },
        state::AppState,
    },
};

const ALLOW_HEADERS: &str = "Content-Type, Authorization, Data-Type";
const ALLOW_METHODS: &str = "GET, PUT, POST, DELETE, PATCH, OPTIONS";

#[derive(OpenApi)]
#[openapi(
    info(title = "Drinks", description = "Drink menu API"),
    paths(
        drink::get_drinks,
        drink::get_drinks_detail,
        drink::create_drink,
        drink::update_drink,
        drink::delete_drink,
    ),
    components(schemas(
        ErrorCode,
        ErrorDto,
        IngredientDto,
        IngredientShortDto,
        DrinkShortDto,
        DrinkLongDto,
        ShortDrinksDto,
        LongDrinksDto,
        DeletedDrinkDto,
        CreateDrinkDto,
        UpdateDrinkDto,
    )),
    tags((name = "drink", description = "Drink menu endpoints"))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every response, including errors, preflight answers and the fallback, carries the
/// `Access-Control-Allow-*` headers browser clients of the menu expect.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drinks", get(get_drinks).post(create_drink))
        .route("/drinks-detail", get(get_drinks_detail))
        .route("/drinks/{drink_id}", patch(update_drink).delete(delete_drink))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .layer(cors())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin policy: any origin is mirrored back and credentials are allowed.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("data-type"),
        ])
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
