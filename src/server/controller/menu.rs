use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::{CreateMenuItemDto, MenuItemDto, MenuQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu::{CreateMenuItemParams, MenuFilter},
        service::menu::MenuService,
        state::AppState,
    },
};

pub static MENU_TAG: &str = "menu";

/// GET /api/menu - List dishes on sale
///
/// # Access Control
/// Public
///
/// # Query Parameters
/// - `day`: Only dishes served on this date
/// - `meal_type`: Only `breakfast` or `lunch` dishes
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = MENU_TAG,
    params(MenuQuery),
    responses(
        (status = 200, description = "Available dishes with their recipes", body = Vec<MenuItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_menu(
    State(state): State<AppState>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let items = MenuService::new(&state.db)
        .list(MenuFilter::from_query(query))
        .await?;

    let items_dto: Vec<MenuItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// POST /api/menu - Add a dish with its recipe
///
/// # Access Control
/// Cook or admin
///
/// # Returns
/// - `201 Created`: The new dish
/// - `400 Bad Request`: Invalid price, ingredient quantity, or unknown inventory item
/// - `401 Unauthorized` / `403 Forbidden`: Not authenticated / not kitchen staff
#[utoipa::path(
    post,
    path = "/api/menu",
    tag = MENU_TAG,
    security(("bearer" = [])),
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Dish created", body = MenuItemDto),
        (status = 400, description = "Invalid dish data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMenuItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let Json(payload) = payload?;

    let item = MenuService::new(&state.db)
        .create(CreateMenuItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}
