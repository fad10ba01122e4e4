use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{CreateOrderDto, OrderDto, OrdersQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::PlaceOrderParams,
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "orders";

/// POST /api/orders - Place and pay for an order
///
/// Runs the allergen, stock and balance checks, then debits the balance, deducts the
/// recipe from inventory and stores the paid order in one transaction.
///
/// # Access Control
/// Any authenticated user; the order is placed for that user
///
/// # Returns
/// - `201 Created`: The paid order
/// - `400 Bad Request`: Allergen detected or an ingredient is out of stock
/// - `402 Payment Required`: Balance below the dish price
/// - `404 Not Found`: Dish missing or not on sale
/// - `409 Conflict`: Balance changed while the order was processed
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed and paid", body = OrderDto),
        (status = 400, description = "Allergen detected or ingredient out of stock", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 402, description = "Insufficient funds", body = ErrorDto),
        (status = 404, description = "Dish not available", body = ErrorDto),
        (status = 409, description = "Balance or stock changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;

    let order = OrderService::new(&state.db)
        .place(PlaceOrderParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// GET /api/orders/my - List the authenticated user's orders
#[utoipa::path(
    get,
    path = "/api/orders/my",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The user's orders, newest first", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let orders = OrderService::new(&state.db).list_for_user(user.id).await?;

    let orders_dto: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// GET /api/orders - List all orders
///
/// # Access Control
/// Cook or admin
///
/// # Query Parameters
/// - `day`: Only orders for this date
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(OrdersQuery),
    responses(
        (status = 200, description = "Orders", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<OrdersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let Query(query) = query?;

    let orders = OrderService::new(&state.db).list_all(query.day).await?;

    let orders_dto: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(orders_dto)))
}

/// PATCH /api/orders/{order_id}/receive - Mark a meal as handed out
///
/// # Access Control
/// The order's owner, a cook, or an admin
///
/// # Returns
/// - `200 OK`: The order with `is_received = true`
/// - `400 Bad Request`: Meal already received
/// - `403 Forbidden`: Someone else's order and not kitchen staff
/// - `404 Not Found`: No such order
#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/receive",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order marked as received", body = OrderDto),
        (status = 400, description = "Meal already received", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner or kitchen staff", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn receive_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    order_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Path(order_id) = order_id?;

    let order = OrderService::new(&state.db).receive(&user, order_id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
