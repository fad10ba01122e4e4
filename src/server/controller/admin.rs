use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        admin::{
            AttendanceDto, CreateInventoryDto, CreatePurchaseRequestDto, DailyReportDto,
            DailyReportQuery, InventoryDto, PurchaseRequestDto, PurchaseRequestQuery,
            UpdateInventoryQuery,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            inventory::CreateInventoryParams,
            purchase_request::{CreatePurchaseRequestParams, PurchaseDecision},
        },
        service::{
            inventory::InventoryService, purchase_request::PurchaseRequestService,
            report::ReportService,
        },
        state::AppState,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// POST /api/admin/purchase-requests - Ask for a product to be restocked
///
/// # Access Control
/// Cook or admin; the request is recorded as raised by the caller
#[utoipa::path(
    post,
    path = "/api/admin/purchase-requests",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = CreatePurchaseRequestDto,
    responses(
        (status = 201, description = "Purchase request created", body = PurchaseRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_purchase_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreatePurchaseRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let Json(payload) = payload?;

    let request = PurchaseRequestService::new(&state.db)
        .create(CreatePurchaseRequestParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// GET /api/admin/purchase-requests - List purchase requests
///
/// # Access Control
/// Cook or admin
///
/// # Query Parameters
/// - `status`: Only `pending`, `approved` or `rejected` requests
#[utoipa::path(
    get,
    path = "/api/admin/purchase-requests",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(PurchaseRequestQuery),
    responses(
        (status = 200, description = "Purchase requests, newest first", body = Vec<PurchaseRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchase_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<PurchaseRequestQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let Query(query) = query?;

    let requests = PurchaseRequestService::new(&state.db)
        .list(query.status)
        .await?;

    let requests_dto: Vec<PurchaseRequestDto> =
        requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// PATCH /api/admin/purchase-requests/{request_id}/approve - Approve a pending request
///
/// Records the approving admin and time; inventory is not changed.
///
/// # Access Control
/// Admin
///
/// # Returns
/// - `200 OK`: The approved request
/// - `400 Bad Request`: Request already approved or rejected
/// - `404 Not Found`: No such request
#[utoipa::path(
    patch,
    path = "/api/admin/purchase-requests/{request_id}/approve",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("request_id" = i32, Path, description = "Purchase request ID")
    ),
    responses(
        (status = 200, description = "Purchase request approved", body = PurchaseRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Purchase request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_purchase_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    request_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    decide_purchase_request(state, headers, request_id, PurchaseDecision::Approve).await
}

/// PATCH /api/admin/purchase-requests/{request_id}/reject - Reject a pending request
///
/// # Access Control
/// Admin
#[utoipa::path(
    patch,
    path = "/api/admin/purchase-requests/{request_id}/reject",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("request_id" = i32, Path, description = "Purchase request ID")
    ),
    responses(
        (status = 200, description = "Purchase request rejected", body = PurchaseRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Purchase request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_purchase_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    request_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    decide_purchase_request(state, headers, request_id, PurchaseDecision::Reject).await
}

async fn decide_purchase_request(
    state: AppState,
    headers: HeaderMap,
    request_id: Result<Path<i32>, PathRejection>,
    decision: PurchaseDecision,
) -> Result<(StatusCode, Json<PurchaseRequestDto>), AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Path(request_id) = request_id?;

    let request = PurchaseRequestService::new(&state.db)
        .decide(request_id, admin.id, decision)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// GET /api/admin/stats/daily-report - Orders, revenue and attendance for one day
///
/// # Access Control
/// Admin
///
/// # Query Parameters
/// - `day`: Report date, today (UTC) when omitted
#[utoipa::path(
    get,
    path = "/api/admin/stats/daily-report",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(DailyReportQuery),
    responses(
        (status = 200, description = "Daily report", body = DailyReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DailyReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Query(query) = query?;

    let day = query.day.unwrap_or_else(|| Utc::now().date_naive());
    let report = ReportService::new(&state.db).daily(day).await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// GET /api/admin/stats/attendance - Meals waiting versus handed out
///
/// # Access Control
/// Admin
#[utoipa::path(
    get,
    path = "/api/admin/stats/attendance",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Attendance counts", body = AttendanceDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let attendance = ReportService::new(&state.db).attendance().await?;

    Ok((StatusCode::OK, Json(attendance.into_dto())))
}

/// GET /api/admin/inventory - List stock levels
///
/// # Access Control
/// Cook or admin
#[utoipa::path(
    get,
    path = "/api/admin/inventory",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Products ordered by name", body = Vec<InventoryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let items = InventoryService::new(&state.db).list().await?;

    let items_dto: Vec<InventoryDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// POST /api/admin/inventory - Add a product
///
/// # Access Control
/// Admin
#[utoipa::path(
    post,
    path = "/api/admin/inventory",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    request_body = CreateInventoryDto,
    responses(
        (status = 201, description = "Product created", body = InventoryDto),
        (status = 400, description = "Invalid data or duplicate product name", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateInventoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;

    let item = InventoryService::new(&state.db)
        .create(CreateInventoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// PUT /api/admin/inventory/{item_id} - Set a product's stock level
///
/// # Access Control
/// Admin
///
/// # Query Parameters
/// - `quantity`: New stock level, not negative
#[utoipa::path(
    put,
    path = "/api/admin/inventory/{item_id}",
    tag = ADMIN_TAG,
    security(("bearer" = [])),
    params(
        ("item_id" = i32, Path, description = "Inventory item ID"),
        UpdateInventoryQuery
    ),
    responses(
        (status = 200, description = "Stock level updated", body = InventoryDto),
        (status = 400, description = "Negative quantity", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Inventory item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    item_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UpdateInventoryQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Path(item_id) = item_id?;
    let Query(query) = query?;

    let item = InventoryService::new(&state.db)
        .update_quantity(item_id, query.quantity)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}
