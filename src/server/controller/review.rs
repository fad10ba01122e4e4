use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::CreateReviewParams,
        service::review::ReviewService,
        state::AppState,
    },
};

pub static REVIEW_TAG: &str = "reviews";

/// POST /api/reviews - Review a received dish
///
/// # Access Control
/// Any authenticated user who has received the dish
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid rating or dish not received", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/reviews/item/{item_id}",
    tag = REVIEW_TAG,
    params(
        ("item_id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Reviews of the dish", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_reviews(
    State(state): State<AppState>,
    item_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(item_id) = item_id?;

    let reviews = ReviewService::new(&state.db).list_for_item(item_id).await?;

    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}

#[utoipa::path(
    get,
    path = "/api/reviews/all",
    tag = REVIEW_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not a cook or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Kitchen])
        .await?;

    let reviews = ReviewService::new(&state.db).list_all().await?;

    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}
