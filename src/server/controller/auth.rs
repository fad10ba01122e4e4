use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterUserDto, TokenDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::RegisterUserParams,
        service::auth::AuthService, state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/register - Create a new account
///
/// The new account is credited with the configured registration bonus.
///
/// # Access Control
/// Public
///
/// # Returns
/// - `201 Created`: The new user
/// - `400 Bad Request`: Empty credentials or username already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid data or username taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = AuthService::new(&state.db, &state.hasher, &state.tokens)
        .register(
            RegisterUserParams::from_dto(payload),
            state.registration_bonus,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Exchange username and password for an access token
///
/// Accepts an OAuth2 password-flow form (`application/x-www-form-urlencoded`).
///
/// # Access Control
/// Public
///
/// # Returns
/// - `200 OK`: `{access_token, token_type: "bearer"}`
/// - `401 Unauthorized`: Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Form<LoginDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = payload?;

    let access_token = AuthService::new(&state.db, &state.hasher, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}

/// GET /api/auth/me - Get the authenticated user
///
/// # Access Control
/// Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
