use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::token::TokenService,
    },
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Builds request headers carrying a freshly issued token for `user`.
fn headers_for(tokens: &TokenService, user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let token = tokens.issue(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
