use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::RegisterUserParams,
        service::{auth::AuthService, password::PasswordHasher, token::TokenService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod login;
mod register;

fn services() -> (PasswordHasher, TokenService) {
    (PasswordHasher::new(4), TokenService::new("test-secret", 60))
}
