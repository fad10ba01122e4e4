use crate::{
    model::user::Role,
    server::{data::user::UserRepository, error::AppError, model::user::CreateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod debit_balance;
