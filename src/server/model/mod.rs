//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod inventory;
pub mod menu;
pub mod order;
pub mod purchase_request;
pub mod report;
pub mod review;
pub mod user;

use std::str::FromStr;

use sea_orm::DbErr;

/// Parses a stored enum column, treating an unknown value as corrupted data.
pub(crate) fn parse_column<T: FromStr>(value: &str, column: &str) -> Result<T, DbErr>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|err: T::Err| DbErr::Custom(format!("Invalid {} in database: {}", column, err)))
}
