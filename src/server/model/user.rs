//! User domain models and parameters.
//!
//! Provides the domain model for canteen accounts (students, cooks, administrators)
//! and the parameter type used when registering a new account.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::user::{RegisterUserDto, Role, UserDto},
    server::model::parse_column,
};

/// Canteen account with its role, dietary notes and prepaid balance.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
    pub email: Option<String>,
    pub role: Role,
    /// Free-form dietary notes, scanned for allergens when ordering.
    pub food_preferences: Option<String>,
    /// Prepaid balance debited by orders.
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is never exposed.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            food_preferences: self.food_preferences,
            balance: self.balance,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            role: parse_column(&entity.role, "user role")?,
            username: entity.username,
            password_hash: entity.password_hash,
            email: entity.email,
            food_preferences: entity.food_preferences,
            balance: entity.balance,
            created_at: entity.created_at,
        })
    }

    /// Whether the user may act as kitchen staff (cook or admin).
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Cook | Role::Admin)
    }
}

/// Parameters for inserting a new user.
///
/// The password must already be hashed; `balance` is the starting balance
/// (the registration bonus for self-registered accounts).
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub role: Role,
    pub food_preferences: Option<String>,
    pub balance: f64,
}

/// Parameters for registering an account from a plain-text password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub role: Role,
    pub food_preferences: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
            email: dto.email,
            role: dto.role,
            food_preferences: dto.food_preferences,
        }
    }
}
