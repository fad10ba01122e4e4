//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing canteen accounts. It handles
//! account creation, lookups by id and username, and the conditional balance debit used
//! by order placement.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a database connection or transaction and provides
/// methods for creating, reading, and updating user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Username, hashed password, role, preferences and starting balance
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            email: ActiveValue::Set(params.email),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            food_preferences: ActiveValue::Set(params.food_preferences),
            balance: ActiveValue::Set(params.balance),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by their unique username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether any user account exists.
    ///
    /// Used at startup to decide whether the demo seed should run.
    pub async fn any_exist(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find().count(self.db).await?;

        Ok(count > 0)
    }

    /// Debits `amount` from a user's balance if the balance is still `expected_balance`.
    ///
    /// The update is conditional on the stored balance matching the value the caller
    /// checked, so a concurrent change to the balance makes the debit fail instead of
    /// overdrawing the account.
    ///
    /// # Arguments
    /// - `user_id` - User to debit
    /// - `expected_balance` - Balance observed when funds were checked
    /// - `amount` - Amount to debit, no greater than `expected_balance`
    ///
    /// # Returns
    /// - `Ok(true)` - Balance debited
    /// - `Ok(false)` - Balance changed since it was read, nothing updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn debit_balance(
        &self,
        user_id: i32,
        expected_balance: f64,
        amount: f64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Balance,
                Expr::value(expected_balance - amount),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::Balance.eq(expected_balance))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
