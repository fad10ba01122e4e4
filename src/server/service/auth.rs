//! Account registration and login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, User},
    service::{password::PasswordHasher, token::TokenService},
};

const DUPLICATE_USERNAME: &str = "Username already registered";

/// Service for account registration and password login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `hasher` - Password hasher used for new accounts and login checks
    /// - `tokens` - Token service used to issue access tokens on login
    pub fn new(
        db: &'a DatabaseConnection,
        hasher: &'a PasswordHasher,
        tokens: &'a TokenService,
    ) -> Self {
        Self { db, hasher, tokens }
    }

    /// Registers a new account.
    ///
    /// Hashes the password and credits `registration_bonus` as the starting balance.
    ///
    /// # Arguments
    /// - `params` - Username, plain-text password, role and optional profile fields
    /// - `registration_bonus` - Starting balance of the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Empty username or password, or username taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(
        &self,
        params: RegisterUserParams,
        registration_bonus: f64,
    ) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username must not be empty".to_string()));
        }
        if params.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_USERNAME.to_string()));
        }

        let password_hash = self.hasher.hash(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                username,
                password_hash,
                email: params.email,
                role: params.role,
                food_preferences: params.food_preferences,
                balance: registration_bonus,
            })
            .await
            .map_err(|err| AppError::from_insert(err, || DUPLICATE_USERNAME.to_string()))?;

        tracing::info!(user_id = user.id, role = %user.role, "Registered new user");

        Ok(user)
    }

    /// Checks a username and password and issues an access token.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username.trim()).await? else {
            self.hasher.verify_missing(password)?;
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.tokens.issue(&user)
    }
}
