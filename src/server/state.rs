//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's state
//! extraction. Every field is cheap to clone: the connection is a pool handle, the token
//! service holds reference-counted keys and the hasher is `Copy`.

use sea_orm::DatabaseConnection;

use crate::server::service::{password::PasswordHasher, token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,
    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
    /// Balance credited to every newly registered account.
    pub registration_bonus: f64,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        hasher: PasswordHasher,
        registration_bonus: f64,
    ) -> Self {
        Self {
            db,
            tokens,
            hasher,
            registration_bonus,
        }
    }
}
