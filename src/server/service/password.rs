//! Password hashing.

use crate::server::error::AppError;

/// Bcrypt password hasher with a configurable cost.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Checks a plain-text password against a stored bcrypt hash.
    ///
    /// # Returns
    /// - `Ok(true)` / `Ok(false)` - Password matches / does not match
    /// - `Err(AppError::BcryptErr)` - Stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        Ok(bcrypt::verify(password, hash)?)
    }

    /// Spends the same bcrypt work as `verify` when there is no stored hash.
    ///
    /// Keeps failed logins for unknown usernames as slow as wrong passwords, so
    /// response time does not reveal which usernames exist. Always `Ok(false)`.
    pub fn verify_missing(&self, password: &str) -> Result<bool, AppError> {
        bcrypt::hash(password, self.cost)?;
        Ok(false)
    }
}
