use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60 * 24;
const DEFAULT_REGISTRATION_BONUS: f64 = 100.0;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,

    /// Amount credited to every newly registered account.
    pub registration_bonus: f64,
    /// Insert demo users, stock and a dish when the database has no users.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            token_ttl_minutes: optional("TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?,
            bcrypt_cost: optional("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            registration_bonus: optional("REGISTRATION_BONUS", DEFAULT_REGISTRATION_BONUS)?,
            seed_demo_data: optional("SEED_DEMO_DATA", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
