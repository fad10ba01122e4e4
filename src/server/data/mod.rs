//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes
//! to commit or roll back together.

pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod purchase_request;
pub mod review;
pub mod user;
