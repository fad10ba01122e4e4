//! SeaORM entity definitions for the canteen database schema.

pub mod prelude;

pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod purchase_request;
pub mod recipe;
pub mod review;
pub mod user;
