//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::user::create_user(&db).await?;
//!     let dish = factory::menu_item::create_menu_item(&db).await?;
//!
//!     // Create a dish together with stocked ingredients
//!     let (dish, ingredients) =
//!         factory::helpers::create_dish_with_ingredients(&db, &[(10.0, 0.5)]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let cook = factory::user::UserFactory::new(&db)
//!     .username("cook")
//!     .role("cook")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod purchase_request;
pub mod recipe;
pub mod review;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use inventory::create_inventory;
pub use menu_item::create_menu_item;
pub use order::create_order;
pub use purchase_request::create_purchase_request;
pub use recipe::create_recipe;
pub use review::create_review;
pub use user::create_user;
