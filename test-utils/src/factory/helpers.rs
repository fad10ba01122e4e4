//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a menu item with one stocked inventory row and recipe line per ingredient.
///
/// Each `(in_stock, required)` pair becomes an inventory row holding `in_stock` units
/// and a recipe line consuming `required` units per serving.
///
/// # Arguments
/// - `db` - Database connection
/// - `ingredients` - Stock level and per-serving requirement for each ingredient
///
/// # Returns
/// - `Ok((menu_item, [(inventory, recipe)]))` - The dish and its ingredients
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dish_with_ingredients(
    db: &DatabaseConnection,
    ingredients: &[(f64, f64)],
) -> Result<
    (
        entity::menu_item::Model,
        Vec<(entity::inventory::Model, entity::recipe::Model)>,
    ),
    DbErr,
> {
    let dish = crate::factory::menu_item::create_menu_item(db).await?;

    let mut lines = Vec::with_capacity(ingredients.len());
    for &(in_stock, required) in ingredients {
        let stock = crate::factory::inventory::InventoryFactory::new(db)
            .quantity(in_stock)
            .build()
            .await?;
        let recipe = crate::factory::recipe::create_recipe(db, dish.id, stock.id, required).await?;
        lines.push((stock, recipe));
    }

    Ok((dish, lines))
}
