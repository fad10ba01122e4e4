//! Recipe factory linking menu items to inventory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a recipe line consuming `quantity_required` of an inventory row per serving.
///
/// # Arguments
/// - `db` - Database connection
/// - `menu_item_id` - Dish the line belongs to
/// - `inventory_id` - Product consumed
/// - `quantity_required` - Units consumed per serving
pub async fn create_recipe(
    db: &DatabaseConnection,
    menu_item_id: i32,
    inventory_id: i32,
    quantity_required: f64,
) -> Result<entity::recipe::Model, DbErr> {
    entity::recipe::ActiveModel {
        menu_item_id: ActiveValue::Set(menu_item_id),
        inventory_id: ActiveValue::Set(inventory_id),
        quantity_required: ActiveValue::Set(quantity_required),
        ..Default::default()
    }
    .insert(db)
    .await
}
