//! Inventory factory for creating stocked products.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inventory rows with customizable fields.
pub struct InventoryFactory<'a> {
    db: &'a DatabaseConnection,
    product_name: String,
    quantity: f64,
    unit: String,
}

impl<'a> InventoryFactory<'a> {
    /// Creates a new InventoryFactory with default values.
    ///
    /// Defaults:
    /// - product_name: `"Product {id}"`
    /// - quantity: `10.0`
    /// - unit: `"kg"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            product_name: format!("Product {}", id),
            quantity: 10.0,
            unit: "kg".to_string(),
        }
    }

    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    pub fn quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Builds and inserts the inventory row into the database.
    pub async fn build(self) -> Result<entity::inventory::Model, DbErr> {
        entity::inventory::ActiveModel {
            product_name: ActiveValue::Set(self.product_name),
            quantity: ActiveValue::Set(self.quantity),
            unit: ActiveValue::Set(self.unit),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory row holding 10 kg of a uniquely named product.
pub async fn create_inventory(db: &DatabaseConnection) -> Result<entity::inventory::Model, DbErr> {
    InventoryFactory::new(db).build().await
}
