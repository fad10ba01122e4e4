//! Inventory data repository.
//!
//! Provides the `InventoryRepository` for product stock levels, including the conditional
//! stock deduction used when an order consumes a dish's ingredients.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::inventory::{CreateInventoryParams, InventoryItem};

/// Repository providing database operations for inventory records.
pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new InventoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product.
    ///
    /// # Arguments
    /// - `params` - Product name, starting quantity and unit
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - The created product
    /// - `Err(DbErr)` - Database error, including a unique violation on `product_name`
    pub async fn create(&self, params: CreateInventoryParams) -> Result<InventoryItem, DbErr> {
        let entity = entity::inventory::ActiveModel {
            product_name: ActiveValue::Set(params.product_name),
            quantity: ActiveValue::Set(params.quantity),
            unit: ActiveValue::Set(params.unit),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(InventoryItem::from_entity(entity))
    }

    /// Finds a product by ID.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Product found
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, inventory_id: i32) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::Inventory::find_by_id(inventory_id)
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Finds a product by its unique name.
    pub async fn find_by_product_name(
        &self,
        product_name: &str,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::Inventory::find()
            .filter(entity::inventory::Column::ProductName.eq(product_name))
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Lists all products ordered by name.
    pub async fn get_all(&self) -> Result<Vec<InventoryItem>, DbErr> {
        let entities = entity::prelude::Inventory::find()
            .order_by_asc(entity::inventory::Column::ProductName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InventoryItem::from_entity).collect())
    }

    /// Overwrites a product's stock level and refreshes `last_updated`.
    ///
    /// # Arguments
    /// - `inventory_id` - Product to update
    /// - `quantity` - New stock level
    ///
    /// # Returns
    /// - `Ok(Some(InventoryItem))` - Updated product
    /// - `Ok(None)` - No product with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_quantity(
        &self,
        inventory_id: i32,
        quantity: f64,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let Some(entity) = entity::prelude::Inventory::find_by_id(inventory_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::inventory::ActiveModel = entity.into();
        active_model.quantity = ActiveValue::Set(quantity);
        active_model.last_updated = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(InventoryItem::from_entity(updated)))
    }

    /// Deducts `amount` from a product's stock if it still holds `expected_quantity`.
    ///
    /// Conditional on the stored quantity matching what the caller checked, so a
    /// concurrent deduction makes this one fail rather than driving stock negative.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock deducted
    /// - `Ok(false)` - Stock changed since it was read, nothing updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn deduct(
        &self,
        inventory_id: i32,
        expected_quantity: f64,
        amount: f64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Inventory::update_many()
            .col_expr(
                entity::inventory::Column::Quantity,
                Expr::value(expected_quantity - amount),
            )
            .col_expr(
                entity::inventory::Column::LastUpdated,
                Expr::value(Utc::now()),
            )
            .filter(entity::inventory::Column::Id.eq(inventory_id))
            .filter(entity::inventory::Column::Quantity.eq(expected_quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
