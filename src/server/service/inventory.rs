//! Inventory service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::inventory::InventoryRepository,
    error::AppError,
    model::inventory::{CreateInventoryParams, InventoryItem},
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<InventoryItem>, AppError> {
        Ok(InventoryRepository::new(self.db).get_all().await?)
    }

    /// Adds a product to the storeroom.
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - The created product
    /// - `Err(AppError::BadRequest)` - Empty name, negative or non-finite quantity, or a product with
    ///   the same name already exists
    pub async fn create(&self, params: CreateInventoryParams) -> Result<InventoryItem, AppError> {
        if params.product_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Product name must not be empty".to_string(),
            ));
        }
        check_quantity(params.quantity)?;

        let repo = InventoryRepository::new(self.db);
        if repo
            .find_by_product_name(&params.product_name)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Product '{}' already exists",
                params.product_name
            )));
        }

        let product_name = params.product_name.clone();
        repo.create(params).await.map_err(|err| {
            AppError::from_insert(err, || format!("Product '{}' already exists", product_name))
        })
    }

    /// Sets a product's stock level.
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - The updated product
    /// - `Err(AppError::BadRequest)` - Negative or non-finite quantity
    /// - `Err(AppError::NotFound)` - No product with that ID
    pub async fn update_quantity(
        &self,
        inventory_id: i32,
        quantity: f64,
    ) -> Result<InventoryItem, AppError> {
        check_quantity(quantity)?;

        InventoryRepository::new(self.db)
            .set_quantity(inventory_id, quantity)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Inventory item {} not found", inventory_id))
            })
    }
}

/// Stock levels are finite and not negative. `NaN` would be stored as NULL.
fn check_quantity(quantity: f64) -> Result<(), AppError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::BadRequest(format!(
            "Quantity must be a finite, non-negative number, got {}",
            quantity
        )));
    }

    Ok(())
}
