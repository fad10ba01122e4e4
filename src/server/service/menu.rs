//! Menu service.
//!
//! Lists the dishes on sale and lets kitchen staff add new dishes together with the
//! recipe that determines how much stock each serving consumes.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{inventory::InventoryRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::menu::{CreateMenuItemParams, MenuFilter, MenuItem},
};

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists available dishes matching the filter.
    pub async fn list(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, AppError> {
        Ok(MenuItemRepository::new(self.db).get_available(filter).await?)
    }

    /// Adds a dish and its recipe to the menu.
    ///
    /// The dish and every recipe line are inserted in one transaction.
    ///
    /// # Arguments
    /// - `params` - Dish fields and recipe lines
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - The created dish
    /// - `Err(AppError::BadRequest)` - Empty name, negative price, non-positive ingredient
    ///   quantity, or an ingredient referencing unknown inventory
    /// - `Err(AppError::DbErr)` - Database error; nothing is stored
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name must not be empty".to_string()));
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(AppError::BadRequest(
                "Price must be a finite, non-negative number".to_string(),
            ));
        }
        if let Some(line) = params
            .ingredients
            .iter()
            .find(|line| {
                !line.quantity_required.is_finite() || line.quantity_required <= 0.0
            })
        {
            return Err(AppError::BadRequest(format!(
                "Required quantity for inventory item {} must be positive",
                line.inventory_id
            )));
        }

        let txn = self.db.begin().await?;

        let inventory_repo = InventoryRepository::new(&txn);
        for line in &params.ingredients {
            if inventory_repo.find_by_id(line.inventory_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Inventory item {} not found",
                    line.inventory_id
                )));
            }
        }

        let item = MenuItemRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(menu_item_id = item.id, date = %item.date, "Added dish to menu");

        Ok(item)
    }
}
