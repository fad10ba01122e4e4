//! Purchase request factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test purchase requests with customizable fields.
pub struct PurchaseRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requested_by: i32,
    product_name: String,
    requested_quantity: f64,
    unit: String,
    status: String,
}

impl<'a> PurchaseRequestFactory<'a> {
    /// Creates a new PurchaseRequestFactory with default values.
    ///
    /// Defaults:
    /// - product_name: `"Product {id}"`
    /// - requested_quantity: `5.0`
    /// - unit: `"kg"`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, requested_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            requested_by,
            product_name: format!("Product {}", id),
            requested_quantity: 5.0,
            unit: "kg".to_string(),
            status: "pending".to_string(),
        }
    }

    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the purchase request into the database.
    pub async fn build(self) -> Result<entity::purchase_request::Model, DbErr> {
        entity::purchase_request::ActiveModel {
            product_name: ActiveValue::Set(self.product_name),
            requested_quantity: ActiveValue::Set(self.requested_quantity),
            unit: ActiveValue::Set(self.unit),
            requested_by: ActiveValue::Set(self.requested_by),
            status: ActiveValue::Set(self.status),
            approved_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            approved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending purchase request.
pub async fn create_purchase_request(
    db: &DatabaseConnection,
    requested_by: i32,
) -> Result<entity::purchase_request::Model, DbErr> {
    PurchaseRequestFactory::new(db, requested_by).build().await
}
