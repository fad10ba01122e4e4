//! Order factory for creating placed orders without going through the order service.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, student.id, dish.id)
///     .received(true)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    menu_item_id: i32,
    order_date: NaiveDate,
    payment_type: String,
    is_paid: bool,
    is_received: bool,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_date: today (UTC)
    /// - payment_type: `"single"`
    /// - paid, not received
    pub fn new(db: &'a DatabaseConnection, user_id: i32, menu_item_id: i32) -> Self {
        Self {
            db,
            user_id,
            menu_item_id,
            order_date: Utc::now().date_naive(),
            payment_type: "single".to_string(),
            is_paid: true,
            is_received: false,
        }
    }

    pub fn order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = order_date;
        self
    }

    pub fn payment_type(mut self, payment_type: impl Into<String>) -> Self {
        self.payment_type = payment_type.into();
        self
    }

    pub fn paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    pub fn received(mut self, is_received: bool) -> Self {
        self.is_received = is_received;
        self
    }

    /// Builds and inserts the order into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            menu_item_id: ActiveValue::Set(self.menu_item_id),
            order_date: ActiveValue::Set(self.order_date),
            payment_type: ActiveValue::Set(self.payment_type),
            is_paid: ActiveValue::Set(self.is_paid),
            is_received: ActiveValue::Set(self.is_received),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a paid, not yet received order for today.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    menu_item_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, menu_item_id).build().await
}
