//! Order data repository.
//!
//! Provides the `OrderRepository` for meal orders: inserting paid orders, per-user and
//! staff listings, marking meals as received, and the counts and sums behind the
//! admin reports.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{CreateOrderParams, Order};

/// Repository providing database operations for orders.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a paid order whose meal has not been handed out yet.
    ///
    /// # Arguments
    /// - `params` - Ordering user, dish, date and payment type
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with `is_paid = true`, `is_received = false`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            menu_item_id: ActiveValue::Set(params.menu_item_id),
            order_date: ActiveValue::Set(params.order_date),
            payment_type: ActiveValue::Set(params.payment_type.as_str().to_string()),
            is_paid: ActiveValue::Set(true),
            is_received: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Order::from_entity(entity)
    }

    /// Finds an order by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?
            .map(Order::from_entity)
            .transpose()
    }

    /// Lists a user's orders, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect()
    }

    /// Lists all orders, optionally restricted to one order date.
    ///
    /// # Arguments
    /// - `day` - Only orders for this date when `Some`
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Orders ordered by date then ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, day: Option<NaiveDate>) -> Result<Vec<Order>, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(day) = day {
            query = query.filter(entity::order::Column::OrderDate.eq(day));
        }

        query
            .order_by_asc(entity::order::Column::OrderDate)
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect()
    }

    /// Marks an order's meal as received if it has not been received yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Order updated
    /// - `Ok(false)` - Order missing or already received
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_received(&self, order_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::IsReceived, Expr::value(true))
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(entity::order::Column::IsReceived.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Checks whether the user has received the given dish at least once.
    pub async fn has_received(&self, user_id: i32, menu_item_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .filter(entity::order::Column::MenuItemId.eq(menu_item_id))
            .filter(entity::order::Column::IsReceived.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts paid orders for a date.
    pub async fn count_paid_on(&self, day: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderDate.eq(day))
            .filter(entity::order::Column::IsPaid.eq(true))
            .count(self.db)
            .await
    }

    /// Counts orders for a date whose meal has been received.
    pub async fn count_received_on(&self, day: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderDate.eq(day))
            .filter(entity::order::Column::IsReceived.eq(true))
            .count(self.db)
            .await
    }

    /// Sums the dish prices of paid orders for a date.
    ///
    /// Orders whose dish no longer exists contribute nothing.
    pub async fn revenue_on(&self, day: NaiveDate) -> Result<f64, DbErr> {
        let rows = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderDate.eq(day))
            .filter(entity::order::Column::IsPaid.eq(true))
            .find_also_related(entity::prelude::MenuItem)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, item)| item.map(|item| item.price))
            .sum())
    }

    /// Counts paid orders whose meal has not been handed out yet.
    pub async fn count_waiting(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::IsPaid.eq(true))
            .filter(entity::order::Column::IsReceived.eq(false))
            .count(self.db)
            .await
    }

    /// Counts orders whose meal has been handed out.
    pub async fn count_received(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::IsReceived.eq(true))
            .count(self.db)
            .await
    }
}
