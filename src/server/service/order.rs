//! Order service.
//!
//! Placing an order runs every check and every write against one database
//! transaction: the dish lookup, the allergen check, the stock and balance checks,
//! the balance debit, the stock deductions and the order insert. Returning early
//! from any step drops the transaction, which rolls back whatever was written.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        inventory::InventoryRepository, menu_item::MenuItemRepository, order::OrderRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, order::OrderError, AppError},
    model::{
        order::{Order, PlaceOrderParams},
        user::User,
    },
};

/// Allergens recognised in food preferences and dish descriptions.
const KNOWN_ALLERGENS: &[&str] = &[
    "орехи", "молоко", "мед", "яйца", "nuts", "milk", "honey", "eggs",
];

/// Returns the first known allergen mentioned in both texts, ignoring case.
pub fn find_allergen(food_preferences: &str, description: &str) -> Option<&'static str> {
    let preferences = food_preferences.to_lowercase();
    let description = description.to_lowercase();

    KNOWN_ALLERGENS
        .iter()
        .copied()
        .find(|allergen| preferences.contains(allergen) && description.contains(allergen))
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places and pays for an order.
    ///
    /// Checks, in order: the dish exists and is on sale, the dish description shares
    /// no known allergen with the user's food preferences, every ingredient has enough
    /// stock for one serving, and the user's balance covers the price. On success the
    /// price is debited, each ingredient is deducted, and a paid order is inserted, all
    /// in a single transaction.
    ///
    /// # Arguments
    /// - `params` - Ordering user, dish, order date and payment type
    ///
    /// # Returns
    /// - `Ok(Order)` - The paid order
    /// - `Err(OrderError::ItemUnavailable)` - Dish missing or not on sale
    /// - `Err(OrderError::AllergenDetected)` - Dish contains one of the user's allergens
    /// - `Err(OrderError::OutOfStock)` - An ingredient has insufficient stock
    /// - `Err(OrderError::InsufficientFunds)` - Balance below price
    /// - `Err(OrderError::Conflict)` - Balance changed during the transaction
    /// - `Err(AppError::DbErr)` - Database error; nothing is persisted
    pub async fn place(&self, params: PlaceOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let inventory_repo = InventoryRepository::new(&txn);

        let Some(user) = user_repo.find_by_id(params.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(params.user_id).into());
        };

        let item = match MenuItemRepository::new(&txn)
            .find_by_id(params.menu_item_id)
            .await?
        {
            Some(item) if item.is_available => item,
            _ => return Err(OrderError::ItemUnavailable(params.menu_item_id).into()),
        };

        if let (Some(preferences), Some(description)) =
            (&user.food_preferences, &item.description)
        {
            if let Some(allergen) = find_allergen(preferences, description) {
                return Err(OrderError::AllergenDetected(allergen.to_string()).into());
            }
        }

        // A product listed on several recipe lines is checked against its total.
        let mut required: BTreeMap<i32, f64> = BTreeMap::new();
        for line in &item.ingredients {
            *required.entry(line.inventory_id).or_default() += line.quantity_required;
        }

        let mut deductions = Vec::with_capacity(required.len());
        for (inventory_id, amount) in required {
            let Some(stock) = inventory_repo.find_by_id(inventory_id).await? else {
                return Err(AppError::InternalError(format!(
                    "Recipe of menu item {} references missing inventory item {}",
                    item.id, inventory_id
                )));
            };

            if stock.quantity < amount {
                return Err(OrderError::OutOfStock(stock.product_name).into());
            }

            deductions.push((stock, amount));
        }

        if user.balance < item.price {
            return Err(OrderError::InsufficientFunds.into());
        }

        if !user_repo
            .debit_balance(user.id, user.balance, item.price)
            .await?
        {
            return Err(OrderError::Conflict.into());
        }

        for (stock, amount) in deductions {
            if !inventory_repo
                .deduct(stock.id, stock.quantity, amount)
                .await?
            {
                return Err(OrderError::OutOfStock(stock.product_name).into());
            }
        }

        let order = OrderRepository::new(&txn).create(params.into()).await?;

        txn.commit().await?;

        tracing::info!(
            order_id = order.id,
            user_id = order.user_id,
            menu_item_id = order.menu_item_id,
            price = item.price,
            "Placed order"
        );

        Ok(order)
    }

    /// Lists a user's own orders, newest first.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Lists all orders, optionally for a single date.
    pub async fn list_all(&self, day: Option<NaiveDate>) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_all(day).await?)
    }

    /// Marks an order's meal as handed out.
    ///
    /// The order's owner and kitchen staff may mark it; a meal is received once.
    ///
    /// # Arguments
    /// - `actor` - Authenticated user making the request
    /// - `order_id` - Order to mark
    ///
    /// # Returns
    /// - `Ok(Order)` - The order with `is_received = true`
    /// - `Err(OrderError::NotFound)` - No order with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the owner nor staff
    /// - `Err(OrderError::AlreadyReceived)` - Meal was already received
    pub async fn receive(&self, actor: &User, order_id: i32) -> Result<Order, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let Some(mut order) = order_repo.find_by_id(order_id).await? else {
            return Err(OrderError::NotFound(order_id).into());
        };

        if order.user_id != actor.id && !actor.is_staff() {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User attempted to mark order {} of another user as received", order_id),
            )
            .into());
        }

        if order.is_received || !order_repo.mark_received(order_id).await? {
            return Err(OrderError::AlreadyReceived(order_id).into());
        }

        order.is_received = true;

        Ok(order)
    }
}
