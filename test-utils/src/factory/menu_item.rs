//! Menu item factory for creating test dishes.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items with customizable fields.
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    price: f64,
    meal_type: String,
    date: NaiveDate,
    is_available: bool,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"`
    /// - price: `50.0`
    /// - meal_type: `"lunch"`
    /// - date: today (UTC)
    /// - available, no description
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dish {}", id),
            description: None,
            price: 50.0,
            meal_type: "lunch".to_string(),
            date: Utc::now().date_naive(),
            is_available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = meal_type.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Builds and inserts the menu item into the database.
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            meal_type: ActiveValue::Set(self.meal_type),
            date: ActiveValue::Set(self.date),
            is_available: ActiveValue::Set(self.is_available),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available lunch dish for today with default values.
pub async fn create_menu_item(db: &DatabaseConnection) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}
