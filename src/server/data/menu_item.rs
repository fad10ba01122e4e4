//! Menu item data repository.
//!
//! Provides the `MenuItemRepository` for dishes and their recipe lines. Recipe rows are
//! always read and written together with their dish so that callers work with complete
//! `MenuItem` domain models.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::menu::{CreateMenuItemParams, MenuFilter, MenuItem};

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a dish and one recipe row per ingredient.
    ///
    /// Performs several inserts; pass a transaction as the connection when the dish and
    /// its recipe must be stored atomically.
    ///
    /// # Arguments
    /// - `params` - Dish fields and recipe lines
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - The created dish with its recipe
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown
    ///   inventory ID
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, DbErr> {
        let item = entity::menu_item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            meal_type: ActiveValue::Set(params.meal_type.as_str().to_string()),
            date: ActiveValue::Set(params.date),
            is_available: ActiveValue::Set(params.is_available),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut recipe = Vec::with_capacity(params.ingredients.len());
        for line in params.ingredients {
            let row = entity::recipe::ActiveModel {
                menu_item_id: ActiveValue::Set(item.id),
                inventory_id: ActiveValue::Set(line.inventory_id),
                quantity_required: ActiveValue::Set(line.quantity_required),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            recipe.push(row);
        }

        MenuItem::from_entity(item, recipe)
    }

    /// Finds a dish by ID together with its recipe.
    ///
    /// Returns the dish regardless of availability; callers decide whether an
    /// unavailable dish may be used.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItem))` - Dish found
    /// - `Ok(None)` - No dish with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, menu_item_id: i32) -> Result<Option<MenuItem>, DbErr> {
        let Some(item) = entity::prelude::MenuItem::find_by_id(menu_item_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let recipe = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::MenuItemId.eq(menu_item_id))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?;

        MenuItem::from_entity(item, recipe).map(Some)
    }

    /// Checks whether a dish with the given ID exists.
    pub async fn exists(&self, menu_item_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.eq(menu_item_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists available dishes with their recipes.
    ///
    /// Only dishes with `is_available` set are returned, ordered by date then ID. The
    /// optional filter narrows the list to a single date and/or meal type.
    ///
    /// # Arguments
    /// - `filter` - Optional date and meal type filters
    ///
    /// # Returns
    /// - `Ok(Vec<MenuItem>)` - Matching dishes (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_available(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, DbErr> {
        let mut query = entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::IsAvailable.eq(true));

        if let Some(day) = filter.day {
            query = query.filter(entity::menu_item::Column::Date.eq(day));
        }
        if let Some(meal_type) = filter.meal_type {
            query = query.filter(entity::menu_item::Column::MealType.eq(meal_type.as_str()));
        }

        let items = query
            .order_by_asc(entity::menu_item::Column::Date)
            .order_by_asc(entity::menu_item::Column::Id)
            .all(self.db)
            .await?;

        if items.is_empty() {
            return Ok(Vec::new());
        }

        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        let mut recipes: HashMap<i32, Vec<entity::recipe::Model>> = HashMap::new();
        for row in entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::MenuItemId.is_in(item_ids))
            .order_by_asc(entity::recipe::Column::Id)
            .all(self.db)
            .await?
        {
            recipes.entry(row.menu_item_id).or_default().push(row);
        }

        items
            .into_iter()
            .map(|item| {
                let recipe = recipes.remove(&item.id).unwrap_or_default();
                MenuItem::from_entity(item, recipe)
            })
            .collect()
    }
}
