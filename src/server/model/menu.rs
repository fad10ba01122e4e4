//! Menu domain models and parameters.

use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::menu::{CreateMenuItemDto, MealType, MenuItemDto, MenuQuery, RecipeLineDto},
    server::model::parse_column,
};

/// Dish on the menu for a given date, with the ingredients one serving consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    /// Free-form description, scanned for allergens when ordering.
    pub description: Option<String>,
    pub price: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub is_available: bool,
    pub ingredients: Vec<RecipeLine>,
}

impl MenuItem {
    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            meal_type: self.meal_type,
            date: self.date,
            is_available: self.is_available,
            ingredients: self
                .ingredients
                .into_iter()
                .map(RecipeLine::into_dto)
                .collect(),
        }
    }

    /// Converts a menu item entity and its recipe rows into the domain model.
    ///
    /// # Arguments
    /// - `entity` - Menu item row
    /// - `recipe` - Recipe rows belonging to the menu item
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - The converted menu item
    /// - `Err(DbErr::Custom)` - Stored meal type is not a known meal type
    pub fn from_entity(
        entity: entity::menu_item::Model,
        recipe: Vec<entity::recipe::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            meal_type: parse_column(&entity.meal_type, "meal type")?,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            date: entity.date,
            is_available: entity.is_available,
            ingredients: recipe.into_iter().map(RecipeLine::from_entity).collect(),
        })
    }
}

/// Quantity of one inventory product consumed by a single serving.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeLine {
    pub inventory_id: i32,
    pub quantity_required: f64,
}

impl RecipeLine {
    pub fn into_dto(self) -> RecipeLineDto {
        RecipeLineDto {
            inventory_id: self.inventory_id,
            quantity_required: self.quantity_required,
        }
    }

    pub fn from_dto(dto: RecipeLineDto) -> Self {
        Self {
            inventory_id: dto.inventory_id,
            quantity_required: dto.quantity_required,
        }
    }

    pub fn from_entity(entity: entity::recipe::Model) -> Self {
        Self {
            inventory_id: entity.inventory_id,
            quantity_required: entity.quantity_required,
        }
    }
}

/// Parameters for adding a dish to the menu together with its recipe.
#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub is_available: bool,
    pub ingredients: Vec<RecipeLine>,
}

impl CreateMenuItemParams {
    pub fn from_dto(dto: CreateMenuItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            meal_type: dto.meal_type,
            date: dto.date,
            is_available: dto.is_available,
            ingredients: dto.ingredients.into_iter().map(RecipeLine::from_dto).collect(),
        }
    }
}

/// Optional filters applied when listing available dishes.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub day: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
}

impl MenuFilter {
    pub fn from_query(query: MenuQuery) -> Self {
        Self {
            day: query.day,
            meal_type: query.meal_type,
        }
    }
}
