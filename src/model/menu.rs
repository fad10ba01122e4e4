use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::UnknownVariant;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            other => Err(UnknownVariant {
                kind: "meal type",
                value: other.to_string(),
            }),
        }
    }
}

/// One ingredient of a dish: how much of an inventory product a single serving consumes.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RecipeLineDto {
    pub inventory_id: i32,
    pub quantity_required: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateMenuItemDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub ingredients: Vec<RecipeLineDto>,
}

fn default_available() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MenuItemDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub is_available: bool,
    pub ingredients: Vec<RecipeLineDto>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
pub struct MenuQuery {
    /// Only dishes served on this date
    pub day: Option<NaiveDate>,
    /// Only dishes of this meal type
    pub meal_type: Option<MealType>,
}
