//! Inventory domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::admin::{CreateInventoryDto, InventoryDto};

/// Stock level of a single product in the canteen storeroom.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    pub fn into_dto(self) -> InventoryDto {
        InventoryDto {
            id: self.id,
            product_name: self.product_name,
            quantity: self.quantity,
            unit: self.unit,
            last_updated: self.last_updated,
        }
    }

    pub fn from_entity(entity: entity::inventory::Model) -> Self {
        Self {
            id: entity.id,
            product_name: entity.product_name,
            quantity: entity.quantity,
            unit: entity.unit,
            last_updated: entity.last_updated,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInventoryParams {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
}

impl CreateInventoryParams {
    pub fn from_dto(dto: CreateInventoryDto) -> Self {
        Self {
            product_name: dto.product_name,
            quantity: dto.quantity,
            unit: dto.unit,
        }
    }
}
