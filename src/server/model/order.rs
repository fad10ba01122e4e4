//! Order domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::order::{CreateOrderDto, OrderDto, PaymentType},
    server::model::parse_column,
};

/// Paid meal order and whether the meal has been handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub order_date: NaiveDate,
    pub payment_type: PaymentType,
    pub is_paid: bool,
    pub is_received: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            menu_item_id: self.menu_item_id,
            order_date: self.order_date,
            payment_type: self.payment_type,
            is_paid: self.is_paid,
            is_received: self.is_received,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - The converted order
    /// - `Err(DbErr::Custom)` - Stored payment type is not a known payment type
    pub fn from_entity(entity: entity::order::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            payment_type: parse_column(&entity.payment_type, "payment type")?,
            user_id: entity.user_id,
            menu_item_id: entity.menu_item_id,
            order_date: entity.order_date,
            is_paid: entity.is_paid,
            is_received: entity.is_received,
            created_at: entity.created_at,
        })
    }
}

/// Order request made by an authenticated user.
#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub user_id: i32,
    pub menu_item_id: i32,
    pub payment_type: PaymentType,
    pub order_date: NaiveDate,
}

impl PlaceOrderParams {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Self {
        Self {
            user_id,
            menu_item_id: dto.menu_item_id,
            payment_type: dto.payment_type,
            order_date: dto.order_date,
        }
    }
}

/// Parameters for inserting the order row once payment and stock deduction succeeded.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub menu_item_id: i32,
    pub payment_type: PaymentType,
    pub order_date: NaiveDate,
}

impl From<PlaceOrderParams> for CreateOrderParams {
    fn from(params: PlaceOrderParams) -> Self {
        Self {
            user_id: params.user_id,
            menu_item_id: params.menu_item_id,
            payment_type: params.payment_type,
            order_date: params.order_date,
        }
    }
}
