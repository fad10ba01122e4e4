//! Purchase request domain models and parameters.
//!
//! Purchase requests are raised by kitchen staff when a product runs low and are
//! approved or rejected by an administrator. A decision is recorded once; the
//! request keeps who decided and when.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::admin::{CreatePurchaseRequestDto, PurchaseRequestDto, PurchaseStatus},
    server::model::parse_column,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub id: i32,
    pub product_name: String,
    pub requested_quantity: f64,
    pub unit: String,
    pub status: PurchaseStatus,
    /// User who raised the request.
    pub requested_by: i32,
    /// Administrator who approved or rejected the request.
    pub approved_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// When the request was approved or rejected.
    pub approved_at: Option<DateTime<Utc>>,
}

impl PurchaseRequest {
    pub fn into_dto(self) -> PurchaseRequestDto {
        PurchaseRequestDto {
            id: self.id,
            product_name: self.product_name,
            requested_quantity: self.requested_quantity,
            unit: self.unit,
            status: self.status,
            requested_by: self.requested_by,
            approved_by: self.approved_by,
            created_at: self.created_at,
            approved_at: self.approved_at,
        }
    }

    /// Converts an entity model to a purchase request domain model.
    ///
    /// # Returns
    /// - `Ok(PurchaseRequest)` - The converted purchase request
    /// - `Err(DbErr::Custom)` - Stored status is not a known status
    pub fn from_entity(entity: entity::purchase_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            status: parse_column(&entity.status, "purchase request status")?,
            product_name: entity.product_name,
            requested_quantity: entity.requested_quantity,
            unit: entity.unit,
            requested_by: entity.requested_by,
            approved_by: entity.approved_by,
            created_at: entity.created_at,
            approved_at: entity.approved_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreatePurchaseRequestParams {
    pub product_name: String,
    pub requested_quantity: f64,
    pub unit: String,
    pub requested_by: i32,
}

impl CreatePurchaseRequestParams {
    pub fn from_dto(requested_by: i32, dto: CreatePurchaseRequestDto) -> Self {
        Self {
            product_name: dto.product_name,
            requested_quantity: dto.requested_quantity,
            unit: dto.unit,
            requested_by,
        }
    }
}

/// Final decision an administrator records on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseDecision {
    Approve,
    Reject,
}

impl PurchaseDecision {
    pub fn status(self) -> PurchaseStatus {
        match self {
            Self::Approve => PurchaseStatus::Approved,
            Self::Reject => PurchaseStatus::Rejected,
        }
    }
}
