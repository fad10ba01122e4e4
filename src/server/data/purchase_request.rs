//! Purchase request data repository.
//!
//! Provides the `PurchaseRequestRepository` for kitchen restocking requests and the
//! one-time approve/reject decision recorded by an administrator.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::admin::PurchaseStatus,
    server::model::purchase_request::{CreatePurchaseRequestParams, PurchaseRequest},
};

/// Repository providing database operations for purchase requests.
pub struct PurchaseRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PurchaseRequestRepository<'a, C> {
    /// Creates a new PurchaseRequestRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending purchase request.
    ///
    /// # Arguments
    /// - `params` - Product, quantity, unit and requesting user
    ///
    /// # Returns
    /// - `Ok(PurchaseRequest)` - The created request with status `pending`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreatePurchaseRequestParams,
    ) -> Result<PurchaseRequest, DbErr> {
        let entity = entity::purchase_request::ActiveModel {
            product_name: ActiveValue::Set(params.product_name),
            requested_quantity: ActiveValue::Set(params.requested_quantity),
            unit: ActiveValue::Set(params.unit),
            requested_by: ActiveValue::Set(params.requested_by),
            status: ActiveValue::Set(PurchaseStatus::Pending.as_str().to_string()),
            approved_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            approved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        PurchaseRequest::from_entity(entity)
    }

    /// Finds a purchase request by ID.
    ///
    /// # Returns
    /// - `Ok(Some(PurchaseRequest))` - Request found
    /// - `Ok(None)` - No request with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, request_id: i32) -> Result<Option<PurchaseRequest>, DbErr> {
        entity::prelude::PurchaseRequest::find_by_id(request_id)
            .one(self.db)
            .await?
            .map(PurchaseRequest::from_entity)
            .transpose()
    }

    /// Lists purchase requests, newest first, optionally filtered by status.
    pub async fn get_all(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<Vec<PurchaseRequest>, DbErr> {
        let mut query = entity::prelude::PurchaseRequest::find();
        if let Some(status) = status {
            query = query.filter(entity::purchase_request::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::purchase_request::Column::CreatedAt)
            .order_by_desc(entity::purchase_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(PurchaseRequest::from_entity)
            .collect()
    }

    /// Records an administrator's decision on a request that is still pending.
    ///
    /// # Arguments
    /// - `request_id` - Request to decide
    /// - `status` - Resulting status (`approved` or `rejected`)
    /// - `decided_by` - ID of the deciding administrator
    /// - `decided_at` - Time of the decision
    ///
    /// # Returns
    /// - `Ok(true)` - Decision recorded
    /// - `Ok(false)` - Request missing or no longer pending
    /// - `Err(DbErr)` - Database error during update
    pub async fn decide(
        &self,
        request_id: i32,
        status: PurchaseStatus,
        decided_by: i32,
        decided_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::PurchaseRequest::update_many()
            .col_expr(
                entity::purchase_request::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                entity::purchase_request::Column::ApprovedBy,
                Expr::value(decided_by),
            )
            .col_expr(
                entity::purchase_request::Column::ApprovedAt,
                Expr::value(decided_at),
            )
            .filter(entity::purchase_request::Column::Id.eq(request_id))
            .filter(
                entity::purchase_request::Column::Status.eq(PurchaseStatus::Pending.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
