//! Purchase request service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::admin::PurchaseStatus,
    server::{
        data::purchase_request::PurchaseRequestRepository,
        error::AppError,
        model::purchase_request::{
            CreatePurchaseRequestParams, PurchaseDecision, PurchaseRequest,
        },
    },
};

/// Service for raising and deciding kitchen purchase requests.
pub struct PurchaseRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRequestService<'a> {
    /// Creates a new PurchaseRequestService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises a new pending purchase request.
    ///
    /// # Returns
    /// - `Ok(PurchaseRequest)` - The created request
    /// - `Err(AppError::BadRequest)` - Empty product name or unit, or non-positive quantity
    pub async fn create(
        &self,
        params: CreatePurchaseRequestParams,
    ) -> Result<PurchaseRequest, AppError> {
        if params.product_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Product name must not be empty".to_string(),
            ));
        }
        if params.unit.trim().is_empty() {
            return Err(AppError::BadRequest("Unit must not be empty".to_string()));
        }
        if !params.requested_quantity.is_finite() || params.requested_quantity <= 0.0 {
            return Err(AppError::BadRequest(
                "Requested quantity must be positive".to_string(),
            ));
        }

        let request = PurchaseRequestRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!(
            request_id = request.id,
            requested_by = request.requested_by,
            product = %request.product_name,
            "Raised purchase request"
        );

        Ok(request)
    }

    /// Lists purchase requests, optionally by status.
    pub async fn list(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<Vec<PurchaseRequest>, AppError> {
        Ok(PurchaseRequestRepository::new(self.db)
            .get_all(status)
            .await?)
    }

    /// Approves or rejects a pending purchase request.
    ///
    /// Records the deciding administrator and the decision time. Approval does not
    /// change inventory levels.
    ///
    /// # Arguments
    /// - `request_id` - Request to decide
    /// - `admin_id` - Deciding administrator
    /// - `decision` - Approve or reject
    ///
    /// # Returns
    /// - `Ok(PurchaseRequest)` - The decided request
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AppError::BadRequest)` - Request is no longer pending
    pub async fn decide(
        &self,
        request_id: i32,
        admin_id: i32,
        decision: PurchaseDecision,
    ) -> Result<PurchaseRequest, AppError> {
        let repo = PurchaseRequestRepository::new(self.db);

        let Some(request) = repo.find_by_id(request_id).await? else {
            return Err(AppError::NotFound(format!(
                "Purchase request {} not found",
                request_id
            )));
        };

        if request.status != PurchaseStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "Purchase request {} is already {}",
                request_id, request.status
            )));
        }

        let status = decision.status();
        if !repo
            .decide(request_id, status, admin_id, Utc::now())
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Purchase request {} is no longer pending",
                request_id
            )));
        }

        tracing::info!(request_id, admin_id, status = %status, "Decided purchase request");

        repo.find_by_id(request_id).await?.ok_or_else(|| {
            AppError::InternalError(format!(
                "Purchase request {} disappeared after decision",
                request_id
            ))
        })
    }
}
