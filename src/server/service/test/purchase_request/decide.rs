use super::*;

/// Tests approving a pending request.
///
/// Verifies that the approving admin and the decision time are recorded and that
/// inventory is left untouched.
///
/// Expected: Ok(PurchaseRequest) with status `approved`
#[tokio::test]
async fn approves_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let request = factory::create_purchase_request(db, cook.id).await?;

    let decided = PurchaseRequestService::new(db)
        .decide(request.id, admin.id, PurchaseDecision::Approve)
        .await?;

    assert_eq!(decided.status, PurchaseStatus::Approved);
    assert_eq!(decided.approved_by, Some(admin.id));
    assert!(decided.approved_at.is_some());

    Ok(())
}

/// Tests rejecting a request and then trying to approve it.
///
/// Expected: first Ok with status `rejected`, then Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_second_decision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let request = factory::create_purchase_request(db, cook.id).await?;
    let service = PurchaseRequestService::new(db);

    let rejected = service
        .decide(request.id, admin.id, PurchaseDecision::Reject)
        .await?;
    assert_eq!(rejected.status, PurchaseStatus::Rejected);

    let result = service
        .decide(request.id, admin.id, PurchaseDecision::Approve)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deciding a request that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_request_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;

    let result = PurchaseRequestService::new(db)
        .decide(5, admin.id, PurchaseDecision::Approve)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
