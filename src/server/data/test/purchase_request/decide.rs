use super::*;

/// Tests approving a pending request.
///
/// Expected: Ok(true) and the approver and decision time stored
#[tokio::test]
async fn records_decision_on_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let request = factory::create_purchase_request(db, cook.id).await?;

    let repo = PurchaseRequestRepository::new(db);
    let decided = repo
        .decide(request.id, PurchaseStatus::Approved, admin.id, Utc::now())
        .await?;

    assert!(decided);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, PurchaseStatus::Approved);
    assert_eq!(stored.approved_by, Some(admin.id));
    assert!(stored.approved_at.is_some());

    Ok(())
}

/// Tests that a request can only be decided once.
///
/// Expected: Ok(false) for the second decision and the first one kept
#[tokio::test]
async fn refuses_already_decided_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let request = factory::create_purchase_request(db, cook.id).await?;

    let repo = PurchaseRequestRepository::new(db);
    repo.decide(request.id, PurchaseStatus::Rejected, admin.id, Utc::now())
        .await?;

    let decided_again = repo
        .decide(request.id, PurchaseStatus::Approved, admin.id, Utc::now())
        .await?;

    assert!(!decided_again);
    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, PurchaseStatus::Rejected);

    Ok(())
}
