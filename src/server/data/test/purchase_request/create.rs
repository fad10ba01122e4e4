use super::*;

/// Tests creating a purchase request.
///
/// Expected: Ok(PurchaseRequest) with status `pending` and no decision recorded
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;

    let request = PurchaseRequestRepository::new(db)
        .create(CreatePurchaseRequestParams {
            product_name: "Flour".to_string(),
            requested_quantity: 20.0,
            unit: "kg".to_string(),
            requested_by: cook.id,
        })
        .await?;

    assert_eq!(request.status, PurchaseStatus::Pending);
    assert_eq!(request.requested_by, cook.id);
    assert_eq!(request.requested_quantity, 20.0);
    assert!(request.approved_by.is_none());
    assert!(request.approved_at.is_none());

    Ok(())
}

/// Tests filtering purchase requests by status.
///
/// Expected: the status filter returns only matching requests
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let pending = factory::create_purchase_request(db, cook.id).await?;
    factory::purchase_request::PurchaseRequestFactory::new(db, cook.id)
        .status("approved")
        .build()
        .await?;

    let repo = PurchaseRequestRepository::new(db);

    let only_pending = repo.get_all(Some(PurchaseStatus::Pending)).await?;
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].id, pending.id);

    assert_eq!(repo.get_all(None).await?.len(), 2);

    Ok(())
}
