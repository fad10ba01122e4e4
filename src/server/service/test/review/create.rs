use super::*;

/// Tests reviewing a dish the user has received.
///
/// Expected: Ok(Review) listed for the dish
#[tokio::test]
async fn creates_review_after_received_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    factory::order::OrderFactory::new(db, user.id, dish.id)
        .received(true)
        .build()
        .await?;
    let service = ReviewService::new(db);

    let created = service.create(review(user.id, dish.id, 5)).await?;

    assert_eq!(created.rating, 5);
    assert_eq!(service.list_for_item(dish.id).await?, vec![created]);

    Ok(())
}

/// Tests reviewing a dish that was ordered but not yet received.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_review_without_received_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    factory::create_order(db, user.id, dish.id).await?;

    let result = ReviewService::new(db)
        .create(review(user.id, dish.id, 4))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests ratings outside 1..=5.
///
/// Expected: Err(AppError::BadRequest) for 0 and 6
#[tokio::test]
async fn rejects_rating_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    factory::order::OrderFactory::new(db, user.id, dish.id)
        .received(true)
        .build()
        .await?;
    let service = ReviewService::new(db);

    for rating in [0, 6] {
        let result = service.create(review(user.id, dish.id, rating)).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests reviewing a dish that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_dish() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReviewService::new(db).create(review(user.id, 999, 3)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
