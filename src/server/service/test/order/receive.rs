use super::*;

/// Tests the owner marking their order as received, then trying again.
///
/// Expected: Ok(Order) with `is_received = true`, then Err(OrderError::AlreadyReceived)
#[tokio::test]
async fn owner_receives_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = User::from_entity(factory::create_user(db).await?)?;
    let dish = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, owner.id, dish.id).await?;
    let service = OrderService::new(db);

    let received = service.receive(&owner, order.id).await?;
    assert!(received.is_received);

    let again = service.receive(&owner, order.id).await;
    assert!(matches!(
        again,
        Err(AppError::OrderErr(OrderError::AlreadyReceived(_)))
    ));

    Ok(())
}

/// Tests kitchen staff marking another user's order.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn cook_can_mark_any_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_user(db).await?;
    let cook = User::from_entity(factory::user::create_user_with_role(db, "cook").await?)?;
    let dish = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, student.id, dish.id).await?;

    let received = OrderService::new(db).receive(&cook, order.id).await?;

    assert!(received.is_received);
    assert_eq!(received.user_id, student.id);

    Ok(())
}

/// Tests a student marking someone else's order.
///
/// Expected: Err(AuthError::AccessDenied) and the order left unreceived
#[tokio::test]
async fn other_student_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = User::from_entity(factory::create_user(db).await?)?;
    let dish = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, owner.id, dish.id).await?;

    let result = OrderService::new(db).receive(&stranger, order.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_received);

    Ok(())
}

/// Tests marking an order that does not exist.
///
/// Expected: Err(OrderError::NotFound)
#[tokio::test]
async fn missing_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_user_with_role(db, "admin").await?)?;

    let result = OrderService::new(db).receive(&admin, 77).await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::NotFound(77)))
    ));

    Ok(())
}
