use super::*;

/// Tests marking an order as received exactly once.
///
/// Verifies that the first call updates the order and a second call reports that
/// nothing changed.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn marks_order_received_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, user.id, dish.id).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.mark_received(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.unwrap().is_received);
    assert!(!repo.mark_received(order.id).await?);

    Ok(())
}

/// Tests that `has_received` only counts received orders for the given dish.
///
/// Expected: false for a paid order, true once it is received
#[tokio::test]
async fn has_received_requires_received_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    let other_dish = factory::create_menu_item(db).await?;
    let order = factory::create_order(db, user.id, dish.id).await?;

    let repo = OrderRepository::new(db);
    assert!(!repo.has_received(user.id, dish.id).await?);

    repo.mark_received(order.id).await?;

    assert!(repo.has_received(user.id, dish.id).await?);
    assert!(!repo.has_received(user.id, other_dish.id).await?);

    Ok(())
}
