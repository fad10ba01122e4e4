use super::*;

/// Tests inserting an order.
///
/// Verifies that new orders are stored as paid and not yet received.
///
/// Expected: Ok(Order) with `is_paid = true`, `is_received = false`
#[tokio::test]
async fn creates_paid_unreceived_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            user_id: user.id,
            menu_item_id: dish.id,
            payment_type: PaymentType::Subscription,
            order_date: day,
        })
        .await?;

    assert!(order.is_paid);
    assert!(!order.is_received);
    assert_eq!(order.payment_type, PaymentType::Subscription);
    assert_eq!(order.order_date, day);

    assert_eq!(repo.find_by_id(order.id).await?, Some(order));

    Ok(())
}

/// Tests listing orders for one user and for one day.
///
/// Expected: `get_by_user` returns only that user's orders, `get_all(Some(day))`
/// only that day's orders
#[tokio::test]
async fn lists_by_user_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let dish = factory::create_menu_item(db).await?;
    let monday = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();

    let alice_monday = factory::order::OrderFactory::new(db, alice.id, dish.id)
        .order_date(monday)
        .build()
        .await?;
    let alice_tuesday = factory::order::OrderFactory::new(db, alice.id, dish.id)
        .order_date(tuesday)
        .build()
        .await?;
    let bob_monday = factory::order::OrderFactory::new(db, bob.id, dish.id)
        .order_date(monday)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    let mut alice_ids: Vec<i32> = repo
        .get_by_user(alice.id)
        .await?
        .iter()
        .map(|o| o.id)
        .collect();
    alice_ids.sort();
    assert_eq!(alice_ids, vec![alice_monday.id, alice_tuesday.id]);

    let monday_ids: Vec<i32> = repo
        .get_all(Some(monday))
        .await?
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(monday_ids, vec![alice_monday.id, bob_monday.id]);

    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
