use super::*;

/// Tests deducting stock that still holds the expected quantity.
///
/// Expected: Ok(true) and the stored quantity reduced
#[tokio::test]
async fn deducts_when_quantity_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stock = factory::inventory::InventoryFactory::new(db)
        .quantity(10.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let deducted = repo.deduct(stock.id, 10.0, 2.5).await?;

    assert!(deducted);
    assert_eq!(repo.find_by_id(stock.id).await?.unwrap().quantity, 7.5);

    Ok(())
}

/// Tests that a stale expected quantity leaves stock untouched.
///
/// Expected: Ok(false) and the stored quantity unchanged
#[tokio::test]
async fn refuses_when_quantity_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stock = factory::inventory::InventoryFactory::new(db)
        .quantity(3.0)
        .build()
        .await?;

    let repo = InventoryRepository::new(db);
    let deducted = repo.deduct(stock.id, 10.0, 2.5).await?;

    assert!(!deducted);
    assert_eq!(repo.find_by_id(stock.id).await?.unwrap().quantity, 3.0);

    Ok(())
}
