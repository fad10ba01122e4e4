use super::*;

/// Tests overwriting a product's stock level.
///
/// Expected: Ok(Some(InventoryItem)) with the new quantity and a refreshed
/// `last_updated`
#[tokio::test]
async fn updates_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stock = factory::create_inventory(db).await?;

    let updated = InventoryRepository::new(db)
        .set_quantity(stock.id, 25.5)
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 25.5);
    assert!(updated.last_updated >= stock.last_updated);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = InventoryRepository::new(db).set_quantity(42, 1.0).await?;

    assert!(updated.is_none());

    Ok(())
}
