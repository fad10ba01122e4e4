use super::*;

/// Tests adding a dish with a recipe.
///
/// Expected: Ok(MenuItem) listed on the menu for its date
#[tokio::test]
async fn creates_dish_listed_on_menu() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flour = factory::create_inventory(db).await?;
    let service = MenuService::new(db);

    let item = service
        .create(pizza(vec![RecipeLine {
            inventory_id: flour.id,
            quantity_required: 0.2,
        }]))
        .await?;

    let menu = service
        .list(MenuFilter {
            day: Some(item.date),
            meal_type: None,
        })
        .await?;

    assert_eq!(menu, vec![item]);

    Ok(())
}

/// Tests that an ingredient referencing unknown inventory aborts creation.
///
/// Verifies that neither the dish nor any recipe line is stored.
///
/// Expected: Err(AppError::BadRequest) and empty menu and recipe tables
#[tokio::test]
async fn rejects_unknown_inventory_and_stores_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flour = factory::create_inventory(db).await?;

    let result = MenuService::new(db)
        .create(pizza(vec![
            RecipeLine {
                inventory_id: flour.id,
                quantity_required: 0.2,
            },
            RecipeLine {
                inventory_id: 999,
                quantity_required: 0.1,
            },
        ]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(entity::prelude::MenuItem::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Recipe::find().count(db).await?, 0);

    Ok(())
}

/// Tests validation of price and ingredient quantities.
///
/// Expected: Err(AppError::BadRequest) for a negative price and for a zero quantity
#[tokio::test]
async fn rejects_invalid_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flour = factory::create_inventory(db).await?;
    let service = MenuService::new(db);

    let mut negative_price = pizza(Vec::new());
    negative_price.price = -1.0;
    let zero_quantity = pizza(vec![RecipeLine {
        inventory_id: flour.id,
        quantity_required: 0.0,
    }]);

    assert!(matches!(
        service.create(negative_price).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(zero_quantity).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
