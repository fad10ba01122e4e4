use super::*;

/// Tests creating a dish together with its recipe lines.
///
/// Verifies that one recipe row is stored per ingredient and that the returned
/// domain model carries them in insertion order.
///
/// Expected: Ok(MenuItem) with two ingredients
#[tokio::test]
async fn creates_item_with_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let flour = factory::create_inventory(db).await?;
    let cheese = factory::create_inventory(db).await?;

    let repo = MenuItemRepository::new(db);
    let item = repo
        .create(CreateMenuItemParams {
            name: "Pizza".to_string(),
            description: Some("Cheese and flour".to_string()),
            price: 70.0,
            meal_type: MealType::Lunch,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            is_available: true,
            ingredients: vec![
                RecipeLine {
                    inventory_id: flour.id,
                    quantity_required: 0.2,
                },
                RecipeLine {
                    inventory_id: cheese.id,
                    quantity_required: 0.1,
                },
            ],
        })
        .await?;

    assert_eq!(item.name, "Pizza");
    assert_eq!(item.meal_type, MealType::Lunch);
    assert_eq!(item.ingredients.len(), 2);
    assert_eq!(item.ingredients[0].inventory_id, flour.id);
    assert_eq!(item.ingredients[1].quantity_required, 0.1);

    let stored = repo.find_by_id(item.id).await?;
    assert_eq!(stored, Some(item));

    Ok(())
}

/// Tests creating a dish without ingredients.
///
/// Expected: Ok(MenuItem) with an empty recipe
#[tokio::test]
async fn creates_item_without_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = MenuItemRepository::new(db)
        .create(CreateMenuItemParams {
            name: "Porridge".to_string(),
            description: None,
            price: 30.0,
            meal_type: MealType::Breakfast,
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            is_available: true,
            ingredients: Vec::new(),
        })
        .await?;

    assert!(item.ingredients.is_empty());
    assert_eq!(item.meal_type, MealType::Breakfast);

    Ok(())
}
