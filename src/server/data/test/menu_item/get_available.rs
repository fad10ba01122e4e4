use super::*;

/// Tests that withdrawn dishes are excluded from the menu.
///
/// Expected: Ok(Vec) containing only the available dish, with its recipe
#[tokio::test]
async fn excludes_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (dish, ingredients) =
        factory::helpers::create_dish_with_ingredients(db, &[(10.0, 0.5)]).await?;
    factory::menu_item::MenuItemFactory::new(db)
        .available(false)
        .build()
        .await?;

    let items = MenuItemRepository::new(db)
        .get_available(MenuFilter::default())
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, dish.id);
    assert_eq!(items[0].ingredients.len(), 1);
    assert_eq!(items[0].ingredients[0].inventory_id, ingredients[0].0.id);

    Ok(())
}

/// Tests filtering the menu by date and meal type.
///
/// Expected: each filter narrows the list to the matching dishes
#[tokio::test]
async fn filters_by_day_and_meal_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let monday = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();

    let breakfast = factory::menu_item::MenuItemFactory::new(db)
        .date(monday)
        .meal_type("breakfast")
        .build()
        .await?;
    let lunch = factory::menu_item::MenuItemFactory::new(db)
        .date(monday)
        .meal_type("lunch")
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db)
        .date(tuesday)
        .meal_type("lunch")
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);

    let on_monday = repo
        .get_available(MenuFilter {
            day: Some(monday),
            meal_type: None,
        })
        .await?;
    let ids: Vec<i32> = on_monday.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![breakfast.id, lunch.id]);

    let monday_lunch = repo
        .get_available(MenuFilter {
            day: Some(monday),
            meal_type: Some(MealType::Lunch),
        })
        .await?;
    assert_eq!(monday_lunch.len(), 1);
    assert_eq!(monday_lunch[0].id, lunch.id);

    let all = repo.get_available(MenuFilter::default()).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
