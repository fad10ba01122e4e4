use super::*;

/// Tests listing reviews of a single dish.
///
/// Expected: only reviews of the requested dish; `get_all` returns every review
#[tokio::test]
async fn returns_reviews_for_item_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let soup = factory::create_menu_item(db).await?;
    let pizza = factory::create_menu_item(db).await?;

    factory::create_review(db, user.id, soup.id, 4).await?;
    factory::create_review(db, user.id, soup.id, 2).await?;
    factory::create_review(db, user.id, pizza.id, 5).await?;

    let repo = ReviewRepository::new(db);

    let soup_reviews = repo.get_by_menu_item(soup.id).await?;
    assert_eq!(soup_reviews.len(), 2);
    assert!(soup_reviews.iter().all(|r| r.menu_item_id == soup.id));

    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Tests listing reviews of a dish nobody reviewed.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unreviewed_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_canteen_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dish = factory::create_menu_item(db).await?;

    let reviews = ReviewRepository::new(db).get_by_menu_item(dish.id).await?;

    assert!(reviews.is_empty());

    Ok(())
}
