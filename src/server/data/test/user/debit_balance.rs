use super::*;

/// Tests debiting a balance that still holds the expected value.
///
/// Expected: Ok(true) and the stored balance reduced by the amount
#[tokio::test]
async fn debits_when_balance_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .balance(100.0)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let debited = repo.debit_balance(user.id, 100.0, 30.0).await?;

    assert!(debited);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.balance, 70.0);

    Ok(())
}

/// Tests that a stale expected balance leaves the account untouched.
///
/// Simulates a concurrent debit having changed the balance after it was read.
///
/// Expected: Ok(false) and the stored balance unchanged
#[tokio::test]
async fn refuses_when_balance_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .balance(40.0)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let debited = repo.debit_balance(user.id, 100.0, 30.0).await?;

    assert!(!debited);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.balance, 40.0);

    Ok(())
}
