use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests logging in with correct credentials.
///
/// Verifies that the issued token names the user and carries their role.
///
/// Expected: Ok(token) that verifies to the user's ID
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (hasher, tokens) = services();

    let cook = factory::user::UserFactory::new(db)
        .username("chef")
        .role("cook")
        .build()
        .await?;

    let token = AuthService::new(db, &hasher, &tokens)
        .login("chef", DEFAULT_PASSWORD)
        .await?;

    let claims = tokens.verify(&token)?;
    assert_eq!(claims.user_id()?, cook.id);
    assert_eq!(claims.role, Role::Cook);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (hasher, tokens) = services();

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let result = AuthService::new(db, &hasher, &tokens)
        .login("alice", "wrong-password")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as an unknown user.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (hasher, tokens) = services();

    let result = AuthService::new(db, &hasher, &tokens)
        .login("nobody", DEFAULT_PASSWORD)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unknown username still goes through bcrypt.
///
/// A hasher with a cost bcrypt refuses makes the hashing step observable.
///
/// Expected: Err(AppError::BcryptErr) instead of an early InvalidCredentials
#[tokio::test]
async fn hashes_even_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, tokens) = services();
    let hasher = PasswordHasher::new(1);

    let result = AuthService::new(db, &hasher, &tokens)
        .login("nobody", DEFAULT_PASSWORD)
        .await;

    assert!(matches!(result, Err(AppError::BcryptErr(_))));

    Ok(())
}
