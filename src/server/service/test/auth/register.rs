use super::*;

fn params(username: &str, password: &str) -> RegisterUserParams {
    RegisterUserParams {
        username: username.to_string(),
        password: password.to_string(),
        email: None,
        role: Role::Student,
        food_preferences: Some("аллергия на орехи".to_string()),
    }
}

/// Tests registering a new student.
///
/// Verifies that the registration bonus becomes the starting balance and that the
/// stored password is a bcrypt hash of the submitted one.
///
/// Expected: Ok(User) with balance equal to the bonus
#[tokio::test]
async fn registers_user_with_bonus() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (hasher, tokens) = services();

    let user = AuthService::new(db, &hasher, &tokens)
        .register(params("  alice ", "secret"), 100.0)
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.balance, 100.0);
    assert_eq!(user.role, Role::Student);
    assert!(hasher.verify("secret", &user.password_hash)?);

    Ok(())
}

/// Tests that a taken username is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
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
        .register(params("alice", "secret"), 100.0)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that blank credentials are rejected before touching the database.
///
/// Expected: Err(AppError::BadRequest) for an empty username and an empty password
#[tokio::test]
async fn rejects_empty_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (hasher, tokens) = services();
    let service = AuthService::new(db, &hasher, &tokens);

    let empty_name = service.register(params("   ", "secret"), 100.0).await;
    let empty_password = service.register(params("alice", ""), 100.0).await;

    assert!(matches!(empty_name, Err(AppError::BadRequest(_))));
    assert!(matches!(empty_password, Err(AppError::BadRequest(_))));

    Ok(())
}
