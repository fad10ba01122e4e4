use super::*;

/// Tests authenticating without any permission requirement.
///
/// Expected: Ok(User) for any valid token
#[tokio::test]
async fn authenticates_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let student = factory::create_user(db).await?;
    let headers = headers_for(&tokens, student.clone());

    let user = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(user.id, student.id);
    assert_eq!(user.role, Role::Student);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let student = factory::create_user(db).await?;
    let headers = headers_for(&TokenService::new("other-secret", 60), student);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let student = factory::create_user(db).await?;
    let headers = headers_for(&tokens, student.clone());
    entity::prelude::User::delete_by_id(student.id)
        .exec(db)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the kitchen permission for each role.
///
/// Expected: students denied, cooks and admins allowed
#[tokio::test]
async fn kitchen_permission_allows_cook_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    for (role, allowed) in [("student", false), ("cook", true), ("admin", true)] {
        let user = factory::user::create_user_with_role(db, role).await?;
        let headers = headers_for(&tokens, user);

        let result = AuthGuard::new(db, &tokens, &headers)
            .require(&[Permission::Kitchen])
            .await;

        if allowed {
            assert!(result.is_ok(), "{} should pass the kitchen check", role);
        } else {
            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
            ));
        }
    }

    Ok(())
}

/// Tests the admin permission against a cook.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn admin_permission_denies_cook() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret", 60);

    let cook = factory::user::create_user_with_role(db, "cook").await?;
    let headers = headers_for(&tokens, cook);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
