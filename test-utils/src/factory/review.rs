//! Review factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review without a comment.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    menu_item_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        menu_item_id: ActiveValue::Set(menu_item_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
