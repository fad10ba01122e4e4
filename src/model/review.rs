use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateReviewDto {
    pub menu_item_id: i32,
    /// 1 to 5
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
