//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user_id: self.user_id,
            menu_item_id: self.menu_item_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            menu_item_id: entity.menu_item_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Review left by `user_id` for a dish they have received.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub menu_item_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

impl CreateReviewParams {
    pub fn from_dto(user_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            user_id,
            menu_item_id: dto.menu_item_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
