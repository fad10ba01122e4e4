//! Review service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{menu_item::MenuItemRepository, order::OrderRepository, review::ReviewRepository},
    error::AppError,
    model::review::{CreateReviewParams, Review},
};

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a dish the user has received.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5, or the user never received
    ///   the dish
    /// - `Err(AppError::NotFound)` - Dish does not exist
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        if !MenuItemRepository::new(self.db)
            .exists(params.menu_item_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Menu item {} not found",
                params.menu_item_id
            )));
        }

        if !OrderRepository::new(self.db)
            .has_received(params.user_id, params.menu_item_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "You can only review dishes you have received".to_string(),
            ));
        }

        Ok(ReviewRepository::new(self.db).create(params).await?)
    }

    pub async fn list_for_item(&self, menu_item_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_menu_item(menu_item_id)
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }
}
