use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the order checks, each mapped to the status the client acts on.
#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    /// Menu item does not exist or has been withdrawn from sale.
    #[error("Menu item {0} is not available")]
    ItemUnavailable(i32),

    /// The user's food preferences and the dish description share an allergen.
    #[error("Warning! The dish contains an allergen: {0}")]
    AllergenDetected(String),

    /// A recipe ingredient has less stock than one serving needs.
    #[error("The dish cannot be prepared: '{0}' has run out")]
    OutOfStock(String),

    /// User balance is below the dish price.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Balance or stock changed between the check and the update.
    #[error("Order could not be completed because stock or balance changed, please try again")]
    Conflict,

    #[error("Order {0} not found")]
    NotFound(i32),

    #[error("Meal for order {0} has already been received")]
    AlreadyReceived(i32),
}

/// Converts order errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - `ItemUnavailable`, `NotFound`
/// - 400 Bad Request - `AllergenDetected`, `OutOfStock`, `AlreadyReceived`
/// - 402 Payment Required - `InsufficientFunds`
/// - 409 Conflict - `Conflict`
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ItemUnavailable(_) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AllergenDetected(_) | Self::OutOfStock(_) | Self::AlreadyReceived(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InsufficientFunds => StatusCode::PAYMENT_REQUIRED,
            Self::Conflict => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
