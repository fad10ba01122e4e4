use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::UnknownVariant;

/// How the student pays for the meal. Every variant is debited from the balance;
/// the value is recorded for reporting.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Single,
    Subscription,
    Balance,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Subscription => "subscription",
            Self::Balance => "balance",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "subscription" => Ok(Self::Subscription),
            "balance" => Ok(Self::Balance),
            other => Err(UnknownVariant {
                kind: "payment type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateOrderDto {
    pub menu_item_id: i32,
    pub payment_type: PaymentType,
    pub order_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub menu_item_id: i32,
    pub order_date: NaiveDate,
    pub payment_type: PaymentType,
    pub is_paid: bool,
    pub is_received: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
pub struct OrdersQuery {
    /// Only orders for this date
    pub day: Option<NaiveDate>,
}
