use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::UnknownVariant;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Pending,
    Approved,
    Rejected,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurchaseStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownVariant {
                kind: "purchase status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreatePurchaseRequestDto {
    pub product_name: String,
    pub requested_quantity: f64,
    pub unit: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PurchaseRequestDto {
    pub id: i32,
    pub product_name: String,
    pub requested_quantity: f64,
    pub unit: String,
    pub status: PurchaseStatus,
    pub requested_by: i32,
    pub approved_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
pub struct PurchaseRequestQuery {
    /// Only requests with this status
    pub status: Option<PurchaseStatus>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateInventoryDto {
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct InventoryDto {
    pub id: i32,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
pub struct UpdateInventoryQuery {
    /// New stock level
    pub quantity: f64,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
pub struct DailyReportQuery {
    /// Report date, today (UTC) when omitted
    pub day: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct DailyReportDto {
    pub date: NaiveDate,
    pub total_orders_count: u64,
    pub received_meals_count: u64,
    pub total_revenue: f64,
    /// Received meals as a percentage of paid orders
    pub attendance_rate: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AttendanceDto {
    pub waiting_count: u64,
    pub fed_count: u64,
    pub total_attendance: u64,
}
