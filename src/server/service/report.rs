//! Admin reports over orders.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::report::{Attendance, DailyReport},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the order and revenue report for one day.
    pub async fn daily(&self, day: NaiveDate) -> Result<DailyReport, AppError> {
        let order_repo = OrderRepository::new(self.db);

        Ok(DailyReport {
            date: day,
            total_orders_count: order_repo.count_paid_on(day).await?,
            received_meals_count: order_repo.count_received_on(day).await?,
            total_revenue: order_repo.revenue_on(day).await?,
        })
    }

    /// Counts meals still to be handed out and meals already received.
    pub async fn attendance(&self) -> Result<Attendance, AppError> {
        let order_repo = OrderRepository::new(self.db);

        Ok(Attendance {
            waiting_count: order_repo.count_waiting().await?,
            fed_count: order_repo.count_received().await?,
        })
    }
}
