//! Report domain models.

use chrono::NaiveDate;

use crate::model::admin::{AttendanceDto, DailyReportDto};

/// Order and revenue figures for a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// Paid orders for the day.
    pub total_orders_count: u64,
    /// Orders for the day whose meal was handed out.
    pub received_meals_count: u64,
    /// Sum of dish prices over the day's paid orders.
    pub total_revenue: f64,
}

impl DailyReport {
    /// Received meals as a percentage of paid orders, 0 when there are no orders.
    pub fn attendance_rate(&self) -> f64 {
        if self.total_orders_count == 0 {
            return 0.0;
        }

        self.received_meals_count as f64 / self.total_orders_count as f64 * 100.0
    }

    pub fn into_dto(self) -> DailyReportDto {
        DailyReportDto {
            attendance_rate: self.attendance_rate(),
            date: self.date,
            total_orders_count: self.total_orders_count,
            received_meals_count: self.received_meals_count,
            total_revenue: self.total_revenue,
        }
    }
}

/// Current split between students still waiting for their meal and those already fed.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub waiting_count: u64,
    pub fed_count: u64,
}

impl Attendance {
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            waiting_count: self.waiting_count,
            fed_count: self.fed_count,
            total_attendance: self.waiting_count + self.fed_count,
        }
    }
}
