use crate::server::{
    error::AppError,
    model::{order::PlaceOrderParams, user::User},
    service::{order::OrderService, report::ReportService},
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod daily;
