use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_menu_item;
