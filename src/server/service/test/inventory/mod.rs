use crate::server::{
    error::AppError, model::inventory::CreateInventoryParams, service::inventory::InventoryService,
};
use test_utils::{builder::TestBuilder, factory};
