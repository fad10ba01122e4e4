pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_menu_item_table;
mod m20260105_000003_create_inventory_table;
mod m20260105_000004_create_recipe_table;
mod m20260105_000005_create_orders_table;
mod m20260105_000006_create_review_table;
mod m20260105_000007_create_purchase_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_menu_item_table::Migration),
            Box::new(m20260105_000003_create_inventory_table::Migration),
            Box::new(m20260105_000004_create_recipe_table::Migration),
            Box::new(m20260105_000005_create_orders_table::Migration),
            Box::new(m20260105_000006_create_review_table::Migration),
            Box::new(m20260105_000007_create_purchase_request_table::Migration),
        ]
    }
}
