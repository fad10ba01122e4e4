use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_menu_item_table::MenuItem,
    m20260105_000003_create_inventory_table::Inventory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::MenuItemId))
                    .col(integer(Recipe::InventoryId))
                    .col(double(Recipe::QuantityRequired))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_menu_item_id")
                            .from(Recipe::Table, Recipe::MenuItemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_inventory_id")
                            .from(Recipe::Table, Recipe::InventoryId)
                            .to(Inventory::Table, Inventory::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    MenuItemId,
    InventoryId,
    QuantityRequired,
}
