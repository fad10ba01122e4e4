use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string(MenuItem::Name))
                    .col(text_null(MenuItem::Description))
                    .col(double(MenuItem::Price))
                    .col(string(MenuItem::MealType))
                    .col(date(MenuItem::Date))
                    .col(boolean(MenuItem::IsAvailable).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_date")
                    .table(MenuItem::Table)
                    .col(MenuItem::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    Name,
    Description,
    Price,
    MealType,
    Date,
    IsAvailable,
}
