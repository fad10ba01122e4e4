use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(PurchaseRequest::Id))
                    .col(string(PurchaseRequest::ProductName))
                    .col(double(PurchaseRequest::RequestedQuantity))
                    .col(string(PurchaseRequest::Unit))
                    .col(integer(PurchaseRequest::RequestedBy))
                    .col(string(PurchaseRequest::Status).default("pending"))
                    .col(integer_null(PurchaseRequest::ApprovedBy))
                    .col(
                        timestamp_with_time_zone(PurchaseRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(PurchaseRequest::ApprovedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_request_requested_by")
                            .from(PurchaseRequest::Table, PurchaseRequest::RequestedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_request_approved_by")
                            .from(PurchaseRequest::Table, PurchaseRequest::ApprovedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PurchaseRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PurchaseRequest {
    Table,
    Id,
    ProductName,
    RequestedQuantity,
    Unit,
    RequestedBy,
    Status,
    ApprovedBy,
    CreatedAt,
    ApprovedAt,
}
