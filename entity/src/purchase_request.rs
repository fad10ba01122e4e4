use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    #[sea_orm(column_type = "Double")]
    pub requested_quantity: f64,
    pub unit: String,
    pub requested_by: i32,
    pub status: String,
    pub approved_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub approved_at: Option<DateTimeUtc>,
}

/// Both relations target `user`, so neither gets a `Related` impl; join through
/// `Relation::Requester.def()` or `Relation::Approver.def()` explicitly.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequestedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Requester,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ApprovedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Approver,
}

impl ActiveModelBehavior for ActiveModel {}
