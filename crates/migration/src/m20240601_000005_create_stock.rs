//! Create `stock` table.
//!
//! A quantity of one product held at one site. Parent references cascade on
//! update and are set to NULL on delete; stock rows are never cascade-deleted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(pk_auto(Stock::Id))
                    .col(ColumnDef::new(Stock::ProductId).integer().null())
                    .col(ColumnDef::new(Stock::SiteId).integer().null())
                    .col(
                        ColumnDef::new(Stock::Quantity)
                            .double()
                            .not_null()
                            .check(Expr::col(Stock::Quantity).gt(0)),
                    )
                    .col(string_len(Stock::UnitOfMeasure, 32))
                    .col(timestamp_with_time_zone(Stock::CreatedAt))
                    .col(timestamp_with_time_zone(Stock::UpdatedAt))
                    .col(ColumnDef::new(Stock::DeletedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_product")
                            .from(Stock::Table, Stock::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_site")
                            .from(Stock::Table, Stock::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stock::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stock {
    Table,
    Id,
    ProductId,
    SiteId,
    Quantity,
    UnitOfMeasure,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Product { Table, Id }

#[derive(DeriveIden)]
enum Site { Table, Id }
