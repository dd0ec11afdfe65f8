//! Create `product_type` table.
//!
//! Category a product belongs to (fertilizer, seed, ...).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductType::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductType::Id))
                    .col(string_len(ProductType::Name, 255))
                    .col(timestamp_with_time_zone(ProductType::CreatedAt))
                    .col(timestamp_with_time_zone(ProductType::UpdatedAt))
                    .col(ColumnDef::new(ProductType::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductType::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductType { Table, Id, Name, CreatedAt, UpdatedAt, DeletedAt }
