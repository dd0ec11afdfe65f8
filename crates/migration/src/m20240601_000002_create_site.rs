//! Create `site` table.
//!
//! Physical location holding stock.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(pk_auto(Site::Id))
                    .col(string_len(Site::Name, 255))
                    .col(timestamp_with_time_zone(Site::CreatedAt))
                    .col(timestamp_with_time_zone(Site::UpdatedAt))
                    .col(ColumnDef::new(Site::DeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Site::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Site { Table, Id, Name, CreatedAt, UpdatedAt, DeletedAt }
