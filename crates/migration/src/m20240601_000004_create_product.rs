//! Create `product` table.
//!
//! References to type, unit and site are optional and are detached (set to NULL)
//! when the referenced row is removed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_len(Product::Name, 255))
                    .col(text(Product::Function))
                    .col(ColumnDef::new(Product::ProductTypeId).integer().null())
                    .col(ColumnDef::new(Product::UnitId).integer().null())
                    .col(ColumnDef::new(Product::SiteId).integer().null())
                    .col(timestamp_with_time_zone(Product::CreatedAt))
                    .col(timestamp_with_time_zone(Product::UpdatedAt))
                    .col(ColumnDef::new(Product::DeletedAt).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_product_type")
                            .from(Product::Table, Product::ProductTypeId)
                            .to(ProductType::Table, ProductType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_unit")
                            .from(Product::Table, Product::UnitId)
                            .to(Unit::Table, Unit::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_site")
                            .from(Product::Table, Product::SiteId)
                            .to(Site::Table, Site::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    Function,
    ProductTypeId,
    UnitId,
    SiteId,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum ProductType { Table, Id }

#[derive(DeriveIden)]
enum Unit { Table, Id }

#[derive(DeriveIden)]
enum Site { Table, Id }
