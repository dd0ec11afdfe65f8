use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Stock: lookups by parent (nested product stocks, eager expansion)
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_product")
                    .table(Stock::Table)
                    .col(Stock::ProductId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_site")
                    .table(Stock::Table)
                    .col(Stock::SiteId)
                    .to_owned(),
            )
            .await?;

        // Product: FK columns
        manager
            .create_index(
                Index::create()
                    .name("idx_product_type")
                    .table(Product::Table)
                    .col(Product::ProductTypeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_product_site")
                    .table(Product::Table)
                    .col(Product::SiteId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_site").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_type").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_stock_site").table(Stock::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_stock_product").table(Stock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stock { Table, ProductId, SiteId }

#[derive(DeriveIden)]
enum Product { Table, ProductTypeId, SiteId }
