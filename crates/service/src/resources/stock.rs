use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

use models::stock::{self, StockInput, StockView};
use models::{product, site};

use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::resources::{Products, Sites};
use crate::store::{ensure_live, find_live, EntityStore};

pub struct Stocks;

#[async_trait]
impl Resource for Stocks {
    type Entity = stock::Entity;
    type Model = stock::Model;
    type ActiveModel = stock::ActiveModel;
    type Input = StockInput;
    type View = StockView;

    const NAME: &'static str = "stock";
    const PATH: &'static str = "stocks";

    fn id_of(model: &stock::Model) -> i32 { model.id }

    async fn check_references(txn: &DatabaseTransaction, input: &StockInput) -> Result<(), ServiceError> {
        if let Some(id) = input.product_id {
            ensure_live::<Products>(txn, id).await?;
        }
        if let Some(id) = input.site_id {
            ensure_live::<Sites>(txn, id).await?;
        }
        Ok(())
    }

    /// Inline product and site with one query each. Deleted parents show as `null`.
    async fn expand(db: &DatabaseConnection, rows: Vec<stock::Model>) -> Result<Vec<StockView>, ServiceError> {
        let product_ids: Vec<i32> = rows.iter().filter_map(|s| s.product_id).collect();
        let site_ids: Vec<i32> = rows.iter().filter_map(|s| s.site_id).collect();

        let products: HashMap<i32, product::Model> = if product_ids.is_empty() {
            HashMap::new()
        } else {
            product::Entity::find()
                .filter(product::Column::Id.is_in(product_ids))
                .filter(product::Column::DeletedAt.is_null())
                .all(db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };
        let sites: HashMap<i32, site::Model> = if site_ids.is_empty() {
            HashMap::new()
        } else {
            site::Entity::find()
                .filter(site::Column::Id.is_in(site_ids))
                .filter(site::Column::DeletedAt.is_null())
                .all(db)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|stock| StockView {
                product: stock.product_id.and_then(|id| products.get(&id).cloned()),
                site: stock.site_id.and_then(|id| sites.get(&id).cloned()),
                stock,
            })
            .collect())
    }
}

impl EntityStore {
    /// Live stocks of a live product, in insertion order. `Ok(None)` when the product is gone.
    pub async fn stocks_of_product(&self, product_id: i32) -> Result<Option<Vec<StockView>>, ServiceError> {
        let Some(product) = find_live::<Products, _>(self.connection(), product_id).await? else {
            return Ok(None);
        };
        let rows = product
            .find_related(stock::Entity)
            .filter(stock::Column::DeletedAt.is_null())
            .order_by_asc(stock::Column::Id)
            .all(self.connection())
            .await?;
        Stocks::expand(self.connection(), rows).await.map(Some)
    }
}
