use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use models::product::{self, ProductInput};

use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::resources::{ProductTypes, Sites, Units};
use crate::store::ensure_live;

pub struct Products;

#[async_trait]
impl Resource for Products {
    type Entity = product::Entity;
    type Model = product::Model;
    type ActiveModel = product::ActiveModel;
    type Input = ProductInput;
    type View = product::Model;

    const NAME: &'static str = "product";
    const PATH: &'static str = "products";

    fn id_of(model: &product::Model) -> i32 { model.id }

    /// An explicit `null` detaches and needs no check.
    async fn check_references(txn: &DatabaseTransaction, input: &ProductInput) -> Result<(), ServiceError> {
        if let Some(Some(id)) = input.product_type_id {
            ensure_live::<ProductTypes>(txn, id).await?;
        }
        if let Some(Some(id)) = input.unit_id {
            ensure_live::<Units>(txn, id).await?;
        }
        if let Some(Some(id)) = input.site_id {
            ensure_live::<Sites>(txn, id).await?;
        }
        Ok(())
    }

    async fn expand(_db: &DatabaseConnection, rows: Vec<product::Model>) -> Result<Vec<product::Model>, ServiceError> {
        Ok(rows)
    }
}
