use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{product_type, site, unit};

use crate::errors::ServiceError;
use crate::resource::Resource;

pub struct ProductTypes;
pub struct Sites;
pub struct Units;

// Name-only entities: nothing to check, nothing to inline.
macro_rules! lookup_resource {
    ($ty:ident, $module:ident, $input:ident, $name:literal, $path:literal) => {
        #[async_trait]
        impl Resource for $ty {
            type Entity = $module::Entity;
            type Model = $module::Model;
            type ActiveModel = $module::ActiveModel;
            type Input = $module::$input;
            type View = $module::Model;

            const NAME: &'static str = $name;
            const PATH: &'static str = $path;

            fn id_of(model: &$module::Model) -> i32 { model.id }

            async fn expand(_db: &DatabaseConnection, rows: Vec<$module::Model>) -> Result<Vec<$module::Model>, ServiceError> {
                Ok(rows)
            }
        }
    };
}

lookup_resource!(ProductTypes, product_type, ProductTypeInput, "product type", "product-types");
lookup_resource!(Sites, site, SiteInput, "site", "sites");
lookup_resource!(Units, unit, UnitInput, "unit", "units");
