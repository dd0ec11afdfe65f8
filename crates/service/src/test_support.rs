#![cfg(test)]
use std::sync::Arc;

use configs::DeletePolicy;
use models::product::ProductInput;
use models::product_type::ProductTypeInput;
use models::site::SiteInput;
use models::stock::StockInput;
use models::unit::UnitInput;

use crate::store::EntityStore;

/// Fresh migrated in-memory database wrapped in a store. Nothing is shared between calls.
pub async fn memory_store(policy: DeletePolicy) -> Arc<EntityStore> {
    let db = models::db::connect_in_memory().await.expect("in-memory db");
    Arc::new(EntityStore::new(db, policy))
}

pub fn product_type(name: &str) -> ProductTypeInput { ProductTypeInput { name: Some(name.into()) } }

pub fn site(name: &str) -> SiteInput { SiteInput { name: Some(name.into()) } }

pub fn unit(name: &str) -> UnitInput { UnitInput { name: Some(name.into()) } }

pub fn product(name: &str) -> ProductInput {
    ProductInput { name: Some(name.into()), function: Some("fastening".into()), ..ProductInput::default() }
}

pub fn stock(product_id: i32, site_id: i32, quantity: f64) -> StockInput {
    StockInput {
        product_id: Some(product_id),
        site_id: Some(site_id),
        quantity: Some(quantity),
        unit_of_measure: Some("kg".into()),
    }
}
