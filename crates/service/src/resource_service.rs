//! One generic service for every resource: `get`, `create`, `update`, `delete`.
//!
//! Each call is counted in `stock_manager_operations_total` and store failures
//! are logged here, so callers only need to map the returned [`ServiceError`].

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use common::metrics::record_operation;
use configs::DeletePolicy;
use models::stock::{StockInput, StockView};

use crate::errors::ServiceError;
use crate::resource::Resource;
use crate::resources::{Products, Stocks};
use crate::store::EntityStore;

/// Result of `get`: the whole collection, or the one row asked for.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Fetched<V> {
    Many(Vec<V>),
    One(V),
}

/// Acknowledgement returned by `delete`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deleted {
    pub id: i32,
    pub resource: &'static str,
    pub policy: DeletePolicy,
}

pub struct ResourceService<R: Resource> {
    store: Arc<EntityStore>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self { Self::new(self.store.clone()) }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<EntityStore>) -> Self { Self { store, _resource: PhantomData } }

    /// `None` lists every live row; `Some(id)` fetches one or fails with `NotFound`.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get(&self, id: Option<i32>) -> Result<Fetched<R::View>, ServiceError> {
        let result = match id {
            None => self.store.list::<R>().await.map(Fetched::Many),
            Some(id) => match self.store.get_by_id::<R>(id).await {
                Ok(Some(view)) => Ok(Fetched::One(view)),
                Ok(None) => Err(ServiceError::not_found(R::NAME, id)),
                Err(e) => Err(e),
            },
        };
        observe::<R, _>("get", result)
    }

    #[instrument(skip(self, input), fields(resource = R::NAME))]
    pub async fn create(&self, input: R::Input) -> Result<R::Model, ServiceError> {
        let result = self.store.create::<R>(input).await;
        if let Ok(created) = &result {
            info!(id = R::id_of(created), "created");
        }
        observe::<R, _>("create", result)
    }

    #[instrument(skip(self, patch), fields(resource = R::NAME))]
    pub async fn update(&self, id: i32, patch: R::Input) -> Result<R::Model, ServiceError> {
        let result = self.store.update::<R>(id, patch).await;
        observe::<R, _>("update", result)
    }

    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: i32) -> Result<Deleted, ServiceError> {
        let policy = self.store.policy();
        let result = self
            .store
            .delete::<R>(id)
            .await
            .map(|()| Deleted { id, resource: R::NAME, policy });
        observe::<R, _>("delete", result)
    }
}

impl ResourceService<Stocks> {
    /// Stocks held for one product. Fails with `NotFound` when the product is gone.
    #[instrument(skip(self), fields(resource = "stock"))]
    pub async fn list_for_product(&self, product_id: i32) -> Result<Vec<StockView>, ServiceError> {
        let result = match self.store.stocks_of_product(product_id).await {
            Ok(Some(stocks)) => Ok(stocks),
            Ok(None) => Err(ServiceError::not_found(Products::NAME, product_id)),
            Err(e) => Err(e),
        };
        observe::<Stocks, _>("get", result)
    }

    /// Create a stock for the product named in the path; the path wins over any `productID` in the body.
    #[instrument(skip(self, input), fields(resource = "stock"))]
    pub async fn create_for_product(&self, product_id: i32, mut input: StockInput) -> Result<models::stock::Model, ServiceError> {
        match self.store.get_by_id::<Products>(product_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return observe::<Stocks, _>("create", Err(ServiceError::not_found(Products::NAME, product_id))),
            Err(e) => return observe::<Stocks, _>("create", Err(e)),
        }
        input.product_id = Some(product_id);
        self.create(input).await
    }
}

fn observe<R: Resource, T>(operation: &'static str, result: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match &result {
        Ok(_) => record_operation(R::NAME, operation, "ok"),
        Err(e) => {
            record_operation(R::NAME, operation, e.category());
            match e {
                ServiceError::Db(_) => error!(resource = R::NAME, operation, error = %e, "store failure"),
                _ => warn!(resource = R::NAME, operation, error = %e, "request rejected"),
            }
        }
    }
    result
}
