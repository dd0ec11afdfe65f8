//! Entity-capability trait the store and the generic service are written against.
//!
//! One implementation per stored entity lives in [`crate::resources`].

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, FromQueryResult, IntoActiveModel,
    ModelTrait,
};
use serde::Serialize;

use models::audit::Audited;
use models::payload::Payload;

use crate::errors::ServiceError;

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Entity: Audited<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + IntoActiveModel<Self::ActiveModel>
        + FromQueryResult
        + Serialize
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;
    type Input: Payload<Model = Self::Model, ActiveModel = Self::ActiveModel> + PartialEq;
    /// Shape returned by reads; the model itself unless relations are inlined.
    type View: Serialize + Send + Sync + 'static;

    /// Singular name used in messages, logs and metrics.
    const NAME: &'static str;
    /// Collection path segment.
    const PATH: &'static str;

    fn id_of(model: &Self::Model) -> i32;

    /// Fail with `Conflict` when the payload names a parent that is missing or deleted.
    async fn check_references(_txn: &DatabaseTransaction, _input: &Self::Input) -> Result<(), ServiceError> {
        Ok(())
    }

    /// Turn stored rows into views, in order.
    async fn expand(db: &DatabaseConnection, rows: Vec<Self::Model>) -> Result<Vec<Self::View>, ServiceError>;
}
