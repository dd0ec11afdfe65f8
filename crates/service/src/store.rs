//! Entity Store: create / list / get / update / delete for any [`Resource`].
//!
//! Every write runs in its own transaction. Rows carrying `deleted_at` are
//! invisible to every operation regardless of the configured policy.

use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select, TransactionTrait, Value,
};
use tracing::debug;

use configs::DeletePolicy;
use models::audit::Audited;
use models::payload::Payload;
use models::validation::Validate;

use crate::errors::ServiceError;
use crate::resource::Resource;

/// Shared persistence handle. Cheap to clone; safe to use from concurrent requests.
#[derive(Clone, Debug)]
pub struct EntityStore {
    db: DatabaseConnection,
    policy: DeletePolicy,
}

fn live<R: Resource>() -> Select<R::Entity> {
    R::Entity::find().filter(<R::Entity as Audited>::DELETED_AT.is_null())
}

pub(crate) async fn find_live<R: Resource, C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<R::Model>, ServiceError> {
    Ok(live::<R>().filter(<R::Entity as Audited>::ID.eq(id)).one(conn).await?)
}

/// Referenced parent must exist and not be deleted.
pub(crate) async fn ensure_live<R: Resource>(txn: &DatabaseTransaction, id: i32) -> Result<(), ServiceError> {
    match find_live::<R, _>(txn, id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::Conflict(format!("{} {} does not exist", R::NAME, id))),
    }
}

impl EntityStore {
    pub fn new(db: DatabaseConnection, policy: DeletePolicy) -> Self { Self { db, policy } }

    pub fn connection(&self) -> &DatabaseConnection { &self.db }

    pub fn policy(&self) -> DeletePolicy { self.policy }

    /// Validate, check references, insert. Returns the stored row with its new id.
    pub async fn create<R: Resource>(&self, input: R::Input) -> Result<R::Model, ServiceError> {
        input.validate()?;
        let txn = self.db.begin().await?;
        R::check_references(&txn, &input).await?;

        let now: Value = Utc::now().fixed_offset().into();
        let mut am = <R::ActiveModel as ActiveModelBehavior>::new();
        input.apply(&mut am);
        am.set(<R::Entity as Audited>::CREATED_AT, now.clone());
        am.set(<R::Entity as Audited>::UPDATED_AT, now);
        let created = am.insert(&txn).await?;
        txn.commit().await?;
        debug!(resource = R::NAME, id = R::id_of(&created), "row inserted");
        Ok(created)
    }

    /// All live rows in insertion order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R::View>, ServiceError> {
        let rows = live::<R>().order_by_asc(<R::Entity as Audited>::ID).all(&self.db).await?;
        R::expand(&self.db, rows).await
    }

    /// `Ok(None)` when no live row has this id.
    pub async fn get_by_id<R: Resource>(&self, id: i32) -> Result<Option<R::View>, ServiceError> {
        let Some(row) = find_live::<R, _>(&self.db, id).await? else { return Ok(None) };
        Ok(R::expand(&self.db, vec![row]).await?.into_iter().next())
    }

    /// Merge the fields present in `patch` into the stored row.
    ///
    /// The merged row is validated as a whole, but only the supplied fields are
    /// written. A patch that changes nothing returns the row untouched.
    pub async fn update<R: Resource>(&self, id: i32, patch: R::Input) -> Result<R::Model, ServiceError> {
        let txn = self.db.begin().await?;
        let existing = find_live::<R, _>(&txn, id).await?.ok_or_else(|| ServiceError::not_found(R::NAME, id))?;

        let current = R::Input::from_model(&existing);
        let merged = current.clone().merge(&patch);
        if merged == current {
            txn.commit().await?;
            return Ok(existing);
        }
        merged.validate()?;
        R::check_references(&txn, &patch).await?;

        let mut am: R::ActiveModel = existing.into_active_model();
        patch.apply(&mut am);
        am.set(<R::Entity as Audited>::UPDATED_AT, Utc::now().fixed_offset().into());
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Remove a live row according to the configured [`DeletePolicy`].
    pub async fn delete<R: Resource>(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let existing = find_live::<R, _>(&txn, id).await?.ok_or_else(|| ServiceError::not_found(R::NAME, id))?;
        match self.policy {
            DeletePolicy::Soft => {
                let now = Utc::now().fixed_offset();
                let mut am: R::ActiveModel = existing.into_active_model();
                am.set(<R::Entity as Audited>::DELETED_AT, Value::from(Some(now)));
                am.set(<R::Entity as Audited>::UPDATED_AT, now.into());
                am.update(&txn).await?;
            }
            DeletePolicy::Hard => {
                R::Entity::delete_many()
                    .filter(<R::Entity as Audited>::ID.eq(id))
                    .exec(&txn)
                    .await?;
            }
        }
        txn.commit().await?;
        debug!(resource = R::NAME, id, policy = %self.policy, "row deleted");
        Ok(())
    }
}
