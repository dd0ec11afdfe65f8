use sea_orm::EntityTrait;

/// Columns every stored entity carries: store-issued identity plus audit timestamps.
pub trait Audited: EntityTrait {
    const ID: Self::Column;
    const CREATED_AT: Self::Column;
    const UPDATED_AT: Self::Column;
    const DELETED_AT: Self::Column;
}
