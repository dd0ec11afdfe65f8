//! Products: what is stocked. A product optionally belongs to one type, one
//! unit and one site, and has many stock records.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::audit::Audited;
use crate::payload::{double_option, pick, Payload};
use crate::validation::{Validate, Violations};
use crate::{product_type, site, stock, unit};

pub const NAME_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub function: String,
    #[serde(rename = "productTypeID")]
    pub product_type_id: Option<i32>,
    #[serde(rename = "unitID")]
    pub unit_id: Option<i32>,
    #[serde(rename = "siteID")]
    pub site_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProductType, Unit, Site, Stock }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductType => Entity::belongs_to(product_type::Entity)
                .from(Column::ProductTypeId)
                .to(product_type::Column::Id)
                .into(),
            Relation::Unit => Entity::belongs_to(unit::Entity)
                .from(Column::UnitId)
                .to(unit::Column::Id)
                .into(),
            Relation::Site => Entity::belongs_to(site::Entity)
                .from(Column::SiteId)
                .to(site::Column::Id)
                .into(),
            Relation::Stock => Entity::has_many(stock::Entity).into(),
        }
    }
}

impl Related<product_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProductType.def() }
}

impl Related<unit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Unit.def() }
}

impl Related<site::Entity> for Entity {
    fn to() -> RelationDef { Relation::Site.def() }
}

impl Related<stock::Entity> for Entity {
    fn to() -> RelationDef { Relation::Stock.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Entity {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Column = Column::DeletedAt;
}

/// Create body / partial update for a product.
///
/// Reference fields accept an explicit `null` to detach the product from its
/// type, unit or site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: Option<String>,
    pub function: Option<String>,
    #[serde(rename = "productTypeID", deserialize_with = "double_option")]
    pub product_type_id: Option<Option<i32>>,
    #[serde(rename = "unitID", deserialize_with = "double_option")]
    pub unit_id: Option<Option<i32>>,
    #[serde(rename = "siteID", deserialize_with = "double_option")]
    pub site_id: Option<Option<i32>>,
}

impl Validate for ProductInput {
    fn check(&self, v: &mut Violations) {
        v.non_empty("name", self.name.as_deref());
        v.max_len("name", self.name.as_deref(), NAME_MAX_LEN);
        v.non_empty("function", self.function.as_deref());
    }
}

impl Payload for ProductInput {
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: &Model) -> Self {
        Self {
            name: Some(model.name.clone()),
            function: Some(model.function.clone()),
            product_type_id: Some(model.product_type_id),
            unit_id: Some(model.unit_id),
            site_id: Some(model.site_id),
        }
    }

    fn merge(self, patch: &Self) -> Self {
        Self {
            name: pick(self.name, &patch.name),
            function: pick(self.function, &patch.function),
            product_type_id: pick(self.product_type_id, &patch.product_type_id),
            unit_id: pick(self.unit_id, &patch.unit_id),
            site_id: pick(self.site_id, &patch.site_id),
        }
    }

    fn apply(&self, am: &mut ActiveModel) {
        if let Some(n) = &self.name { am.name = Set(n.clone()); }
        if let Some(f) = &self.function { am.function = Set(f.clone()); }
        if let Some(t) = self.product_type_id { am.product_type_id = Set(t); }
        if let Some(u) = self.unit_id { am.unit_id = Set(u); }
        if let Some(s) = self.site_id { am.site_id = Set(s); }
    }
}
