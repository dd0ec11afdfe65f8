//! Units a product is counted in.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::audit::Audited;
use crate::payload::{pick, Payload};
use crate::product;
use crate::validation::{Validate, Violations};

pub const NAME_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "unit")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Product => Entity::has_many(product::Entity).into() }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Entity {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Column = Column::DeletedAt;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnitInput {
    pub name: Option<String>,
}

impl Validate for UnitInput {
    fn check(&self, v: &mut Violations) {
        v.non_empty("name", self.name.as_deref());
        v.max_len("name", self.name.as_deref(), NAME_MAX_LEN);
    }
}

impl Payload for UnitInput {
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: &Model) -> Self {
        Self { name: Some(model.name.clone()) }
    }

    fn merge(self, patch: &Self) -> Self {
        Self { name: pick(self.name, &patch.name) }
    }

    fn apply(&self, am: &mut ActiveModel) {
        if let Some(n) = &self.name { am.name = Set(n.clone()); }
    }
}
