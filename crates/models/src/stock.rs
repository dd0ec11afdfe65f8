//! Stock records: a positive quantity of one product held at one site.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::audit::Audited;
use crate::payload::{pick, Payload};
use crate::validation::{Validate, Violations};
use crate::{product, site};

pub const UNIT_OF_MEASURE_MAX_LEN: usize = 32;

/// `product_id` / `site_id` are nullable only because deleting a parent under the
/// hard policy detaches its stocks; writes always require both.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "siteID")]
    pub site_id: Option<i32>,
    pub quantity: f64,
    pub unit_of_measure: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Product, Site }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
            Relation::Site => Entity::belongs_to(site::Entity).from(Column::SiteId).to(site::Column::Id).into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<site::Entity> for Entity {
    fn to() -> RelationDef { Relation::Site.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl Audited for Entity {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Column = Column::UpdatedAt;
    const DELETED_AT: Column = Column::DeletedAt;
}

/// A stock row with its product and site inlined.
///
/// `product` / `site` are `null` when the stock has been detached from them or
/// when they have been deleted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StockView {
    #[serde(flatten)]
    pub stock: Model,
    pub product: Option<product::Model>,
    pub site: Option<site::Model>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StockInput {
    #[serde(rename = "productID")]
    pub product_id: Option<i32>,
    #[serde(rename = "siteID")]
    pub site_id: Option<i32>,
    pub quantity: Option<f64>,
    #[serde(rename = "unitOfMeasure")]
    pub unit_of_measure: Option<String>,
}

impl Validate for StockInput {
    fn check(&self, v: &mut Violations) {
        v.required("productID", self.product_id.as_ref());
        v.required("siteID", self.site_id.as_ref());
        v.greater_than("quantity", self.quantity, 0.0);
        v.non_empty("unitOfMeasure", self.unit_of_measure.as_deref());
        v.max_len("unitOfMeasure", self.unit_of_measure.as_deref(), UNIT_OF_MEASURE_MAX_LEN);
    }
}

impl Payload for StockInput {
    type Model = Model;
    type ActiveModel = ActiveModel;

    fn from_model(model: &Model) -> Self {
        Self {
            product_id: model.product_id,
            site_id: model.site_id,
            quantity: Some(model.quantity),
            unit_of_measure: Some(model.unit_of_measure.clone()),
        }
    }

    fn merge(self, patch: &Self) -> Self {
        Self {
            product_id: pick(self.product_id, &patch.product_id),
            site_id: pick(self.site_id, &patch.site_id),
            quantity: pick(self.quantity, &patch.quantity),
            unit_of_measure: pick(self.unit_of_measure, &patch.unit_of_measure),
        }
    }

    fn apply(&self, am: &mut ActiveModel) {
        if let Some(p) = self.product_id { am.product_id = Set(Some(p)); }
        if let Some(s) = self.site_id { am.site_id = Set(Some(s)); }
        if let Some(q) = self.quantity { am.quantity = Set(q); }
        if let Some(u) = &self.unit_of_measure { am.unit_of_measure = Set(u.clone()); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;

    fn fields(input: &StockInput) -> Vec<&'static str> {
        match input.validate() {
            Ok(()) => vec![],
            Err(ModelError::Validation(v)) => v.fields(),
        }
    }

    #[test]
    fn negative_quantity_is_reported() {
        let input: StockInput =
            serde_json::from_str(r#"{"productID":1,"siteID":1,"quantity":-5,"unitOfMeasure":"kg"}"#).unwrap();
        assert_eq!(fields(&input), vec!["quantity"]);
        assert!(input.validate().unwrap_err().to_string().contains("quantity"));
    }

    #[test]
    fn zero_quantity_fails_and_positive_passes() {
        let mut input = StockInput { product_id: Some(1), site_id: Some(1), quantity: Some(0.0), unit_of_measure: Some("kg".into()) };
        assert_eq!(fields(&input), vec!["quantity"]);
        input.quantity = Some(0.001);
        assert!(fields(&input).is_empty());
    }

    #[test]
    fn empty_payload_lists_every_field_in_order() {
        let input = StockInput::default();
        let first = fields(&input);
        assert_eq!(first, vec!["productID", "siteID", "quantity", "unitOfMeasure"]);
        assert_eq!(fields(&input), first);
    }

    #[test]
    fn view_flattens_stock_fields() {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let view = StockView {
            stock: Model {
                id: 4,
                product_id: Some(1),
                site_id: None,
                quantity: 2.5,
                unit_of_measure: "kg".into(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
            product: None,
            site: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["productID"], 1);
        assert!(json["siteID"].is_null());
        assert_eq!(json["unitOfMeasure"], "kg");
        assert!(json["product"].is_null());
        assert!(json.get("deletedAt").is_none());
    }
}
