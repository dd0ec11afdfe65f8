use crate::db::connect_in_memory;
use crate::payload::Payload;
use crate::{product, product_type, site, stock, unit};
use anyhow::Result;
use chrono::Utc;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

async fn insert_site(db: &DatabaseConnection, name: &str) -> Result<site::Model> {
    let now = Utc::now().into();
    let am = site::ActiveModel { name: Set(name.into()), created_at: Set(now), updated_at: Set(now), ..Default::default() };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn ids_are_issued_in_insertion_order() -> Result<()> {
    let db = connect_in_memory().await?;

    let a = insert_site(&db, "North field").await?;
    let b = insert_site(&db, "Barn").await?;
    let c = insert_site(&db, "Warehouse").await?;
    assert!(a.id < b.id && b.id < c.id);

    let names: Vec<String> = site::Entity::find()
        .order_by_asc(site::Column::Id)
        .all(&db)
        .await?
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["North field", "Barn", "Warehouse"]);
    Ok(())
}

#[tokio::test]
async fn payload_apply_round_trips_through_the_table() -> Result<()> {
    let db = connect_in_memory().await?;
    let now = Utc::now().into();

    let kind = product_type::ActiveModel { name: Set("Fertilizer".into()), created_at: Set(now), updated_at: Set(now), ..Default::default() }
        .insert(&db)
        .await?;
    let kg = unit::ActiveModel { name: Set("kg".into()), created_at: Set(now), updated_at: Set(now), ..Default::default() }
        .insert(&db)
        .await?;

    let input = product::ProductInput {
        name: Some("Fertilizer A".into()),
        function: Some("Soil nutrient".into()),
        product_type_id: Some(Some(kind.id)),
        unit_id: Some(Some(kg.id)),
        site_id: None,
    };
    let mut am = product::ActiveModel::new();
    input.apply(&mut am);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    let created = am.insert(&db).await?;

    let found = product::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found, created);
    assert_eq!(found.product_type_id, Some(kind.id));
    assert_eq!(found.site_id, None);

    let back = product::ProductInput::from_model(&found);
    assert_eq!(back.name.as_deref(), Some("Fertilizer A"));
    assert_eq!(back.site_id, Some(None));
    Ok(())
}

#[tokio::test]
async fn product_lists_its_stocks_through_the_relation() -> Result<()> {
    use sea_orm::ModelTrait;

    let db = connect_in_memory().await?;
    let now = Utc::now().into();
    let field = insert_site(&db, "North field").await?;
    let p = product::ActiveModel {
        name: Set("Seed mix".into()),
        function: Set("Sowing".into()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    for qty in [10.0, 2.5] {
        stock::ActiveModel {
            product_id: Set(Some(p.id)),
            site_id: Set(Some(field.id)),
            quantity: Set(qty),
            unit_of_measure: Set("kg".into()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    let stocks = p.find_related(stock::Entity).all(&db).await?;
    assert_eq!(stocks.len(), 2);
    let at_field = stock::Entity::find().filter(stock::Column::SiteId.eq(field.id)).all(&db).await?;
    assert_eq!(at_field.len(), 2);
    Ok(())
}
