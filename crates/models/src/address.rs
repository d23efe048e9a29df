use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::contact;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contact_id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Contact }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Contact => Entity::belongs_to(contact::Entity)
                .from(Column::ContactId)
                .to(contact::Column::Id)
                .into(),
        }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contact.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Address `id` only if it hangs under `contact_id`.
pub async fn find_in_contact(db: &DatabaseConnection, contact_id: i32, id: i32) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Id.eq(id))
        .filter(Column::ContactId.eq(contact_id))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn list_by_contact(db: &DatabaseConnection, contact_id: i32) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::ContactId.eq(contact_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}
