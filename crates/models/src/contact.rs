use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter};
use serde::Serialize;

use crate::{address, user};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User, Address }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::Username)
                .to(user::Column::Username)
                .into(),
            Relation::Address => Entity::has_many(address::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Contact `id` only if it belongs to `username`.
pub async fn find_owned(db: &DatabaseConnection, username: &str, id: i32) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Id.eq(id))
        .filter(Column::Username.eq(username.to_string()))
        .one(db)
        .await?;
    Ok(found)
}
