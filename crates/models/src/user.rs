use sea_orm::{entity::prelude::*, Set, DatabaseConnection, QueryFilter};

use crate::contact;
use crate::errors::ModelError;

/// Row of `users`. The password column holds an argon2 PHC string, never plain text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password: String,
    pub name: String,
    pub token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Contact => Entity::has_many(contact::Entity).into() }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contact.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(username.to_string()).one(db).await?)
}

pub async fn find_by_token(db: &DatabaseConnection, token: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Token.eq(token.to_string()))
        .one(db)
        .await?;
    Ok(found)
}

/// Replace the session token; `None` logs the user out.
pub async fn set_token(db: &DatabaseConnection, user: Model, token: Option<String>) -> Result<Model, ModelError> {
    let mut am: ActiveModel = user.into();
    am.token = Set(token);
    Ok(am.update(db).await?)
}
