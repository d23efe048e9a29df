/// CRUD operations and relation tests for all entities
pub mod crud_tests;

use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::{db, user};

/// Fresh in-memory database with the full schema applied.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_user(db: &DatabaseConnection, username: &str, token: Option<&str>) -> anyhow::Result<user::Model> {
    let am = user::ActiveModel {
        username: Set(username.to_string()),
        password: Set("not-a-real-hash".to_string()),
        name: Set(format!("{username} name")),
        token: Set(token.map(str::to_string)),
    };
    Ok(am.insert(db).await?)
}
