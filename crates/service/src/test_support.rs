#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use models::{contact, db::connect_with_config, user};
use crate::user_service::hash_password;

pub const TEST_USERNAME: &str = "test";
pub const TEST_PASSWORD: &str = "rahasia";
pub const TEST_TOKEN: &str = "test";

/// Fresh in-memory database per test, schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// The logged-in user every authenticated test acts as.
pub async fn seed_user(db: &DatabaseConnection) -> Result<user::Model, anyhow::Error> {
    let am = user::ActiveModel {
        username: Set(TEST_USERNAME.to_string()),
        password: Set(hash_password(TEST_PASSWORD)?),
        name: Set("test".to_string()),
        token: Set(Some(TEST_TOKEN.to_string())),
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_contact(db: &DatabaseConnection, username: &str, first_name: &str) -> Result<contact::Model, anyhow::Error> {
    let am = contact::ActiveModel {
        username: Set(username.to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(Some("test".to_string())),
        email: Set(Some("test@example.com".to_string())),
        phone: Set(Some("080900000".to_string())),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
