#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

use models::{address, contact, user};
use server::routes::{self, auth::ServerState};

pub const TOKEN: &str = "test";
pub const USERNAME: &str = "test";
pub const PASSWORD: &str = "rahasia";

/// Router over a fresh in-memory database, plus the handle for seeding.
pub async fn test_app() -> anyhow::Result<(Router, DatabaseConnection)> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = models::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    let app = routes::build_router(ServerState { db: db.clone() }, tower_http::cors::CorsLayer::very_permissive());
    Ok((app, db))
}

pub async fn seed_user(db: &DatabaseConnection) -> anyhow::Result<user::Model> {
    let am = user::ActiveModel {
        username: Set(USERNAME.into()),
        password: Set(service::user_service::hash_password(PASSWORD)?),
        name: Set("test".into()),
        token: Set(Some(TOKEN.into())),
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_contact(db: &DatabaseConnection, first_name: &str) -> anyhow::Result<contact::Model> {
    let am = contact::ActiveModel {
        username: Set(USERNAME.into()),
        first_name: Set(first_name.into()),
        last_name: Set(Some("test".into())),
        email: Set(Some("test@example.com".into())),
        phone: Set(Some("080900000".into())),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_address(db: &DatabaseConnection, contact_id: i32) -> anyhow::Result<address::Model> {
    let am = address::ActiveModel {
        contact_id: Set(contact_id),
        street: Set(Some("jalan test".into())),
        city: Set(Some("kota test".into())),
        province: Set(Some("provinsi test".into())),
        country: Set("indonesia".into()),
        postal_code: Set("234234".into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Send one request and decode the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header("X-API-TOKEN", t);
    }
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}
