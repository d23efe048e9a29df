mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{seed_address, seed_contact, seed_user, send, test_app, TOKEN};

fn address_body() -> serde_json::Value {
    json!({
        "street": "jalan test",
        "city": "kota test",
        "province": "provinsi test",
        "country": "indonesia",
        "postal_code": "234234"
    })
}

#[tokio::test]
async fn create_address() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let (status, body) = send(&app, "POST", &format!("/api/contacts/{}/addresses", c.id), Some(TOKEN), Some(address_body())).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].as_i64().is_some());
    assert_eq!(body["data"]["street"], "jalan test");
    assert_eq!(body["data"]["country"], "indonesia");
    assert_eq!(body["data"]["postal_code"], "234234");
    Ok(())
}

#[tokio::test]
async fn create_address_rejects_invalid_request() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/contacts/{}/addresses", c.id),
        Some(TOKEN),
        Some(json!({"street": "jalan test", "country": "", "postal_code": ""})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["country"].is_array());
    assert!(body["errors"]["postal_code"].is_array());
    Ok(())
}

#[tokio::test]
async fn create_address_under_missing_contact() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let (status, body) = send(&app, "POST", &format!("/api/contacts/{}/addresses", c.id + 1), Some(TOKEN), Some(address_body())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Contact not found");
    Ok(())
}

#[tokio::test]
async fn get_address() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let a = seed_address(&db, c.id).await?;

    let (status, body) = send(&app, "GET", &format!("/api/contacts/{}/addresses/{}", c.id, a.id), Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], a.id);
    assert_eq!(body["data"]["city"], "kota test");

    let (status, body) = send(&app, "GET", &format!("/api/contacts/{}/addresses/{}", c.id, a.id + 1), Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Address not found");

    let (status, body) = send(&app, "GET", &format!("/api/contacts/{}/addresses/{}", c.id + 1, a.id), Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Contact not found");
    Ok(())
}

#[tokio::test]
async fn update_address_keeps_unsubmitted_fields() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let a = seed_address(&db, c.id).await?;
    let uri = format!("/api/contacts/{}/addresses/{}", c.id, a.id);

    let (status, body) = send(&app, "PUT", &uri, Some(TOKEN), Some(json!({"street": "street", "postal_code": "1111"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], a.id);
    assert_eq!(body["data"]["street"], "street");
    assert_eq!(body["data"]["postal_code"], "1111");
    assert_eq!(body["data"]["country"], "indonesia");

    let (status, _) = send(&app, "PUT", &uri, Some(TOKEN), Some(json!({"country": ""}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing = format!("/api/contacts/{}/addresses/{}", c.id, a.id + 1);
    let (status, _) = send(&app, "PUT", &missing, Some(TOKEN), Some(json!({"city": "x"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn remove_address() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    let a = seed_address(&db, c.id).await?;
    let uri = format!("/api/contacts/{}/addresses/{}", c.id, a.id);

    let (status, body) = send(&app, "DELETE", &uri, Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "OK");

    let (status, body) = send(&app, "DELETE", &uri, Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errors"], "Address not found");
    Ok(())
}

#[tokio::test]
async fn list_addresses() -> anyhow::Result<()> {
    let (app, db) = test_app().await?;
    seed_user(&db).await?;
    let c = seed_contact(&db, "test").await?;
    seed_address(&db, c.id).await?;
    seed_address(&db, c.id).await?;

    let (status, body) = send(&app, "GET", &format!("/api/contacts/{}/addresses", c.id), Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert!(body.get("paging").is_none());

    let (status, _) = send(&app, "GET", &format!("/api/contacts/{}/addresses", c.id + 1), Some(TOKEN), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
