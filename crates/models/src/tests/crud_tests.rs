use anyhow::Result;
use sea_orm::{ActiveModelTrait, ModelTrait, Set};

use super::{memory_db, seed_user};
use crate::{address, contact, user};

fn contact_for(username: &str, first_name: &str) -> contact::ActiveModel {
    contact::ActiveModel {
        username: Set(username.to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(Some("Doe".into())),
        email: Set(Some("john@example.com".into())),
        phone: Set(None),
        ..Default::default()
    }
}

#[tokio::test]
async fn user_token_roundtrip() -> Result<()> {
    let db = memory_db().await?;
    let u = seed_user(&db, "alice", None).await?;
    assert!(user::find_by_token(&db, "t-1").await?.is_none());

    let u = user::set_token(&db, u, Some("t-1".into())).await?;
    let found = user::find_by_token(&db, "t-1").await?.expect("user by token");
    assert_eq!(found.username, "alice");

    user::set_token(&db, u, None).await?;
    assert!(user::find_by_token(&db, "t-1").await?.is_none());
    let still_there = user::find_by_username(&db, "alice").await?.expect("user");
    assert!(still_there.token.is_none());
    Ok(())
}

#[tokio::test]
async fn contact_lookup_is_scoped_to_owner() -> Result<()> {
    let db = memory_db().await?;
    seed_user(&db, "alice", None).await?;
    seed_user(&db, "bob", None).await?;

    let c = contact_for("alice", "John").insert(&db).await?;
    assert!(contact::find_owned(&db, "alice", c.id).await?.is_some());
    assert!(contact::find_owned(&db, "bob", c.id).await?.is_none());
    assert!(contact::find_owned(&db, "alice", c.id + 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn address_lookup_is_scoped_to_contact() -> Result<()> {
    let db = memory_db().await?;
    seed_user(&db, "alice", None).await?;
    let c1 = contact_for("alice", "One").insert(&db).await?;
    let c2 = contact_for("alice", "Two").insert(&db).await?;

    let a = address::ActiveModel {
        contact_id: Set(c1.id),
        street: Set(None),
        city: Set(Some("Jakarta".into())),
        province: Set(None),
        country: Set("Indonesia".into()),
        postal_code: Set("14045".into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    assert!(address::find_in_contact(&db, c1.id, a.id).await?.is_some());
    assert!(address::find_in_contact(&db, c2.id, a.id).await?.is_none());
    assert_eq!(address::list_by_contact(&db, c1.id).await?.len(), 1);
    assert!(address::list_by_contact(&db, c2.id).await?.is_empty());

    let via_relation = c1.find_related(address::Entity).all(&db).await?;
    assert_eq!(via_relation.len(), 1);
    assert_eq!(via_relation[0].id, a.id);
    Ok(())
}
