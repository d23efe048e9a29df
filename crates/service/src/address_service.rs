use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::{info, instrument};

use models::{address, user};
use crate::contact_service::check_contact_must_exist;
use crate::domain::address::{
    AddressResponse, CreateAddressRequest, GetAddressRequest, RemoveAddressRequest, UpdateAddressRequest,
};
use crate::errors::ServiceError;
use crate::validation::validate;

/// Load address `id` under `contact_id`, or 404 `Address not found`.
pub async fn check_address_must_exist(
    db: &DatabaseConnection,
    contact_id: i32,
    id: i32,
) -> Result<address::Model, ServiceError> {
    address::find_in_contact(db, contact_id, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Address"))
}

#[instrument(skip(db, user, req), fields(username = %user.username, contact_id = req.contact_id))]
pub async fn create(db: &DatabaseConnection, user: &user::Model, req: CreateAddressRequest) -> Result<AddressResponse, ServiceError> {
    validate(&req)?;
    let contact = check_contact_must_exist(db, &user.username, req.contact_id).await?;
    let am = address::ActiveModel {
        contact_id: Set(contact.id),
        street: Set(req.street),
        city: Set(req.city),
        province: Set(req.province),
        country: Set(req.country),
        postal_code: Set(req.postal_code),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(address_id = created.id, "address_created");
    Ok(created.into())
}

pub async fn get(db: &DatabaseConnection, user: &user::Model, req: GetAddressRequest) -> Result<AddressResponse, ServiceError> {
    validate(&req)?;
    let contact = check_contact_must_exist(db, &user.username, req.contact_id).await?;
    Ok(check_address_must_exist(db, contact.id, req.id).await?.into())
}

/// Partial replace under an owned contact.
#[instrument(skip(db, user, req), fields(username = %user.username, contact_id = req.contact_id, address_id = req.id))]
pub async fn update(db: &DatabaseConnection, user: &user::Model, req: UpdateAddressRequest) -> Result<AddressResponse, ServiceError> {
    validate(&req)?;
    let contact = check_contact_must_exist(db, &user.username, req.contact_id).await?;
    let existing = check_address_must_exist(db, contact.id, req.id).await?;
    let mut am: address::ActiveModel = existing.into();
    if let Some(street) = req.street {
        am.street = Set(Some(street));
    }
    if let Some(city) = req.city {
        am.city = Set(Some(city));
    }
    if let Some(province) = req.province {
        am.province = Set(Some(province));
    }
    if let Some(country) = req.country {
        am.country = Set(country);
    }
    if let Some(postal_code) = req.postal_code {
        am.postal_code = Set(postal_code);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(address_id = updated.id, "address_updated");
    Ok(updated.into())
}

#[instrument(skip(db, user, req), fields(username = %user.username, contact_id = req.contact_id, address_id = req.id))]
pub async fn remove(db: &DatabaseConnection, user: &user::Model, req: RemoveAddressRequest) -> Result<&'static str, ServiceError> {
    validate(&req)?;
    let contact = check_contact_must_exist(db, &user.username, req.contact_id).await?;
    let existing = check_address_must_exist(db, contact.id, req.id).await?;
    address::Entity::delete_by_id(existing.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(address_id = existing.id, "address_removed");
    Ok("OK")
}

/// Every address of an owned contact, ordered by id.
pub async fn list(db: &DatabaseConnection, user: &user::Model, contact_id: i32) -> Result<Vec<AddressResponse>, ServiceError> {
    let contact = check_contact_must_exist(db, &user.username, contact_id).await?;
    let rows = address::list_by_contact(db, contact.id).await?;
    Ok(rows.into_iter().map(AddressResponse::from).collect())
}
