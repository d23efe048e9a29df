use models::address;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `contact_id` comes from the path, not the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[serde(skip)]
    #[validate(range(min = 1, message = "contact_id must be positive"))]
    pub contact_id: i32,
    #[validate(length(max = 255, message = "street must be at most 255 characters"))]
    pub street: Option<String>,
    #[validate(length(max = 100, message = "city must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "province must be at most 100 characters"))]
    pub province: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "country must be 1 to 100 characters"))]
    pub country: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 10, message = "postal_code must be 1 to 10 characters"))]
    pub postal_code: String,
}

/// Identifies one address under one contact. Used for get and remove.
#[derive(Debug, Clone, Copy, Validate)]
pub struct GetAddressRequest {
    #[validate(range(min = 1, message = "contact_id must be positive"))]
    pub contact_id: i32,
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
}

pub type RemoveAddressRequest = GetAddressRequest;

/// Partial update; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAddressRequest {
    #[serde(skip)]
    #[validate(range(min = 1, message = "contact_id must be positive"))]
    pub contact_id: i32,
    #[serde(skip)]
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
    #[validate(length(max = 255, message = "street must be at most 255 characters"))]
    pub street: Option<String>,
    #[validate(length(max = 100, message = "city must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 100, message = "province must be at most 100 characters"))]
    pub province: Option<String>,
    #[validate(length(min = 1, max = 100, message = "country must be 1 to 100 characters"))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 10, message = "postal_code must be 1 to 10 characters"))]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressResponse {
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<address::Model> for AddressResponse {
    fn from(a: address::Model) -> Self {
        Self {
            id: a.id,
            street: a.street,
            city: a.city,
            province: a.province,
            country: a.country,
            postal_code: a.postal_code,
        }
    }
}
