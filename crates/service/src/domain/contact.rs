use models::contact;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pagination::{Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "first_name must be 1 to 100 characters"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "last_name must be at most 100 characters"))]
    pub last_name: Option<String>,
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

/// Partial update; `id` comes from the path, not the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactRequest {
    #[serde(skip)]
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
    #[validate(length(min = 1, max = 100, message = "first_name must be 1 to 100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "last_name must be at most 100 characters"))]
    pub last_name: Option<String>,
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

/// Query string of `GET /api/contacts`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchContactRequest {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "email must be at most 100 characters"))]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: u64,
    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 100, message = "size must be 1 to 100"))]
    pub size: u64,
}

fn default_page() -> u64 { 1 }
fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

impl Default for SearchContactRequest {
    fn default() -> Self {
        Self { name: None, email: None, phone: None, page: default_page(), size: default_size() }
    }
}

impl SearchContactRequest {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size.min(MAX_PAGE_SIZE) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<contact::Model> for ContactResponse {
    fn from(c: contact::Model) -> Self {
        Self { id: c.id, first_name: c.first_name, last_name: c.last_name, email: c.email, phone: c.phone }
    }
}
