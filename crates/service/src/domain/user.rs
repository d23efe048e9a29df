use models::user;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration input. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "username must be 1 to 100 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "password must be 1 to 100 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "username must be 1 to 100 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "password must be 1 to 100 characters"))]
    pub password: String,
}

/// Partial update of the current user; absent fields stay untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "password must be 1 to 100 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    /// Login view: same as the public view plus the freshly issued token.
    pub fn with_token(user: user::Model) -> Self {
        Self { username: user.username, name: user.name, token: user.token }
    }
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self { username: user.username, name: user.name, token: None }
    }
}
