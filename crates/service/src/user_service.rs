use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use tracing::{info, instrument};
use uuid::Uuid;

use models::user;
use crate::domain::user::{LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::errors::ServiceError;
use crate::validation::validate;

const LOGIN_FAILED: &str = "Username or password is wrong";
const USERNAME_TAKEN: &str = "Username already exists";

/// Hash a plain password into an argon2 PHC string.
pub fn hash_password(plain: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Hash(e.to_string()))
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, ServiceError> {
    let parsed = PasswordHash::new(hash).map_err(|e| ServiceError::Hash(e.to_string()))?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}

/// Create a new user. Usernames are unique.
#[instrument(skip(db, req), fields(username = %req.username))]
pub async fn register(db: &DatabaseConnection, req: RegisterUserRequest) -> Result<UserResponse, ServiceError> {
    validate(&req)?;
    if user::find_by_username(db, &req.username).await?.is_some() {
        return Err(ServiceError::BadRequest(USERNAME_TAKEN.into()));
    }
    let am = user::ActiveModel {
        username: Set(req.username),
        password: Set(hash_password(&req.password)?),
        name: Set(req.name),
        token: Set(None),
    };
    let created = am.insert(db).await.map_err(insert_user_error)?;
    info!(username = %created.username, "user_registered");
    Ok(created.into())
}

/// A concurrent registration can still win the race past the lookup above.
fn insert_user_error(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::BadRequest(USERNAME_TAKEN.into()),
        _ => ServiceError::Db(err.to_string()),
    }
}

/// Check credentials and issue a fresh token.
#[instrument(skip(db, req), fields(username = %req.username))]
pub async fn login(db: &DatabaseConnection, req: LoginUserRequest) -> Result<UserResponse, ServiceError> {
    validate(&req)?;
    let found = user::find_by_username(db, &req.username)
        .await?
        .ok_or_else(|| ServiceError::Unauthorized(LOGIN_FAILED.into()))?;
    if !verify_password(&req.password, &found.password)? {
        return Err(ServiceError::Unauthorized(LOGIN_FAILED.into()));
    }
    let updated = user::set_token(db, found, Some(Uuid::new_v4().to_string())).await?;
    info!(username = %updated.username, "user_logged_in");
    Ok(UserResponse::with_token(updated))
}

pub async fn get(user: user::Model) -> Result<UserResponse, ServiceError> {
    Ok(user.into())
}

/// Replace only the submitted fields; a new password is re-hashed.
#[instrument(skip(db, user, req), fields(username = %user.username))]
pub async fn update(db: &DatabaseConnection, user: user::Model, req: UpdateUserRequest) -> Result<UserResponse, ServiceError> {
    validate(&req)?;
    let mut am: user::ActiveModel = user.into();
    if let Some(name) = req.name {
        am.name = Set(name);
    }
    if let Some(password) = req.password {
        am.password = Set(hash_password(&password)?);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(username = %updated.username, "user_updated");
    Ok(updated.into())
}

#[instrument(skip(db, user), fields(username = %user.username))]
pub async fn logout(db: &DatabaseConnection, user: user::Model) -> Result<&'static str, ServiceError> {
    let cleared = user::set_token(db, user, None).await?;
    info!(username = %cleared.username, "user_logged_out");
    Ok("OK")
}

/// Resolve an `X-API-TOKEN` value to its user.
pub async fn authenticate(db: &DatabaseConnection, token: &str) -> Result<user::Model, ServiceError> {
    if token.is_empty() {
        return Err(ServiceError::unauthorized());
    }
    user::find_by_token(db, token)
        .await?
        .ok_or_else(ServiceError::unauthorized)
}
