use axum::{extract::State, Extension, Json};
use models::user;
use service::domain::user::{LoginUserRequest, RegisterUserRequest, UpdateUserRequest, UserResponse};
use service::user_service;

use crate::{errors::ApiError, extract::JsonBody, response::WebResponse, routes::auth::ServerState};

type ApiResult<T> = Result<Json<WebResponse<T>>, ApiError>;

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::RegisterUserDoc,
    responses((status = 200, description = "Registered"), (status = 400, description = "Invalid input or username taken"))
)]
pub async fn register(State(state): State<ServerState>, JsonBody(req): JsonBody<RegisterUserRequest>) -> ApiResult<UserResponse> {
    let created = user_service::register(&state.db, req).await?;
    Ok(Json(WebResponse::data(created)))
}

#[utoipa::path(
    post, path = "/api/users/login", tag = "users",
    request_body = crate::openapi::LoginUserDoc,
    responses((status = 200, description = "Logged in, token issued"), (status = 401, description = "Username or password is wrong"))
)]
pub async fn login(State(state): State<ServerState>, JsonBody(req): JsonBody<LoginUserRequest>) -> ApiResult<UserResponse> {
    let logged_in = user_service::login(&state.db, req).await?;
    Ok(Json(WebResponse::data(logged_in)))
}

#[utoipa::path(
    get, path = "/api/users/current", tag = "users",
    responses((status = 200, description = "Current user"), (status = 401, description = "Unauthorized"))
)]
pub async fn current(Extension(user): Extension<user::Model>) -> ApiResult<UserResponse> {
    Ok(Json(WebResponse::data(user_service::get(user).await?)))
}

#[utoipa::path(
    patch, path = "/api/users/current", tag = "users",
    request_body = crate::openapi::UpdateUserDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Invalid input"), (status = 401, description = "Unauthorized"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    let updated = user_service::update(&state.db, user, req).await?;
    Ok(Json(WebResponse::data(updated)))
}

#[utoipa::path(
    delete, path = "/api/users/current", tag = "users",
    responses((status = 200, description = "Logged out"), (status = 401, description = "Unauthorized"))
)]
pub async fn logout(State(state): State<ServerState>, Extension(user): Extension<user::Model>) -> ApiResult<&'static str> {
    Ok(Json(WebResponse::data(user_service::logout(&state.db, user).await?)))
}
