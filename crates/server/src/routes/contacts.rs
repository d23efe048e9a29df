use axum::{extract::State, Extension, Json};
use models::user;
use service::contact_service;
use service::domain::contact::{ContactResponse, CreateContactRequest, SearchContactRequest, UpdateContactRequest};

use crate::{
    errors::ApiError,
    extract::{JsonBody, PathParams, QueryParams},
    response::WebResponse,
    routes::auth::ServerState,
};

type ApiResult<T> = Result<Json<WebResponse<T>>, ApiError>;

#[utoipa::path(
    post, path = "/api/contacts", tag = "contacts",
    request_body = crate::openapi::ContactDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Invalid input"))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    JsonBody(req): JsonBody<CreateContactRequest>,
) -> ApiResult<ContactResponse> {
    let created = contact_service::create(&state.db, &user, req).await?;
    Ok(Json(WebResponse::data(created)))
}

#[utoipa::path(
    get, path = "/api/contacts", tag = "contacts",
    params(
        ("name" = Option<String>, Query, description = "Substring of first or last name"),
        ("email" = Option<String>, Query, description = "Substring of email"),
        ("phone" = Option<String>, Query, description = "Substring of phone"),
        ("page" = Option<u64>, Query, description = "1-based page, default 1"),
        ("size" = Option<u64>, Query, description = "Page size 1..=100, default 10")
    ),
    responses((status = 200, description = "Page of contacts with paging"))
)]
pub async fn search(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    QueryParams(req): QueryParams<SearchContactRequest>,
) -> ApiResult<Vec<ContactResponse>> {
    let page = contact_service::search(&state.db, &user, req).await?;
    Ok(Json(WebResponse::paged(page)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    responses((status = 200, description = "Contact"), (status = 404, description = "Contact not found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams(contact_id): PathParams<i32>,
) -> ApiResult<ContactResponse> {
    Ok(Json(WebResponse::data(contact_service::get(&state.db, &user, contact_id).await?)))
}

#[utoipa::path(
    put, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::ContactDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Invalid input"), (status = 404, description = "Contact not found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams(contact_id): PathParams<i32>,
    JsonBody(mut req): JsonBody<UpdateContactRequest>,
) -> ApiResult<ContactResponse> {
    req.id = contact_id;
    let updated = contact_service::update(&state.db, &user, req).await?;
    Ok(Json(WebResponse::data(updated)))
}

#[utoipa::path(
    delete, path = "/api/contacts/{contact_id}", tag = "contacts",
    params(("contact_id" = i32, Path, description = "Contact id")),
    responses((status = 200, description = "Removed"), (status = 404, description = "Contact not found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams(contact_id): PathParams<i32>,
) -> ApiResult<&'static str> {
    Ok(Json(WebResponse::data(contact_service::remove(&state.db, &user, contact_id).await?)))
}
