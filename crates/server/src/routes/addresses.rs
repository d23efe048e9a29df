use axum::{extract::State, Extension, Json};
use models::user;
use service::address_service;
use service::domain::address::{
    AddressResponse, CreateAddressRequest, GetAddressRequest, RemoveAddressRequest, UpdateAddressRequest,
};

use crate::{
    errors::ApiError,
    extract::{JsonBody, PathParams},
    response::WebResponse,
    routes::auth::ServerState,
};

type ApiResult<T> = Result<Json<WebResponse<T>>, ApiError>;

#[utoipa::path(
    post, path = "/api/contacts/{contact_id}/addresses", tag = "addresses",
    params(("contact_id" = i32, Path, description = "Parent contact id")),
    request_body = crate::openapi::AddressDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Invalid input"), (status = 404, description = "Contact not found"))
)]
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams(contact_id): PathParams<i32>,
    JsonBody(mut req): JsonBody<CreateAddressRequest>,
) -> ApiResult<AddressResponse> {
    req.contact_id = contact_id;
    let created = address_service::create(&state.db, &user, req).await?;
    Ok(Json(WebResponse::data(created)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}/addresses", tag = "addresses",
    params(("contact_id" = i32, Path, description = "Parent contact id")),
    responses((status = 200, description = "All addresses of the contact"), (status = 404, description = "Contact not found"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams(contact_id): PathParams<i32>,
) -> ApiResult<Vec<AddressResponse>> {
    Ok(Json(WebResponse::data(address_service::list(&state.db, &user, contact_id).await?)))
}

#[utoipa::path(
    get, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Parent contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    responses((status = 200, description = "Address"), (status = 404, description = "Contact or address not found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams((contact_id, id)): PathParams<(i32, i32)>,
) -> ApiResult<AddressResponse> {
    let found = address_service::get(&state.db, &user, GetAddressRequest { contact_id, id }).await?;
    Ok(Json(WebResponse::data(found)))
}

#[utoipa::path(
    put, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Parent contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    request_body = crate::openapi::AddressDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Invalid input"), (status = 404, description = "Contact or address not found"))
)]
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams((contact_id, id)): PathParams<(i32, i32)>,
    JsonBody(mut req): JsonBody<UpdateAddressRequest>,
) -> ApiResult<AddressResponse> {
    req.contact_id = contact_id;
    req.id = id;
    let updated = address_service::update(&state.db, &user, req).await?;
    Ok(Json(WebResponse::data(updated)))
}

#[utoipa::path(
    delete, path = "/api/contacts/{contact_id}/addresses/{address_id}", tag = "addresses",
    params(
        ("contact_id" = i32, Path, description = "Parent contact id"),
        ("address_id" = i32, Path, description = "Address id")
    ),
    responses((status = 200, description = "Removed"), (status = 404, description = "Contact or address not found"))
)]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(user): Extension<user::Model>,
    PathParams((contact_id, id)): PathParams<(i32, i32)>,
) -> ApiResult<&'static str> {
    let key = RemoveAddressRequest { contact_id, id };
    Ok(Json(WebResponse::data(address_service::remove(&state.db, &user, key).await?)))
}
