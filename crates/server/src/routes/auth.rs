use axum::{extract::{Request, State}, middleware::Next, response::Response};
use sea_orm::DatabaseConnection;
use service::user_service;

use crate::errors::ApiError;

pub const API_TOKEN_HEADER: &str = "x-api-token";

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// Resolve `X-API-TOKEN` to a user and stash it in request extensions.
/// Missing or unknown tokens are rejected with 401.
pub async fn require_api_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_default();

    let user = match user_service::authenticate(&state.db, &token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), has_token = !token.is_empty(), "api token rejected");
            return Err(e.into());
        }
    };
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
