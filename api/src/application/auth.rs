use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use smartkheti_core::domain::user::ports::{TokenIssuer, UserRepository};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Strict bearer auth. Verifies the token signature and expiry, then loads
/// the account so handlers receive a full `User` via `Extension` and staff
/// checks see current flags rather than claims frozen at issuance.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?
        .to_string();

    let claims = state
        .service
        .token_issuer
        .verify(&token)
        .map_err(ApiError::from)?;

    let user = state
        .service
        .user_repository
        .get_by_id(claims.sub)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("unknown user".to_string()))?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
