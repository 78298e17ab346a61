/// Bearer-token authentication for Axum
///
/// Every authenticated request passes through token verification before any
/// handler logic runs. On success an [`AuthContext`] carrying the caller's
/// identity and role is inserted into the request extensions for handlers to
/// extract with `Extension<AuthContext>`.
///
/// The two failure modes deliberately carry no detail about *why* a token
/// failed beyond missing vs. invalid; both map to 401.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use careermantra_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, {} ({})", auth.email, auth.role)
/// }
/// ```
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::jwt::{validate_token, Claims};
use crate::models::user::Role;

/// Authenticated caller identity, derived from a verified session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: u64,

    /// Email embedded in the token
    pub email: String,

    /// Role embedded in the token
    pub role: Role,
}

impl AuthContext {
    /// Builds the context from validated claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email.clone(),
            role: claims.role,
        }
    }
}

/// Error type for the authentication gate
#[derive(Debug)]
pub enum AuthError {
    /// No bearer credential supplied
    MissingToken,

    /// Signature, format, or expiry check failed
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Access denied. No token provided.",
            AuthError::InvalidToken => "Invalid token.",
        };
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "unauthorized", "message": message })),
        )
            .into_response()
    }
}

/// Verifies the bearer credential in a request's headers
///
/// This is the whole of the gating check; the Axum layer in the API crate
/// calls it and inserts the resulting [`AuthContext`] into request
/// extensions.
///
/// # Errors
///
/// - `AuthError::MissingToken`: no `Authorization: Bearer <token>` header
/// - `AuthError::InvalidToken`: token failed validation for any reason
pub fn verify_bearer(headers: &HeaderMap, secret: &str) -> Result<AuthContext, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    let claims = validate_token(token, secret).map_err(|_| AuthError::InvalidToken)?;

    Ok(AuthContext::from_claims(&claims))
}
