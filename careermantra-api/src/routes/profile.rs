/// Current-user profile endpoint
///
/// # Endpoints
///
/// - `GET /api/user/profile` - The authenticated user's own account
use crate::{app::AppState, error::{ApiError, ApiResult}};
use axum::{extract::State, Extension, Json};
use careermantra_shared::{auth::middleware::AuthContext, models::user::PublicUser};

/// Returns the caller's own account
///
/// # Errors
///
/// - `404 Not Found`: the account behind a still-valid token was deleted
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<PublicUser>> {
    let user = state
        .store
        .find_user(auth.user_id)
        .await
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.public()))
}
