/// User administration endpoints
///
/// # Endpoints
///
/// - `GET /api/admin/users` - Sanitized list of all accounts
/// - `DELETE /api/admin/users/:id` - Remove an account (not your own)
/// - `PUT /api/admin/users/:id/role` - Change an account's role
///
/// Deleting a recruiter leaves their postings in place; job cleanup is a
/// separate, explicit operation.
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use careermantra_shared::{
    auth::{authorization, middleware::AuthContext},
    models::user::{PublicUser, Role},
};
use serde::{Deserialize, Serialize};

/// Role change request
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    /// One of: user, recruiter, admin
    pub role: String,
}

/// Deletion response
#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    /// Confirmation message
    pub message: String,
}

/// Lists all accounts without credentials
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<PublicUser>>> {
    authorization::require_admin(&auth)?;

    let users = state
        .store
        .list_users()
        .await
        .iter()
        .map(|u| u.public())
        .collect();

    Ok(Json(users))
}

/// Deletes an account
///
/// # Errors
///
/// - `403 Forbidden`: admin targeting their own account
/// - `404 Not Found`: no such user
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteUserResponse>> {
    authorization::require_admin(&auth)?;
    authorization::forbid_self_delete(&auth, id)?;

    let user = state.store.remove_user(id).await?;

    tracing::info!(user_id = user.id, deleted_by = auth.user_id, "user deleted");

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Changes an account's role
///
/// # Errors
///
/// - `400 Bad Request`: role outside the three known values
/// - `404 Not Found`: no such user
pub async fn set_user_role(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
    Json(req): Json<SetRoleRequest>,
) -> ApiResult<Json<PublicUser>> {
    authorization::require_admin(&auth)?;

    let role: Role = req.role.parse().map_err(|_| {
        ApiError::BadRequest(format!(
            "Invalid role '{}'. Must be one of: user, recruiter, admin",
            req.role
        ))
    })?;

    let user = state.store.set_user_role(id, role).await?;

    tracing::info!(user_id = user.id, role = %role, changed_by = auth.user_id, "user role changed");

    Ok(Json(user.public()))
}
