/// Authorization predicates
///
/// A pure predicate layer, invoked after token verification succeeds and
/// before the target operation executes. Nothing here touches the store: the
/// predicates work on the [`AuthContext`] alone, and ownership of individual
/// resources is enforced by the store through the owner scope these helpers
/// produce.
///
/// # Admin override
///
/// Admin is a superuser wherever recruiter access is required, and bypasses
/// ownership everywhere: [`owner_scope`] returns `None` for admins, which the
/// store treats as "no ownership filter". This override is applied
/// consistently across jobs and applications.
///
/// # Example
///
/// ```
/// use careermantra_shared::auth::authorization::{owner_scope, require_role};
/// use careermantra_shared::auth::middleware::AuthContext;
/// use careermantra_shared::models::user::Role;
///
/// let auth = AuthContext {
///     user_id: 3,
///     email: "r@corp.com".to_string(),
///     role: Role::Recruiter,
/// };
///
/// require_role(&auth, &[Role::Recruiter, Role::Admin]).unwrap();
/// assert_eq!(owner_scope(&auth), Some(3));
/// ```
use super::middleware::AuthContext;
use crate::models::user::Role;

/// Error type for authorization checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// Caller's role is not in the allowed set
    #[error("Access denied: insufficient permissions")]
    InsufficientRole {
        /// Roles that would have been admitted
        required: &'static [Role],
        /// Role the caller actually has
        actual: Role,
    },

    /// Admin attempted to delete their own account
    #[error("Admins cannot delete their own account")]
    SelfDeleteForbidden,
}

/// Requires the caller's role to be one of `allowed`
///
/// # Errors
///
/// Returns `AuthzError::InsufficientRole` otherwise.
pub fn require_role(auth: &AuthContext, allowed: &'static [Role]) -> Result<(), AuthzError> {
    if allowed.contains(&auth.role) {
        return Ok(());
    }
    Err(AuthzError::InsufficientRole {
        required: allowed,
        actual: auth.role,
    })
}

/// Recruiter-gated operations; admin is admitted as superuser
pub fn require_recruiter(auth: &AuthContext) -> Result<(), AuthzError> {
    require_role(auth, &[Role::Recruiter, Role::Admin])
}

/// Admin-only operations
pub fn require_admin(auth: &AuthContext) -> Result<(), AuthzError> {
    require_role(auth, &[Role::Admin])
}

/// Applying to jobs is for job seekers only
pub fn require_applicant(auth: &AuthContext) -> Result<(), AuthzError> {
    require_role(auth, &[Role::User])
}

/// The ownership filter the store should apply for this caller
///
/// `None` for admins (no filter), `Some(user_id)` for everyone else.
pub fn owner_scope(auth: &AuthContext) -> Option<u64> {
    match auth.role {
        Role::Admin => None,
        _ => Some(auth.user_id),
    }
}

/// Blocks an admin from deleting their own account
///
/// Prevents lockout: the last admin can never remove themselves.
///
/// # Errors
///
/// Returns `AuthzError::SelfDeleteForbidden` when `target_id` is the caller.
pub fn forbid_self_delete(auth: &AuthContext, target_id: u64) -> Result<(), AuthzError> {
    if auth.user_id == target_id {
        return Err(AuthzError::SelfDeleteForbidden);
    }
    Ok(())
}
