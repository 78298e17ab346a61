/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/auth/register` - Register new user (no token issued)
/// - `POST /api/auth/login` - Login and get a 24h session token
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, http::StatusCode, Json};
use careermantra_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, PublicUser, Role},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Requested role; defaults to job seeker
    #[serde(default)]
    pub role: Option<Role>,

    /// Company name (recruiters only, ignored for other roles)
    #[validate(length(max = 100, message = "Company must be at most 100 characters"))]
    pub company: Option<String>,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,

    /// The created account, without credentials
    pub user: PublicUser,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session token (24h)
    pub token: String,

    /// The authenticated account, without credentials
    pub user: PublicUser,
}

/// Register a new user
///
/// Creates an account with the requested role. The configured bootstrap
/// admin email is always promoted to the admin role regardless of the
/// requested one. Registration never issues a token; clients log in
/// afterwards.
///
/// # Errors
///
/// - `409 Conflict`: Email already registered
/// - `422 Unprocessable Entity`: Validation failed
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    req.validate()?;

    let role = if req.email == state.config.bootstrap_admin_email {
        Role::Admin
    } else {
        req.role.unwrap_or(Role::User)
    };

    // Company only means something on recruiter accounts.
    let company = match role {
        Role::Recruiter => req.company,
        _ => None,
    };

    let password_hash = password::hash_password(&req.password)?;

    let user = state
        .store
        .create_user(CreateUser {
            email: req.email,
            password_hash,
            name: req.name,
            role,
            company,
        })
        .await?;

    tracing::info!(user_id = user.id, role = %user.role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: user.public(),
        }),
    ))
}

/// Login
///
/// Verifies credentials and returns a 24h session token plus the public
/// user view. Unknown email and wrong password produce the identical
/// error so account existence is not leaked.
///
/// # Errors
///
/// - `401 Unauthorized`: Invalid email or password
/// - `422 Unprocessable Entity`: Validation failed
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate()?;

    let invalid_credentials =
        || crate::error::ApiError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .store
        .find_user_by_email(&req.email)
        .await
        .ok_or_else(invalid_credentials)?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(invalid_credentials());
    }

    let claims = jwt::Claims::new(user.id, user.email.clone(), user.role);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(Json(LoginResponse {
        token,
        user: user.public(),
    }))
}
