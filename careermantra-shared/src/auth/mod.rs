/// Authentication and authorization
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: session token generation and validation (HS256, 24h expiry)
/// - [`middleware`]: bearer-token verification and the request `AuthContext`
/// - [`authorization`]: role and ownership predicates applied after
///   verification
///
/// # Flow
///
/// ```text
/// request -> verify_bearer (middleware) -> require_* (authorization) -> handler
/// ```
///
/// Login and registration-time credential handling live in the API crate's
/// auth routes; this module only supplies the primitives.

pub mod authorization;
pub mod jwt;
pub mod middleware;
pub mod password;
