/// JWT session token generation and validation
///
/// Session tokens are signed with HS256 and carry the user's identity and
/// role. A token is entirely self-contained: there is no server-side session
/// table, no refresh mechanism, and no revocation -- expiry (24 hours from
/// issuance) is the only termination mechanism.
///
/// # Claims
///
/// - `sub`: user ID
/// - `email`: user email
/// - `role`: account role at issuance time
/// - `iss`: always "careermantra"
/// - `iat` / `exp`: issuance and expiry timestamps
///
/// # Example
///
/// ```
/// use careermantra_shared::auth::jwt::{create_token, validate_token, Claims};
/// use careermantra_shared::models::user::Role;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(1, "alice@example.com".to_string(), Role::User);
/// let secret = "a-secret-key-that-is-at-least-32-bytes";
///
/// let token = create_token(&claims, secret)?;
/// let validated = validate_token(&token, secret)?;
/// assert_eq!(validated.sub, 1);
/// assert_eq!(validated.role, Role::User);
/// # Ok(())
/// # }
/// ```
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::Role;

/// Token issuer embedded in and required from every token
const ISSUER: &str = "careermantra";

/// Fixed session lifetime: 24 hours from issuance
pub const SESSION_TTL_HOURS: i64 = 24;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature, format, or claim validation failed
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token was issued by someone else
    #[error("Invalid token issuer")]
    InvalidIssuer,
}

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user ID
    pub sub: u64,

    /// User email at issuance time
    pub email: String,

    /// Account role at issuance time
    pub role: Role,

    /// Issuer - always "careermantra"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims with the standard 24-hour expiry
    pub fn new(user_id: u64, email: String, role: Role) -> Self {
        Self::with_expiration(user_id, email, role, Duration::hours(SESSION_TTL_HOURS))
    }

    /// Creates claims with a custom expiry (used by tests to mint expired
    /// tokens)
    pub fn with_expiration(user_id: u64, email: String, role: Role, expires_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            email,
            role,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks whether the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a token string
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies the signature, expiry, and issuer. Any failure mode beyond those
/// (malformed token, altered payload, wrong algorithm) comes back as
/// `ValidationError`; callers must not surface which check failed to clients.
///
/// # Errors
///
/// - `JwtError::Expired`: token past its `exp`
/// - `JwtError::InvalidIssuer`: `iss` is not "careermantra"
/// - `JwtError::ValidationError`: anything else
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidIssuer => JwtError::InvalidIssuer,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_claims_carry_identity_and_role() {
        let claims = Claims::new(7, "r@corp.com".to_string(), Role::Recruiter);
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "r@corp.com");
        assert_eq!(claims.role, Role::Recruiter);
        assert_eq!(claims.iss, "careermantra");
        assert!(!claims.is_expired());
        // 24h window
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_HOURS * 3600);
    }

    #[test]
    fn test_token_roundtrip() {
        let claims = Claims::new(1, "alice@x.com".to_string(), Role::User);
        let token = create_token(&claims, SECRET).expect("should create token");

        let validated = validate_token(&token, SECRET).expect("should validate token");
        assert_eq!(validated.sub, 1);
        assert_eq!(validated.email, "alice@x.com");
        assert_eq!(validated.role, Role::User);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let claims = Claims::new(1, "alice@x.com".to_string(), Role::User);
        let token = create_token(&claims, SECRET).unwrap();

        assert!(validate_token(&token, "some-other-secret-of-32-bytes!!!").is_err());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let claims = Claims::new(1, "alice@x.com".to_string(), Role::User);
        let token = create_token(&claims, SECRET).unwrap();

        // Flip a character inside the payload segment; the signature no
        // longer matches
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        parts[1] = payload.into_iter().collect();
        let tampered = parts.join(".");

        assert!(validate_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let claims = Claims::with_expiration(
            1,
            "alice@x.com".to_string(),
            Role::User,
            Duration::seconds(-3600),
        );
        assert!(claims.is_expired());

        let token = create_token(&claims, SECRET).unwrap();
        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(validate_token("not-a-token", SECRET).is_err());
        assert!(validate_token("", SECRET).is_err());
    }
}
