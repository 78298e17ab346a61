/// User model and role definitions
///
/// This module provides the User account model and the role enumeration that
/// drives authorization across the API.
///
/// # Roles
///
/// - **user**: Can browse jobs and submit applications
/// - **recruiter**: Can post jobs and manage applications to their own jobs
/// - **admin**: Full access, including user management; admitted wherever
///   recruiter access is required
///
/// # Example
///
/// ```
/// use careermantra_shared::models::user::{Role, User};
/// use chrono::Utc;
///
/// let user = User {
///     id: 1,
///     email: "alice@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     name: "Alice".to_string(),
///     role: Role::User,
///     company: None,
///     created_at: Utc::now(),
/// };
///
/// assert!(!user.role.can_post_jobs());
/// ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role determining which operations are permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker: browse and apply
    User,

    /// Posts jobs, reviews applications to own jobs
    Recruiter,

    /// Full access, user management
    Admin,
}

impl Role {
    /// Role as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// Can create/update/delete job postings
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, Role::Recruiter | Role::Admin)
    }

    /// Can submit applications (recruiters and admins cannot apply)
    pub fn can_apply(&self) -> bool {
        matches!(self, Role::User)
    }

    /// Can manage user accounts (list, delete, change roles)
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "recruiter" => Ok(Role::Recruiter),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User account record
///
/// Passwords are stored as Argon2id hashes, never in plaintext. The `company`
/// field is only meaningful for recruiters and is dropped for other roles at
/// registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID, assigned by the store on creation
    pub id: u64,

    /// Email address, unique across all users (case-sensitive as stored)
    pub email: String,

    /// Argon2id password hash
    ///
    /// Never store plaintext passwords!
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Company name (recruiters only)
    pub company: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of the account, safe to return to clients
    ///
    /// Strips the password hash.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            company: self.company.clone(),
            created_at: self.created_at,
        }
    }
}

/// Client-facing user representation without credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    /// User ID
    pub id: u64,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Company name (recruiters only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// The password must already be hashed by the caller.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Email address (checked for uniqueness by the store)
    pub email: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Company name (recruiters only)
    pub company: Option<String>,
}
