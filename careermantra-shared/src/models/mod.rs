/// Domain models for Career Mantra
///
/// This module contains the plain data structures shared across the API.
/// CRUD operations live in the [`crate::store`] module; models hold the data
/// and the small invariant helpers (role checks, status parsing, partial
/// updates).
///
/// # Models
///
/// - `user`: User accounts and the role enumeration
/// - `job`: Job postings owned by recruiters
/// - `application`: Job applications and the status state machine
///
/// # Example
///
/// ```
/// use careermantra_shared::models::application::ApplicationStatus;
///
/// let status: ApplicationStatus = "shortlisted".parse().unwrap();
/// assert_eq!(status.as_str(), "shortlisted");
/// ```

pub mod application;
pub mod job;
pub mod user;
