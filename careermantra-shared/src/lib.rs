//! # Career Mantra Shared Library
//!
//! Shared types and business logic for the Career Mantra API server.
//!
//! ## Module Organization
//!
//! - `models`: Domain models (users, jobs, applications)
//! - `auth`: Authentication and authorization primitives
//! - `store`: The in-memory data store and its access-control scoping

pub mod auth;
pub mod models;
pub mod store;

/// Current version of the Career Mantra shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
