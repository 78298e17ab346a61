/// In-memory data store
///
/// This module provides the process-lifetime store backing all domain data.
/// There is no persistence: state lives exactly as long as the process, which
/// is the contract of the system. The store is injected into the API as an
/// `Arc<Store>` so tests and handlers never depend on the storage medium.
///
/// # Concurrency
///
/// Each collection sits behind its own `tokio::sync::RwLock`, and identifier
/// assignment happens inside the write lock, so concurrent requests can never
/// observe duplicate IDs or lose updates. Compound operations (applying to a
/// job, cascade-deleting a job, read-time joins) always acquire locks in the
/// fixed order users -> jobs -> applications to rule out deadlock.
///
/// # Tables
///
/// - `users`: account records, unique by email
/// - `jobs`: postings, owned by a recruiter ID
/// - `applications`: one per (job, applicant) pair
///
/// Cross-references are by ID only; joins and counts are computed on read by
/// scanning the referenced collection. No table holds back-references.
///
/// # Example
///
/// ```
/// use careermantra_shared::models::user::{CreateUser, Role};
/// use careermantra_shared::store::Store;
///
/// # async fn example() -> Result<(), careermantra_shared::store::StoreError> {
/// let store = Store::new();
///
/// let user = store
///     .create_user(CreateUser {
///         email: "alice@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///         name: "Alice".to_string(),
///         role: Role::User,
///         company: None,
///     })
///     .await?;
///
/// assert_eq!(user.id, 1);
/// # Ok(())
/// # }
/// ```
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::User;

mod applications;
mod jobs;
mod users;

pub use jobs::{JobFilter, JobListing};

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Email is already registered
    #[error("User already exists with this email")]
    DuplicateEmail,

    /// The (job, applicant) pair already has an application
    #[error("You have already applied to this job")]
    DuplicateApplication,

    /// No such user
    #[error("User not found")]
    UserNotFound,

    /// No such job, job inactive, or job not owned by the caller
    ///
    /// Deliberately covers "exists but you don't own it" so non-owners can't
    /// probe for existence.
    #[error("Job not found")]
    JobNotFound,

    /// No such application
    #[error("Application not found")]
    ApplicationNotFound,

    /// Caller does not own the job the application references
    #[error("You do not own the job this application belongs to")]
    NotJobOwner,
}

/// A single collection with its identifier counter
///
/// `BTreeMap` keeps iteration ordered by ID, so listings come back in
/// creation order without a separate sort.
#[derive(Debug)]
pub(crate) struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Hands out the next identifier
    ///
    /// Called only while holding the table's write lock.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rows(&self) -> &BTreeMap<u64, T> {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut BTreeMap<u64, T> {
        &mut self.rows
    }
}

/// The in-memory store for all domain data
///
/// Cheap to share via `Arc`; every method takes `&self`.
#[derive(Debug)]
pub struct Store {
    pub(crate) users: RwLock<Table<User>>,
    pub(crate) jobs: RwLock<Table<Job>>,
    pub(crate) applications: RwLock<Table<Application>>,
}

impl Store {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Table::new()),
            jobs: RwLock::new(Table::new()),
            applications: RwLock::new(Table::new()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_are_sequential() {
        let mut table: Table<u32> = Table::new();
        assert_eq!(table.allocate_id(), 1);
        assert_eq!(table.allocate_id(), 2);
        assert_eq!(table.allocate_id(), 3);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut table: Table<u32> = Table::new();
        let first = table.allocate_id();
        table.rows_mut().insert(first, 42);
        table.rows_mut().remove(&first);
        // A removed row's ID must never be handed out again
        assert_eq!(table.allocate_id(), 2);
    }
}
