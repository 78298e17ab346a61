/// User table operations
///
/// Email uniqueness is enforced here, inside the write lock, so two
/// concurrent registrations with the same email can never both succeed.
use chrono::Utc;

use super::{Store, StoreError};
use crate::models::user::{CreateUser, Role, User};

impl Store {
    /// Inserts a new user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateEmail` if the email is already
    /// registered; the existing record is left untouched.
    pub async fn create_user(&self, data: CreateUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.rows().values().any(|u| u.email == data.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let id = users.allocate_id();
        let user = User {
            id,
            email: data.email,
            password_hash: data.password_hash,
            name: data.name,
            role: data.role,
            company: data.company,
            created_at: Utc::now(),
        };
        users.rows_mut().insert(id, user.clone());

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_user(&self, id: u64) -> Option<User> {
        self.users.read().await.rows().get(&id).cloned()
    }

    /// Finds a user by email (exact match, case-sensitive as stored)
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .rows()
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Lists all users in creation order
    pub async fn list_users(&self) -> Vec<User> {
        self.users.read().await.rows().values().cloned().collect()
    }

    /// Total number of registered users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.rows().len()
    }

    /// Changes a user's role
    ///
    /// The only path by which a role can change after registration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no user has that ID.
    pub async fn set_user_role(&self, id: u64, role: Role) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .rows_mut()
            .get_mut(&id)
            .ok_or(StoreError::UserNotFound)?;
        user.role = role;

        Ok(user.clone())
    }

    /// Removes a user and returns the deleted record
    ///
    /// The caller is responsible for the self-delete guard; the store only
    /// knows about existence.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no user has that ID.
    pub async fn remove_user(&self, id: u64) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        users.rows_mut().remove(&id).ok_or(StoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> CreateUser {
        CreateUser {
            email: "alice@x.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            name: "Alice".to_string(),
            role: Role::User,
            company: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let store = Store::new();
        let user = store.create_user(alice()).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::User);

        let found = store.find_user(1).await.unwrap();
        assert_eq!(found.email, "alice@x.com");

        let by_email = store.find_user_by_email("alice@x.com").await.unwrap();
        assert_eq!(by_email.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = Store::new();
        let first = store.create_user(alice()).await.unwrap();

        let mut dup = alice();
        dup.name = "Imposter".to_string();
        let err = store.create_user(dup).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);

        // Existing record untouched
        let stored = store.find_user(first.id).await.unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let store = Store::new();
        store.create_user(alice()).await.unwrap();
        assert!(store.find_user_by_email("Alice@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_set_role() {
        let store = Store::new();
        let user = store.create_user(alice()).await.unwrap();

        let updated = store.set_user_role(user.id, Role::Recruiter).await.unwrap();
        assert_eq!(updated.role, Role::Recruiter);
        assert_eq!(store.find_user(user.id).await.unwrap().role, Role::Recruiter);

        let err = store.set_user_role(999, Role::Admin).await.unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);
    }

    #[tokio::test]
    async fn test_remove_user() {
        let store = Store::new();
        let user = store.create_user(alice()).await.unwrap();

        let removed = store.remove_user(user.id).await.unwrap();
        assert_eq!(removed.id, user.id);
        assert!(store.find_user(user.id).await.is_none());
        assert_eq!(
            store.remove_user(user.id).await.unwrap_err(),
            StoreError::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_concurrent_registrations_get_unique_ids() {
        use std::sync::Arc;

        let store = Arc::new(Store::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_user(CreateUser {
                        email: format!("user{}@x.com", i),
                        password_hash: "h".to_string(),
                        name: format!("User {}", i),
                        role: Role::User,
                        company: None,
                    })
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16, "identifier assignment must be race-free");
    }
}
