/// Application table operations
///
/// `apply` holds the jobs read lock while inserting, so it can never race a
/// cascade delete (which holds the jobs write lock for its whole duration):
/// either the application lands before the cascade and is swept with it, or
/// the job is already gone and the apply fails with `JobNotFound`.
use chrono::Utc;

use super::{Store, StoreError};
use crate::models::application::{
    Application, ApplicationStatus, ApplicationWithJob, CreateApplication,
};

impl Store {
    /// Submits an application to an active job
    ///
    /// # Errors
    ///
    /// - `StoreError::JobNotFound`: the job doesn't exist or isn't active
    /// - `StoreError::DuplicateApplication`: this applicant already applied
    ///   to this job
    pub async fn apply(&self, data: CreateApplication) -> Result<Application, StoreError> {
        // Lock order jobs -> applications, same as the cascade delete
        let jobs = self.jobs.read().await;
        let job_open = jobs
            .rows()
            .get(&data.job_id)
            .is_some_and(|job| job.is_active());
        if !job_open {
            return Err(StoreError::JobNotFound);
        }

        let mut applications = self.applications.write().await;
        let duplicate = applications
            .rows()
            .values()
            .any(|a| a.job_id == data.job_id && a.applicant_id == data.applicant_id);
        if duplicate {
            return Err(StoreError::DuplicateApplication);
        }

        let now = Utc::now();
        let id = applications.allocate_id();
        let application = Application {
            id,
            job_id: data.job_id,
            applicant_id: data.applicant_id,
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            location: data.location,
            experience: data.experience,
            linkedin_profile: data.linkedin_profile,
            portfolio_url: data.portfolio_url,
            cover_letter: data.cover_letter,
            resume_file_name: data.resume_file_name,
            status: ApplicationStatus::Pending,
            applied_at: now,
            updated_at: now,
        };
        applications.rows_mut().insert(id, application.clone());

        Ok(application)
    }

    /// Finds an application by ID
    pub async fn find_application(&self, id: u64) -> Option<Application> {
        self.applications.read().await.rows().get(&id).cloned()
    }

    /// Applications submitted by one applicant, joined with job display data
    pub async fn list_applications_for_applicant(
        &self,
        applicant_id: u64,
    ) -> Vec<ApplicationWithJob> {
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;

        applications
            .rows()
            .values()
            .filter(|a| a.applicant_id == applicant_id)
            .map(|a| {
                let job = jobs.rows().get(&a.job_id);
                ApplicationWithJob {
                    application: a.clone(),
                    job_title: job.map(|j| j.title.clone()).unwrap_or_default(),
                    company: job.map(|j| j.company.clone()).unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Applications to jobs within the owner scope, joined with job data
    ///
    /// `Some(recruiter_id)` returns applications to that recruiter's jobs
    /// only; `None` (admin) returns every application.
    pub async fn list_applications_for_recruiter(
        &self,
        owner_scope: Option<u64>,
    ) -> Vec<ApplicationWithJob> {
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;

        applications
            .rows()
            .values()
            .filter_map(|a| {
                let job = jobs.rows().get(&a.job_id)?;
                if owner_scope.is_some_and(|owner| job.recruiter_id != owner) {
                    return None;
                }
                Some(ApplicationWithJob {
                    application: a.clone(),
                    job_title: job.title.clone(),
                    company: job.company.clone(),
                })
            })
            .collect()
    }

    /// Updates an application's review status
    ///
    /// Any of the five enumerated values is a legal target; the enum itself
    /// guarantees membership, so the only checks left are existence and
    /// ownership of the referenced job.
    ///
    /// # Errors
    ///
    /// - `StoreError::ApplicationNotFound`: no such application
    /// - `StoreError::NotJobOwner`: `owner_scope` doesn't own the referenced
    ///   job
    pub async fn update_application_status(
        &self,
        id: u64,
        owner_scope: Option<u64>,
        status: ApplicationStatus,
    ) -> Result<Application, StoreError> {
        let jobs = self.jobs.read().await;
        let mut applications = self.applications.write().await;

        let application = applications
            .rows_mut()
            .get_mut(&id)
            .ok_or(StoreError::ApplicationNotFound)?;

        if let Some(owner) = owner_scope {
            let owns_job = jobs
                .rows()
                .get(&application.job_id)
                .is_some_and(|job| job.recruiter_id == owner);
            if !owns_job {
                return Err(StoreError::NotJobOwner);
            }
        }

        application.status = status;
        application.updated_at = Utc::now();

        Ok(application.clone())
    }

    /// Fetches an application for resume access, enforcing job ownership
    ///
    /// # Errors
    ///
    /// - `StoreError::ApplicationNotFound`: no such application
    /// - `StoreError::NotJobOwner`: `owner_scope` doesn't own the referenced
    ///   job
    pub async fn application_for_owner(
        &self,
        id: u64,
        owner_scope: Option<u64>,
    ) -> Result<Application, StoreError> {
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;

        let application = applications
            .rows()
            .get(&id)
            .ok_or(StoreError::ApplicationNotFound)?;

        if let Some(owner) = owner_scope {
            let owns_job = jobs
                .rows()
                .get(&application.job_id)
                .is_some_and(|job| job.recruiter_id == owner);
            if !owns_job {
                return Err(StoreError::NotJobOwner);
            }
        }

        Ok(application.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::{CreateJob, JobStatus, JobType, UpdateJob};
    use crate::models::user::{CreateUser, Role};

    async fn seed_user(store: &Store, email: &str, role: Role) -> u64 {
        store
            .create_user(CreateUser {
                email: email.to_string(),
                password_hash: "h".to_string(),
                name: email.to_string(),
                role,
                company: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_job(store: &Store, owner: u64) -> u64 {
        store
            .create_job(
                owner,
                CreateJob {
                    title: "Backend Engineer".to_string(),
                    company: "TechCorp".to_string(),
                    location: "Remote".to_string(),
                    job_type: JobType::FullTime,
                    salary: "$100k".to_string(),
                    description: "desc".to_string(),
                    requirements: "reqs".to_string(),
                    contact_email: "jobs@techcorp.com".to_string(),
                    application_deadline: None,
                },
            )
            .await
            .id
    }

    fn submission(job_id: u64, applicant_id: u64) -> CreateApplication {
        CreateApplication {
            job_id,
            applicant_id,
            full_name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Remote".to_string(),
            experience: "3-5".to_string(),
            linkedin_profile: None,
            portfolio_url: None,
            cover_letter: "Please hire me".to_string(),
            resume_file_name: Some("alice.pdf".to_string()),
        }
    }

    #[tokio::test]
    async fn test_apply_starts_pending() {
        let store = Store::new();
        let recruiter = seed_user(&store, "r@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;
        let job = seed_job(&store, recruiter).await;

        let application = store.apply(submission(job, applicant)).await.unwrap();
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.job_id, job);
        assert_eq!(store.application_count(job).await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_application_rejected() {
        let store = Store::new();
        let recruiter = seed_user(&store, "r@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;
        let job = seed_job(&store, recruiter).await;

        store.apply(submission(job, applicant)).await.unwrap();
        let err = store.apply(submission(job, applicant)).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateApplication);
        // Count increased by exactly one across both attempts
        assert_eq!(store.application_count(job).await, 1);
    }

    #[tokio::test]
    async fn test_apply_requires_existing_active_job() {
        let store = Store::new();
        let recruiter = seed_user(&store, "r@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;

        let err = store.apply(submission(99, applicant)).await.unwrap_err();
        assert_eq!(err, StoreError::JobNotFound);

        let job = seed_job(&store, recruiter).await;
        store
            .update_job(
                job,
                Some(recruiter),
                UpdateJob {
                    status: Some(JobStatus::Closed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let err = store.apply(submission(job, applicant)).await.unwrap_err();
        assert_eq!(err, StoreError::JobNotFound);
    }

    #[tokio::test]
    async fn test_cascade_delete_removes_only_referencing_applications() {
        let store = Store::new();
        let recruiter = seed_user(&store, "r@x.com", Role::Recruiter).await;
        let alice = seed_user(&store, "a@x.com", Role::User).await;
        let bob = seed_user(&store, "b@x.com", Role::User).await;
        let doomed = seed_job(&store, recruiter).await;
        let survivor = seed_job(&store, recruiter).await;

        store.apply(submission(doomed, alice)).await.unwrap();
        store.apply(submission(doomed, bob)).await.unwrap();
        let kept = store.apply(submission(survivor, alice)).await.unwrap();

        let (_, cascaded) = store
            .delete_job_cascade(doomed, Some(recruiter))
            .await
            .unwrap();
        assert_eq!(cascaded, 2);

        // No listing, for any party, still surfaces the deleted job
        let mine = store.list_applications_for_applicant(alice).await;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].application.id, kept.id);

        let recruiter_view = store
            .list_applications_for_recruiter(Some(recruiter))
            .await;
        assert!(recruiter_view.iter().all(|a| a.application.job_id == survivor));
        assert_eq!(store.application_count(doomed).await, 0);
    }

    #[tokio::test]
    async fn test_recruiter_listing_is_owner_scoped() {
        let store = Store::new();
        let recruiter_a = seed_user(&store, "ra@x.com", Role::Recruiter).await;
        let recruiter_b = seed_user(&store, "rb@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;
        let job_a = seed_job(&store, recruiter_a).await;
        let job_b = seed_job(&store, recruiter_b).await;

        store.apply(submission(job_a, applicant)).await.unwrap();
        store.apply(submission(job_b, applicant)).await.unwrap();

        let for_a = store
            .list_applications_for_recruiter(Some(recruiter_a))
            .await;
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].application.job_id, job_a);

        // Admin scope sees everything
        let all = store.list_applications_for_recruiter(None).await;
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_status_update_requires_job_ownership() {
        let store = Store::new();
        let owner = seed_user(&store, "ra@x.com", Role::Recruiter).await;
        let intruder = seed_user(&store, "rb@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;
        let job = seed_job(&store, owner).await;
        let application = store.apply(submission(job, applicant)).await.unwrap();

        let err = store
            .update_application_status(
                application.id,
                Some(intruder),
                ApplicationStatus::Rejected,
            )
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotJobOwner);
        // Prior status intact
        assert_eq!(
            store.find_application(application.id).await.unwrap().status,
            ApplicationStatus::Pending
        );

        let updated = store
            .update_application_status(
                application.id,
                Some(owner),
                ApplicationStatus::Shortlisted,
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Shortlisted);
        assert!(updated.updated_at >= updated.applied_at);

        // Admin scope bypasses ownership
        let updated = store
            .update_application_status(application.id, None, ApplicationStatus::Hired)
            .await
            .unwrap();
        assert_eq!(updated.status, ApplicationStatus::Hired);
    }

    #[tokio::test]
    async fn test_resume_access_is_owner_scoped() {
        let store = Store::new();
        let owner = seed_user(&store, "ra@x.com", Role::Recruiter).await;
        let intruder = seed_user(&store, "rb@x.com", Role::Recruiter).await;
        let applicant = seed_user(&store, "a@x.com", Role::User).await;
        let job = seed_job(&store, owner).await;
        let application = store.apply(submission(job, applicant)).await.unwrap();

        let err = store
            .application_for_owner(application.id, Some(intruder))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotJobOwner);

        let fetched = store
            .application_for_owner(application.id, Some(owner))
            .await
            .unwrap();
        assert_eq!(fetched.resume_file_name.as_deref(), Some("alice.pdf"));
    }
}
