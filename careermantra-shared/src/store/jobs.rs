/// Job table operations
///
/// Mutations take an `owner_scope`: `Some(recruiter_id)` restricts the
/// operation to jobs owned by that recruiter, `None` (admin) bypasses the
/// ownership filter. Existence and ownership are checked together, so a
/// non-owner gets the same `JobNotFound` as a genuinely missing job and
/// cannot probe for postings they don't own.
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Store, StoreError};
use crate::models::job::{CreateJob, Job, JobStatus, UpdateJob};

/// A job joined with read-time display data
///
/// `application_count` always equals the live number of applications
/// referencing the job; it is recomputed on every read, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    /// The posting
    #[serde(flatten)]
    pub job: Job,

    /// Live count of applications referencing this job
    pub application_count: usize,

    /// Display name of the posting recruiter, if the account still exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_name: Option<String>,
}

/// Filters for the public job listing
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Case-insensitive substring match on title, company, or location
    pub search: Option<String>,

    /// Exact job type match (wire string, e.g. "full-time")
    pub job_type: Option<String>,
}

impl JobFilter {
    fn matches(&self, job: &Job) -> bool {
        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let hit = job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
                || job.location.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(ref job_type) = self.job_type {
            if job.job_type.as_str() != job_type {
                return false;
            }
        }
        true
    }
}

impl Store {
    /// Creates a job posting owned by `recruiter_id`
    ///
    /// Status starts as `active`; timestamps are set to now.
    pub async fn create_job(&self, recruiter_id: u64, data: CreateJob) -> Job {
        let mut jobs = self.jobs.write().await;
        let now = Utc::now();

        let id = jobs.allocate_id();
        let job = Job {
            id,
            recruiter_id,
            title: data.title,
            company: data.company,
            location: data.location,
            job_type: data.job_type,
            salary: data.salary,
            description: data.description,
            requirements: data.requirements,
            contact_email: data.contact_email,
            application_deadline: data.application_deadline,
            status: JobStatus::Active,
            created_at: now,
            updated_at: now,
        };
        jobs.rows_mut().insert(id, job.clone());

        job
    }

    /// Finds a job by ID
    pub async fn find_job(&self, id: u64) -> Option<Job> {
        self.jobs.read().await.rows().get(&id).cloned()
    }

    /// Public listing: active jobs with counts and recruiter display names
    ///
    /// Lock order users -> jobs -> applications.
    pub async fn list_active_jobs(&self, filter: &JobFilter) -> Vec<JobListing> {
        let users = self.users.read().await;
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;

        jobs.rows()
            .values()
            .filter(|job| job.is_active() && filter.matches(job))
            .map(|job| JobListing {
                job: job.clone(),
                application_count: applications
                    .rows()
                    .values()
                    .filter(|a| a.job_id == job.id)
                    .count(),
                recruiter_name: users
                    .rows()
                    .get(&job.recruiter_id)
                    .map(|u| u.name.clone()),
            })
            .collect()
    }

    /// Jobs owned by a recruiter, regardless of status, with counts
    pub async fn list_jobs_by_owner(&self, recruiter_id: u64) -> Vec<JobListing> {
        let users = self.users.read().await;
        let jobs = self.jobs.read().await;
        let applications = self.applications.read().await;

        jobs.rows()
            .values()
            .filter(|job| job.recruiter_id == recruiter_id)
            .map(|job| JobListing {
                job: job.clone(),
                application_count: applications
                    .rows()
                    .values()
                    .filter(|a| a.job_id == job.id)
                    .count(),
                recruiter_name: users
                    .rows()
                    .get(&job.recruiter_id)
                    .map(|u| u.name.clone()),
            })
            .collect()
    }

    /// Live number of applications referencing a job
    pub async fn application_count(&self, job_id: u64) -> usize {
        self.applications
            .read()
            .await
            .rows()
            .values()
            .filter(|a| a.job_id == job_id)
            .count()
    }

    /// Partially updates a job
    ///
    /// Omitted fields retain their prior value; the owner reference cannot
    /// change.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::JobNotFound` when the job doesn't exist or
    /// `owner_scope` doesn't match its owner.
    pub async fn update_job(
        &self,
        id: u64,
        owner_scope: Option<u64>,
        update: UpdateJob,
    ) -> Result<Job, StoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .rows_mut()
            .get_mut(&id)
            .filter(|job| owner_scope.is_none_or(|owner| job.recruiter_id == owner))
            .ok_or(StoreError::JobNotFound)?;

        update.apply(job, Utc::now());

        Ok(job.clone())
    }

    /// Deletes a job and every application referencing it
    ///
    /// The jobs write lock is held across the application sweep, so a
    /// concurrent `apply` (which takes the jobs lock first) can never slip an
    /// application in between the two steps and leave an orphan.
    ///
    /// # Returns
    ///
    /// The deleted job and the number of applications removed with it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::JobNotFound` when the job doesn't exist or
    /// `owner_scope` doesn't match its owner.
    pub async fn delete_job_cascade(
        &self,
        id: u64,
        owner_scope: Option<u64>,
    ) -> Result<(Job, usize), StoreError> {
        let mut jobs = self.jobs.write().await;

        let owned = jobs
            .rows()
            .get(&id)
            .is_some_and(|job| owner_scope.is_none_or(|owner| job.recruiter_id == owner));
        if !owned {
            return Err(StoreError::JobNotFound);
        }
        let job = jobs
            .rows_mut()
            .remove(&id)
            .ok_or(StoreError::JobNotFound)?;

        let mut applications = self.applications.write().await;
        let before = applications.rows().len();
        applications.rows_mut().retain(|_, a| a.job_id != id);
        let cascaded = before - applications.rows().len();

        Ok((job, cascaded))
    }
}
