/// Job posting model
///
/// A job posting is owned by the recruiter who created it; the owner reference
/// is immutable after creation. Status and all descriptive fields can be
/// updated by the owner (or an admin). The visible application count is not
/// stored here -- it is computed on read by scanning the application store.
///
/// # Lifecycle
///
/// Created by a recruiter or admin with status `active`; updated by its owner;
/// deleted by its owner, which cascade-deletes every application referencing
/// it.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment type of a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// Job type as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Posting status
///
/// Only `active` jobs appear in the public listing and accept applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Closed,
}

/// Job posting record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job ID, assigned by the store on creation
    pub id: u64,

    /// Owning recruiter's user ID (immutable after creation)
    pub recruiter_id: u64,

    /// Position title
    pub title: String,

    /// Hiring company name
    pub company: String,

    /// Work location
    pub location: String,

    /// Employment type
    pub job_type: JobType,

    /// Free-text salary range
    pub salary: String,

    /// Role description
    pub description: String,

    /// Requirements / qualifications
    pub requirements: String,

    /// Contact email for the posting
    pub contact_email: String,

    /// Application deadline
    pub application_deadline: Option<NaiveDate>,

    /// Posting status
    pub status: JobStatus,

    /// When the posting was created
    pub created_at: DateTime<Utc>,

    /// When the posting was last updated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Whether the job currently accepts applications
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Input for creating a job posting
#[derive(Debug, Clone)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    pub contact_email: String,
    pub application_deadline: Option<NaiveDate>,
}

/// Partial update for a job posting
///
/// Only non-None fields are applied; omitted fields retain their prior value.
/// The owner reference cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub application_deadline: Option<Option<NaiveDate>>,
    pub status: Option<JobStatus>,
}

impl UpdateJob {
    /// Applies the update in place and bumps `updated_at`
    pub fn apply(self, job: &mut Job, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(salary) = self.salary {
            job.salary = salary;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(contact_email) = self.contact_email {
            job.contact_email = contact_email;
        }
        if let Some(deadline) = self.application_deadline {
            job.application_deadline = deadline;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        job.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job {
            id: 1,
            recruiter_id: 10,
            title: "Backend Engineer".to_string(),
            company: "TechCorp".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            salary: "$120k-$150k".to_string(),
            description: "Build things".to_string(),
            requirements: "Rust".to_string(),
            contact_email: "jobs@techcorp.com".to_string(),
            application_deadline: None,
            status: JobStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_job_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            "\"full-time\""
        );
        let parsed: JobType = serde_json::from_str("\"part-time\"").unwrap();
        assert_eq!(parsed, JobType::PartTime);
    }

    #[test]
    fn test_partial_update_retains_omitted_fields() {
        let mut job = sample_job();
        let created = job.created_at;

        let update = UpdateJob {
            title: Some("Senior Backend Engineer".to_string()),
            status: Some(JobStatus::Closed),
            ..Default::default()
        };
        update.apply(&mut job, Utc::now());

        assert_eq!(job.title, "Senior Backend Engineer");
        assert_eq!(job.status, JobStatus::Closed);
        // Untouched fields keep their prior values
        assert_eq!(job.company, "TechCorp");
        assert_eq!(job.recruiter_id, 10);
        assert_eq!(job.created_at, created);
        assert!(job.updated_at >= created);
    }

    #[test]
    fn test_deadline_can_be_cleared() {
        let mut job = sample_job();
        job.application_deadline = NaiveDate::from_ymd_opt(2026, 12, 31);

        let update = UpdateJob {
            application_deadline: Some(None),
            ..Default::default()
        };
        update.apply(&mut job, Utc::now());
        assert!(job.application_deadline.is_none());
    }

    #[test]
    fn test_is_active() {
        let mut job = sample_job();
        assert!(job.is_active());
        job.status = JobStatus::Closed;
        assert!(!job.is_active());
    }
}
