/// Job application model and status state machine
///
/// An application links an applicant (role=user) to a single job. At most one
/// application may exist per (job, applicant) pair. The status field moves
/// through a fixed five-value set; any transition between members of the set
/// is legal, but no other value is ever accepted.
///
/// Applications are removed only when their referenced job is deleted
/// (cascade); no standalone delete operation exists.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of an application
///
/// The full value domain. `updateStatus` rejects anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Initial status on submission
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Status as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "hired" => Ok(ApplicationStatus::Hired),
            other => Err(format!("Invalid application status: {}", other)),
        }
    }
}

/// Job application record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application ID, assigned by the store on creation
    pub id: u64,

    /// Referenced job ID (must exist at creation time)
    pub job_id: u64,

    /// Applicant's user ID
    pub applicant_id: u64,

    /// Applicant's full name as entered on the form
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Applicant's location
    pub location: String,

    /// Years of experience (free text, e.g. "3-5")
    pub experience: String,

    /// LinkedIn profile URL
    pub linkedin_profile: Option<String>,

    /// Portfolio URL
    pub portfolio_url: Option<String>,

    /// Cover letter text
    pub cover_letter: String,

    /// Uploaded resume file name, if any
    ///
    /// Storage mechanics are out of scope; only the reference is kept.
    pub resume_file_name: Option<String>,

    /// Review status
    pub status: ApplicationStatus,

    /// When the application was submitted
    pub applied_at: DateTime<Utc>,

    /// When the application was last updated (status changes)
    pub updated_at: DateTime<Utc>,
}

/// Input for submitting an application
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub job_id: u64,
    pub applicant_id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience: String,
    pub linkedin_profile: Option<String>,
    pub portfolio_url: Option<String>,
    pub cover_letter: String,
    pub resume_file_name: Option<String>,
}

/// Application joined with display fields from its job
///
/// Built on read; the store never keeps back-references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithJob {
    /// The application record
    #[serde(flatten)]
    pub application: Application,

    /// Title of the referenced job
    pub job_title: String,

    /// Company of the referenced job
    pub company: String,
}
