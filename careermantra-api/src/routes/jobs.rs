/// Job board and recruiter job management
///
/// # Endpoints
///
/// - `GET /api/jobs` - Public listing of active jobs with optional filters
/// - `POST /api/recruiter/jobs` - Create a posting (owner = caller)
/// - `GET /api/recruiter/jobs` - Caller-owned postings with counts
/// - `PUT /api/recruiter/jobs/:id` - Partial update, owner-scoped
/// - `DELETE /api/recruiter/jobs/:id` - Cascade delete, owner-scoped
///
/// A non-owner updating or deleting a posting gets `404`, not `403`, so
/// the existence of other recruiters' postings is not leaked. Admins
/// bypass the ownership scope.
use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use careermantra_shared::{
    auth::{authorization, middleware::AuthContext},
    models::job::{CreateJob, Job, JobStatus, JobType, UpdateJob},
    store::{JobFilter, JobListing},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the public listing
#[derive(Debug, Deserialize, Default)]
pub struct JobListQuery {
    /// Case-insensitive substring match on title, company, or location
    pub search: Option<String>,

    /// Exact job type match (e.g. "full-time")
    pub job_type: Option<String>,
}

/// Create job request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 200, message = "Company must be 1-200 characters"))]
    pub company: String,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    pub job_type: JobType,

    #[validate(length(min = 1, max = 100, message = "Salary must be 1-100 characters"))]
    pub salary: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Requirements are required"))]
    pub requirements: String,

    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: String,

    pub application_deadline: Option<NaiveDate>,
}

/// Partial update request
///
/// Omitted fields keep their current value. `application_deadline` is
/// double-optional on the wire: absent leaves it alone, `null` clears it.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub application_deadline: Option<Option<NaiveDate>>,
    pub status: Option<JobStatus>,
}

/// Distinguishes an absent field (outer `None`) from an explicit `null`
/// (inner `None`). Serde only calls this when the field is present.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    Ok(Some(Option::<NaiveDate>::deserialize(deserializer)?))
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    /// Confirmation message
    pub message: String,

    /// How many applications were removed with the posting
    pub removed_applications: usize,
}

/// Lists active jobs for the public board
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> ApiResult<Json<Vec<JobListing>>> {
    let filter = JobFilter {
        search: query.search,
        job_type: query.job_type,
    };
    Ok(Json(state.store.list_active_jobs(&filter).await))
}

/// Creates a job posting owned by the caller
pub async fn create_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    authorization::require_recruiter(&auth)?;
    req.validate()?;

    let job = state
        .store
        .create_job(
            auth.user_id,
            CreateJob {
                title: req.title,
                company: req.company,
                location: req.location,
                job_type: req.job_type,
                salary: req.salary,
                description: req.description,
                requirements: req.requirements,
                contact_email: req.contact_email,
                application_deadline: req.application_deadline,
            },
        )
        .await;

    tracing::info!(job_id = job.id, recruiter_id = auth.user_id, "job created");

    Ok((StatusCode::CREATED, Json(job)))
}

/// Lists the caller's own postings with application counts
pub async fn list_my_jobs(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<JobListing>>> {
    authorization::require_recruiter(&auth)?;
    Ok(Json(state.store.list_jobs_by_owner(auth.user_id).await))
}

/// Partially updates a posting
pub async fn update_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateJobRequest>,
) -> ApiResult<Json<Job>> {
    authorization::require_recruiter(&auth)?;

    let update = UpdateJob {
        title: req.title,
        company: req.company,
        location: req.location,
        job_type: req.job_type,
        salary: req.salary,
        description: req.description,
        requirements: req.requirements,
        contact_email: req.contact_email,
        application_deadline: req.application_deadline,
        status: req.status,
    };

    let job = state
        .store
        .update_job(id, authorization::owner_scope(&auth), update)
        .await?;

    Ok(Json(job))
}

/// Deletes a posting and every application referencing it
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteJobResponse>> {
    authorization::require_recruiter(&auth)?;

    let (job, removed_applications) = state
        .store
        .delete_job_cascade(id, authorization::owner_scope(&auth))
        .await?;

    tracing::info!(
        job_id = job.id,
        removed_applications,
        "job deleted with its applications"
    );

    Ok(Json(DeleteJobResponse {
        message: "Job deleted successfully".to_string(),
        removed_applications,
    }))
}
