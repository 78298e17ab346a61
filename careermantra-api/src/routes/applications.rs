/// Applying to jobs and reviewing applications
///
/// # Endpoints
///
/// - `POST /api/jobs/:id/apply` - Submit an application (job seekers)
/// - `GET /api/applications/mine` - The caller's own applications
/// - `GET /api/recruiter/applications` - Applications to caller-owned jobs
/// - `PUT /api/recruiter/applications/:id/status` - Review status update
/// - `GET /api/recruiter/applications/:id/resume` - Resume reference
///
/// Recruiter operations are scoped to jobs the caller owns; admins bypass
/// the scope and see everything.
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use careermantra_shared::{
    auth::{authorization, middleware::AuthContext},
    models::application::{Application, ApplicationStatus, ApplicationWithJob, CreateApplication},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Application submission request
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyRequest {
    #[validate(length(min = 1, max = 200, message = "Full name must be 1-200 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "Phone must be 1-50 characters"))]
    pub phone: String,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 100, message = "Experience must be 1-100 characters"))]
    pub experience: String,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_profile: Option<String>,

    #[validate(url(message = "Invalid portfolio URL"))]
    pub portfolio_url: Option<String>,

    #[validate(length(min = 1, message = "Cover letter is required"))]
    pub cover_letter: String,

    /// Reference to an uploaded resume; storage is handled elsewhere
    pub resume_file_name: Option<String>,
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// One of: pending, reviewed, shortlisted, rejected, hired
    pub status: String,
}

/// Resume reference response
#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    /// Application the resume belongs to
    pub application_id: u64,

    /// Applicant display name
    pub full_name: String,

    /// Stored file reference
    pub resume_file_name: String,
}

/// Submits an application to an active job
///
/// One application per (job, applicant) pair.
///
/// # Errors
///
/// - `404 Not Found`: job missing or no longer active
/// - `409 Conflict`: caller already applied to this job
pub async fn apply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(job_id): Path<u64>,
    Json(req): Json<ApplyRequest>,
) -> ApiResult<(StatusCode, Json<Application>)> {
    authorization::require_applicant(&auth)?;
    req.validate()?;

    let application = state
        .store
        .apply(CreateApplication {
            job_id,
            applicant_id: auth.user_id,
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            location: req.location,
            experience: req.experience,
            linkedin_profile: req.linkedin_profile,
            portfolio_url: req.portfolio_url,
            cover_letter: req.cover_letter,
            resume_file_name: req.resume_file_name,
        })
        .await?;

    tracing::info!(
        application_id = application.id,
        job_id,
        applicant_id = auth.user_id,
        "application submitted"
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// Lists the caller's own applications, joined with job display data
pub async fn list_my_applications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<ApplicationWithJob>>> {
    authorization::require_applicant(&auth)?;
    Ok(Json(
        state
            .store
            .list_applications_for_applicant(auth.user_id)
            .await,
    ))
}

/// Lists applications to jobs the caller owns; admins see all
pub async fn list_received_applications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<ApplicationWithJob>>> {
    authorization::require_recruiter(&auth)?;
    Ok(Json(
        state
            .store
            .list_applications_for_recruiter(authorization::owner_scope(&auth))
            .await,
    ))
}

/// Updates an application's review status
///
/// # Errors
///
/// - `400 Bad Request`: status outside the five known values
/// - `403 Forbidden`: caller does not own the referenced job
/// - `404 Not Found`: no such application
pub async fn update_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Application>> {
    authorization::require_recruiter(&auth)?;

    let status: ApplicationStatus = req.status.parse().map_err(|_| {
        ApiError::BadRequest(format!(
            "Invalid status '{}'. Must be one of: pending, reviewed, shortlisted, rejected, hired",
            req.status
        ))
    })?;

    let application = state
        .store
        .update_application_status(id, authorization::owner_scope(&auth), status)
        .await?;

    tracing::info!(
        application_id = application.id,
        status = %req.status,
        "application status updated"
    );

    Ok(Json(application))
}

/// Returns the resume reference attached to an application
///
/// # Errors
///
/// - `403 Forbidden`: caller does not own the referenced job
/// - `404 Not Found`: no such application, or no resume attached
pub async fn get_resume(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<u64>,
) -> ApiResult<Json<ResumeResponse>> {
    authorization::require_recruiter(&auth)?;

    let application = state
        .store
        .application_for_owner(id, authorization::owner_scope(&auth))
        .await?;

    let resume_file_name = application
        .resume_file_name
        .ok_or_else(|| ApiError::NotFound("No resume attached to this application".to_string()))?;

    Ok(Json(ResumeResponse {
        application_id: application.id,
        full_name: application.full_name,
        resume_file_name,
    }))
}
