/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)
/// - `profile`: Current-user profile
/// - `jobs`: Public job board and recruiter job management
/// - `applications`: Applying and application review
/// - `admin`: User administration
/// - `ai`: Career-coach AI endpoints
pub mod admin;
pub mod ai;
pub mod applications;
pub mod auth;
pub mod health;
pub mod jobs;
pub mod profile;
