/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
use crate::{ai::ChatModel, config::Config, middleware::security::security_headers};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    routing::{delete, get, post, put},
    Router,
};
use careermantra_shared::{auth::middleware, store::Store};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// In-memory data store
    pub store: Arc<Store>,

    /// AI chat backend
    pub ai: Arc<dyn ChatModel>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: Store, ai: Arc<dyn ChatModel>, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            ai,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                                # Health check (public)
/// └── /api/
///     ├── /auth/register, /auth/login        # Public
///     ├── /user/profile                      # Any authenticated user
///     ├── /jobs                              # Public job board
///     ├── /jobs/:id/apply                    # Job seekers
///     ├── /applications/mine                 # Job seekers
///     ├── /recruiter/...                     # Recruiters (admin override)
///     ├── /admin/users...                    # Admins only
///     └── /chat, /analyze-resume,
///         /generate-roadmap                  # Public AI endpoints
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Security headers
/// 4. Authentication (per-group basis)
///
/// Role and ownership checks live inside the handlers; the auth layer only
/// establishes identity.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public endpoints
    let public_routes = Router::new()
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login))
        .route("/jobs", get(routes::jobs::list_jobs))
        .route("/chat", post(routes::ai::chat))
        .route("/analyze-resume", post(routes::ai::analyze_resume))
        .route("/generate-roadmap", post(routes::ai::generate_roadmap));

    // Endpoints for any authenticated user
    let user_routes = Router::new()
        .route("/user/profile", get(routes::profile::get_profile))
        .route("/jobs/:id/apply", post(routes::applications::apply))
        .route(
            "/applications/mine",
            get(routes::applications::list_my_applications),
        );

    // Recruiter endpoints (admins pass the role check as superusers)
    let recruiter_routes = Router::new()
        .route(
            "/jobs",
            post(routes::jobs::create_job).get(routes::jobs::list_my_jobs),
        )
        .route(
            "/jobs/:id",
            put(routes::jobs::update_job).delete(routes::jobs::delete_job),
        )
        .route(
            "/applications",
            get(routes::applications::list_received_applications),
        )
        .route(
            "/applications/:id/status",
            put(routes::applications::update_status),
        )
        .route(
            "/applications/:id/resume",
            get(routes::applications::get_resume),
        );

    // Admin endpoints
    let admin_routes = Router::new()
        .route("/users", get(routes::admin::list_users))
        .route("/users/:id", delete(routes::admin::delete_user))
        .route("/users/:id/role", put(routes::admin::set_user_role));

    let authenticated = Router::new()
        .merge(user_routes)
        .nest("/recruiter", recruiter_routes)
        .nest("/admin", admin_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_layer,
        ));

    let api_routes = Router::new().merge(public_routes).merge(authenticated);

    // Configure CORS based on environment
    let cors = if state.config.cors_origins.is_empty() {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state)
}

/// JWT authentication middleware layer
///
/// Extracts and validates the bearer token from the Authorization header,
/// then injects AuthContext into request extensions.
async fn jwt_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, crate::error::ApiError> {
    let auth_context = middleware::verify_bearer(req.headers(), state.jwt_secret())?;
    req.extensions_mut().insert(auth_context);
    Ok(next.run(req).await)
}
