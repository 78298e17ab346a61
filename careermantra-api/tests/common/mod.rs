/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory app construction with a mock AI backend
/// - Request/response helpers over `tower::Service`
/// - Registration and login shortcuts
use axum::body::Body;
use axum::http::{Request, StatusCode};
use careermantra_api::ai::{ChatModel, DisabledModel, MockModel};
use careermantra_api::app::{build_router, AppState};
use careermantra_api::config::{AiConfig, ApiConfig, Config, JwtConfig};
use careermantra_shared::store::Store;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Service as _;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";
pub const BOOTSTRAP_ADMIN_EMAIL: &str = "admin@careermantra.app";

/// Test context wrapping the app router
pub struct TestContext {
    pub app: axum::Router,
    pub state: AppState,
}

/// Builds the configuration used by every test app
pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
        ai: AiConfig {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
        },
        bootstrap_admin_email: BOOTSTRAP_ADMIN_EMAIL.to_string(),
        cors_origins: vec![],
    }
}

impl TestContext {
    /// Creates a context whose AI backend always replies with `reply`
    pub fn with_ai_reply(reply: &str) -> Self {
        Self::build(Arc::new(MockModel::new(reply)))
    }

    /// Creates a context with AI disabled (no API key configured)
    pub fn without_ai() -> Self {
        Self::build(Arc::new(DisabledModel))
    }

    /// Creates a default context; tests that don't touch AI use this
    pub fn new() -> Self {
        Self::with_ai_reply("mock reply")
    }

    fn build(ai: Arc<dyn ChatModel>) -> Self {
        let state = AppState::new(Store::new(), ai, test_config());
        let app = build_router(state.clone());
        TestContext { app, state }
    }

    /// Sends a JSON request and returns (status, parsed body)
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Registers an account through the API
    pub async fn register(&self, email: &str, name: &str, role: &str) -> Value {
        let mut body = json!({
            "email": email,
            "password": "password123",
            "name": name,
            "role": role,
        });
        if role == "recruiter" {
            body["company"] = json!("Acme Corp");
        }
        let (status, value) = self
            .request("POST", "/api/auth/register", None, Some(body))
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", value);
        value
    }

    /// Logs in and returns the session token
    pub async fn login(&self, email: &str) -> String {
        let (status, value) = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": "password123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", value);
        value["token"].as_str().unwrap().to_string()
    }

    /// Registers and logs in, returning the session token
    pub async fn register_and_login(&self, email: &str, name: &str, role: &str) -> String {
        self.register(email, name, role).await;
        self.login(email).await
    }

    /// Creates a recruiter with one active job posting, returning
    /// (recruiter token, job id)
    pub async fn recruiter_with_job(&self, email: &str) -> (String, u64) {
        let token = self.register_and_login(email, "Recruiter", "recruiter").await;
        let (status, job) = self
            .request(
                "POST",
                "/api/recruiter/jobs",
                Some(&token),
                Some(sample_job()),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "job creation failed: {}", job);
        (token, job["id"].as_u64().unwrap())
    }
}

/// A valid job creation payload
pub fn sample_job() -> Value {
    json!({
        "title": "Backend Engineer",
        "company": "Acme Corp",
        "location": "Remote",
        "job_type": "full-time",
        "salary": "$120k-$150k",
        "description": "Build and run our job board backend.",
        "requirements": "Rust, HTTP APIs",
        "contact_email": "hiring@acme.example",
    })
}

/// A valid application payload
pub fn sample_application() -> Value {
    json!({
        "full_name": "Avery Applicant",
        "email": "avery@example.com",
        "phone": "555-0100",
        "location": "Remote",
        "experience": "3-5 years",
        "cover_letter": "I would love to work on this.",
        "resume_file_name": "avery_resume.pdf",
    })
}
