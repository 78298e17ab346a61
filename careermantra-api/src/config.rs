/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 3001)
/// - `JWT_SECRET`: Secret key for JWT signing (required)
/// - `GEMINI_API_KEY`: Gemini API key; AI routes return 503 when unset
/// - `GEMINI_MODEL`: Gemini model name (default: gemini-2.5-flash)
/// - `BOOTSTRAP_ADMIN_EMAIL`: email granted the admin role on registration
/// - `CORS_ORIGINS`: comma-separated allowed origins (default: any)
/// - `RUST_LOG`: Log level (default: info)
use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// AI provider configuration
    pub ai: AiConfig,

    /// Email that is promoted to the admin role when it registers
    pub bootstrap_admin_email: String,

    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for JWT signing
    ///
    /// IMPORTANT: This must be kept secret and should be at least 32 bytes.
    /// Generate with: `openssl rand -hex 32`
    pub secret: String,
}

/// AI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Gemini API key; `None` disables the AI routes
    pub api_key: Option<String>,

    /// Gemini model name
    pub model: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `JWT_SECRET` is missing or shorter than 32 characters
    /// - `API_PORT` is not a valid port number
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?;

        if jwt_secret.len() < 32 {
            anyhow::bail!("JWT_SECRET must be at least 32 characters long");
        }

        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let bootstrap_admin_email = env::var("BOOTSTRAP_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@careermantra.app".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            jwt: JwtConfig { secret: jwt_secret },
            ai: AiConfig {
                api_key: gemini_api_key,
                model: gemini_model,
            },
            bootstrap_admin_email,
            cors_origins,
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 3001,
            },
            jwt: JwtConfig {
                secret: "test-secret-key-at-least-32-bytes-long".to_string(),
            },
            ai: AiConfig {
                api_key: None,
                model: "gemini-2.5-flash".to_string(),
            },
            bootstrap_admin_email: "admin@careermantra.app".to_string(),
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_bind_address() {
        let config = test_config();
        assert_eq!(config.bind_address(), "127.0.0.1:3001");
    }

    #[test]
    fn test_ai_disabled_without_key() {
        let config = test_config();
        assert!(config.ai.api_key.is_none());
    }
}
