use std::env;

use axum::http::HeaderValue;
use tower_http::cors::AllowOrigin;

use crate::error::StartupError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table holding projects (default: "Projects")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub projects_table: String,
    /// Table holding work history items (default: "WorkHistoryItems")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub work_history_table: String,
    /// Table holding certifications (default: "Certifications")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub certifications_table: String,
    /// Origin allowed by the CORS policy, `*` for any (default: "http://localhost:3000")
    pub cors_allowed_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PROJECTS_TABLE` - Projects table name (default: "Projects")
    /// - `WORK_HISTORY_TABLE` - Work history table name (default: "WorkHistoryItems")
    /// - `CERTIFICATIONS_TABLE` - Certifications table name (default: "Certifications")
    /// - `CORS_ALLOWED_ORIGIN` - Allowed CORS origin (default: "http://localhost:3000")
    pub fn from_env() -> Self {
        Self {
            projects_table: env::var("PROJECTS_TABLE").unwrap_or_else(|_| "Projects".to_string()),
            work_history_table: env::var("WORK_HISTORY_TABLE")
                .unwrap_or_else(|_| "WorkHistoryItems".to_string()),
            certifications_table: env::var("CERTIFICATIONS_TABLE")
                .unwrap_or_else(|_| "Certifications".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// Parse the configured origin into a CORS origin policy.
    pub fn allowed_origin(&self) -> Result<AllowOrigin, StartupError> {
        let origin = self.cors_allowed_origin.trim();
        if origin == "*" {
            return Ok(AllowOrigin::any());
        }

        HeaderValue::from_str(origin)
            .map(AllowOrigin::exact)
            .map_err(|_| StartupError::InvalidOrigin(origin.to_string()))
    }
}
