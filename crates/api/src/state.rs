//! Application state with repository-based storage.
//!
//! The state is built once before the server starts listening and never
//! mutated afterwards. Each resource gets its own repository trait object;
//! the concrete backend is chosen by feature flag.

use std::sync::Arc;

use tower_http::cors::AllowOrigin;

use portfolio_core::records::{Certification, Project, WorkHistoryItem};
use portfolio_core::storage::RecordRepository;

/// Shared application state.
///
/// Cloned into the router; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Project repository.
    pub projects: Arc<dyn RecordRepository<Project>>,
    /// Work history repository.
    pub work_history: Arc<dyn RecordRepository<WorkHistoryItem>>,
    /// Certification repository.
    pub certifications: Arc<dyn RecordRepository<Certification>>,
    /// Origin allowed by the CORS policy.
    pub cors_origin: AllowOrigin,
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::config::Config;
    use crate::error::StartupError;
    use crate::storage::dynamodb::{create_client, AwsConfig};
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        ///
        /// One client is created here and shared by the three repositories.
        pub async fn new(config: &Config) -> Result<Self, StartupError> {
            let cors_origin = config.allowed_origin()?;
            let client = create_client(&AwsConfig::from_env()).await?;

            let projects: DynamoDbRepository<Project> =
                DynamoDbRepository::new(client.clone(), &config.projects_table);
            let work_history: DynamoDbRepository<WorkHistoryItem> =
                DynamoDbRepository::new(client.clone(), &config.work_history_table);
            let certifications: DynamoDbRepository<Certification> =
                DynamoDbRepository::new(client, &config.certifications_table);

            tracing::info!(
                projects = projects.table_name(),
                work_history = work_history.table_name(),
                certifications = certifications.table_name(),
                "Using DynamoDB storage"
            );

            Ok(Self {
                projects: Arc::new(projects),
                work_history: Arc::new(work_history),
                certifications: Arc::new(certifications),
                cors_origin,
            })
        }
    }
}

#[cfg(not(feature = "dynamodb"))]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;
    use crate::error::StartupError;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development without any AWS account.
        pub async fn new(config: &Config) -> Result<Self, StartupError> {
            let cors_origin = config.allowed_origin()?;

            tracing::warn!("Using in-memory storage, records are lost on shutdown");

            Ok(Self {
                projects: Arc::new(InMemoryRepository::<Project>::new()),
                work_history: Arc::new(InMemoryRepository::<WorkHistoryItem>::new()),
                certifications: Arc::new(InMemoryRepository::<Certification>::new()),
                cors_origin,
            })
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use axum::http::HeaderValue;

    use crate::storage::InMemoryRepository;

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        ///
        /// This is only available in test builds and provides a simple way
        /// to create an AppState without external dependencies.
        fn default() -> Self {
            Self {
                projects: Arc::new(InMemoryRepository::<Project>::new()),
                work_history: Arc::new(InMemoryRepository::<WorkHistoryItem>::new()),
                certifications: Arc::new(InMemoryRepository::<Certification>::new()),
                cors_origin: AllowOrigin::exact(HeaderValue::from_static(
                    "http://localhost:3000",
                )),
            }
        }
    }
}
