//! DynamoDB client setup.
//!
//! The client is built once at startup and cloned into every repository.
//! Cloning an SDK client shares the underlying connection pool.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::config::ProvideCredentials;
use aws_sdk_dynamodb::Client;

use crate::error::StartupError;

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl AwsConfig {
    /// Reads `AWS_ENDPOINT_URL` and `AWS_REGION` (default: "us-east-1").
    pub fn from_env() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials are resolved eagerly so a misconfigured environment fails
/// here instead of on the first request.
pub async fn create_client(config: &AwsConfig) -> Result<Client, StartupError> {
    let mut sdk_config_loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;

    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        StartupError::MissingCredentials("no credentials provider configured".to_string())
    })?;
    provider
        .provide_credentials()
        .await
        .map_err(|err| StartupError::MissingCredentials(err.to_string()))?;

    tracing::info!(backend = %config.target_display(), "DynamoDB client ready");

    Ok(Client::new(&sdk_config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display_local() {
        let config = AwsConfig {
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: "us-east-1".to_string(),
        };
        assert_eq!(config.target_display(), "Local DynamoDB (http://localhost:8000)");
    }

    #[test]
    fn test_target_display_aws() {
        let config = AwsConfig {
            endpoint_url: None,
            region: "us-west-2".to_string(),
        };
        assert_eq!(config.target_display(), "AWS DynamoDB (region: us-west-2)");
    }
}
