// src/config.rs
//! Unified configuration management - everything comes from the environment

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub database_path: PathBuf,
}

/// Settings for verifying tokens issued by the hosted identity provider,
/// plus the service key protecting the admin endpoints.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub project_id: String,
    pub issuer: String,
    pub keys_url: String,
    pub service_key: String,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = Self::load_environment()?;
        let auth = Self::load_auth()?;

        Ok(Self { environment, auth })
    }

    fn load_environment() -> Result<EnvironmentConfig> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading environment configuration for: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join("data").join("emploi_romand.db"));

        Ok(EnvironmentConfig { database_path })
    }

    fn load_auth() -> Result<AuthSettings> {
        let project_id = std::env::var("AUTH_PROJECT_ID")
            .map_err(|_| anyhow::anyhow!("AUTH_PROJECT_ID environment variable not set"))?;

        let issuer = std::env::var("AUTH_ISSUER")
            .unwrap_or_else(|_| format!("https://securetoken.google.com/{}", project_id));

        let keys_url = std::env::var("AUTH_KEYS_URL").unwrap_or_else(|_| {
            "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com"
                .to_string()
        });

        let service_key = std::env::var("SERVICE_KEY")
            .map_err(|_| anyhow::anyhow!("SERVICE_KEY environment variable not set"))?;

        Ok(AuthSettings {
            project_id,
            issuer,
            keys_url,
            service_key,
        })
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        if let Some(db_parent) = self.environment.database_path.parent() {
            crate::utils::ensure_dir_exists(db_parent).await?;
        }
        Ok(())
    }
}
