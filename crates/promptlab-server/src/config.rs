//! Server configuration
//!
//! Loaded from Shuttle secrets (`Secrets.toml`) with defaults suitable for
//! local development.
//!
//! | Secret                   | Default         |
//! |--------------------------|-----------------|
//! | `PROMPTLAB_APP_NAME`     | `PromptLab API` |
//! | `PROMPTLAB_ENVIRONMENT`  | `development`   |
//! | `PROMPTLAB_CORS_ORIGINS` | `*`             |

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use shuttle_runtime::SecretStore;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const DEFAULT_APP_NAME: &str = "PromptLab API";

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Testing => write!(f, "testing"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Unknown environment: {}. Valid: development, testing, production",
                s
            )),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub environment: Environment,
    /// Allowed CORS origins; `*` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: Environment::default(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from Shuttle secrets
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Load configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let app_name = lookup("PROMPTLAB_APP_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.app_name);

        let environment = lookup("PROMPTLAB_ENVIRONMENT")
            .map(|raw| raw.parse::<Environment>())
            .transpose()
            .map_err(anyhow::Error::msg)
            .context("Invalid PROMPTLAB_ENVIRONMENT")?
            .unwrap_or(defaults.environment);

        let cors_origins = lookup("PROMPTLAB_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            app_name,
            environment,
            cors_origins,
        })
    }

    /// Build the CORS layer for the configured origins
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        if self.cors_origins.iter().any(|origin| origin == "*") {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any))
    }
}
