// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP binding, CORS origins, and LLM credentials from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Result};
use para_core::constants::defaults;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generative-text settings
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; `None` when the variable is unset
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature
    pub temperature: f32,
}

impl LlmConfig {
    /// Per-call timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::LLM_MODEL.to_owned(),
            timeout_secs: defaults::LLM_TIMEOUT_SECS,
            temperature: defaults::LLM_TEMPERATURE,
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*`
    pub allowed_origins: String,
}

impl CorsConfig {
    /// Allowed origins as a list; `["*"]` means any origin
    #[must_use]
    pub fn origins(&self) -> Vec<String> {
        parse_origins(&self.allowed_origins)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Generative-text settings
    pub llm: LlmConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            llm: LlmConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a numeric setting does not parse
    /// or is out of range.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let timeout_secs: u64 =
            parse_env_or("PARA_COACH_LLM_TIMEOUT_SECS", defaults::LLM_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(anyhow!("PARA_COACH_LLM_TIMEOUT_SECS must be at least 1 second"));
        }
        let temperature: f32 =
            parse_env_or("PARA_COACH_LLM_TEMPERATURE", defaults::LLM_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(anyhow!(
                "PARA_COACH_LLM_TEMPERATURE must be within [0, 2], got {temperature}"
            ));
        }

        Ok(Self {
            http_port: parse_env_or("HTTP_PORT", defaults::HTTP_PORT)?,
            host: env_var_or("HOST", defaults::HOST),
            llm: LlmConfig {
                api_key: env::var(GEMINI_API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                model: env_var_or("PARA_COACH_LLM_MODEL", defaults::LLM_MODEL),
                timeout_secs,
                temperature,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (API key never printed)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Para Coach Configuration:\n\
             - HTTP: {}:{}\n\
             - LLM Model: {}\n\
             - LLM Timeout: {}s\n\
             - LLM Temperature: {}\n\
             - LLM API Key: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.llm.model,
            self.llm.timeout_secs,
            self.llm.temperature,
            if self.llm.api_key.is_some() {
                "configured"
            } else {
                "not set"
            },
            self.cors.origins().join(", "),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to a default when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_summary_hides_api_key() {
        let config = ServerConfig {
            llm: LlmConfig {
                api_key: Some("secret-key-value".to_owned()),
                ..LlmConfig::default()
            },
            ..ServerConfig::default()
        };
        let summary = config.summary();
        assert!(!summary.contains("secret-key-value"));
        assert!(summary.contains("configured"));
        assert!(!format!("{:?}", config.llm).contains("secret-key-value"));
    }
}
