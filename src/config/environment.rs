// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses bind address, log level, no-person policy and coaching thresholds from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars, ports};
use crate::errors::{AppError, AppResult};
use repcoach_intelligence::config::CoachingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Per-frame diagnostics
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// What the live socket sends back for a frame without a person in it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoPersonPolicy {
    /// Reply "Get into a starting pose." to every such frame
    #[default]
    Prompt,
    /// Send nothing
    Suppress,
}

impl NoPersonPolicy {
    /// Parse a policy name
    ///
    /// # Errors
    ///
    /// Returns a config error for anything other than `prompt` or `suppress`
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "suppress" | "silent" => Ok(Self::Suppress),
            other => Err(AppError::config(format!(
                "{}: expected 'prompt' or 'suppress', got '{other}'",
                env_vars::NO_PERSON_POLICY
            ))),
        }
    }
}

impl fmt::Display for NoPersonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Prompt => "prompt",
            Self::Suppress => "suppress",
        })
    }
}

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP and WebSocket port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Reply policy for frames without a person
    pub no_person_policy: NoPersonPolicy,
    /// Rep counting thresholds
    pub coaching: CoachingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            no_person_policy: NoPersonPolicy::default(),
            coaching: CoachingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable is set to an unparseable value
    /// or the coaching thresholds fail validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("Invalid {} value '{raw}'", env_vars::HTTP_PORT))
                    .with_source(e)
            })?,
            Err(_) => ports::DEFAULT_HTTP_PORT,
        };

        let no_person_policy = match env::var(env_vars::NO_PERSON_POLICY) {
            Ok(raw) => NoPersonPolicy::parse(&raw)?,
            Err(_) => NoPersonPolicy::default(),
        };

        let coaching = CoachingConfig::from_env()
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;

        let config = Self {
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_owned()),
            http_port,
            environment: Environment::from_str_or_default(
                &env::var(env_vars::ENVIRONMENT).unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(
                &env::var(env_vars::RUST_LOG).unwrap_or_default(),
            ),
            no_person_policy,
            coaching,
        };

        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RepCoach Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - No-Person Policy: {}\n\
             - Min Keypoint Visibility: {}\n\
             - Start Pose Tolerance: {}\n\
             - Pushup Angles: flexed < {} deg, extended > {} deg\n\
             - Struggle Threshold: {}s",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.no_person_policy,
            self.coaching.min_visibility,
            self.coaching.start_pose.tolerance,
            self.coaching.pushup.flexed_angle_deg,
            self.coaching.pushup.extended_angle_deg,
            self.coaching.struggle_threshold_secs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_person_policy_parse() {
        assert_eq!(NoPersonPolicy::parse("Prompt").ok(), Some(NoPersonPolicy::Prompt));
        assert_eq!(
            NoPersonPolicy::parse(" suppress ").ok(),
            Some(NoPersonPolicy::Suppress)
        );
        assert!(NoPersonPolicy::parse("sometimes").is_err());
    }

    #[test]
    fn test_summary_mentions_bind_address() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("0.0.0.0:8000"));
    }
}
