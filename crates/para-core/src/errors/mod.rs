// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Bridges pipeline errors and provider failures into one boundary error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Two layers:
//!
//! - [`PipelineError`] is the domain taxonomy (validation, model, context,
//!   generation) returned by the normalizer, the prediction engine and the
//!   dialogue orchestrator.
//! - [`AppError`] is the boundary type carrying a stable [`ErrorCode`], a
//!   message, JSON details and a retryable flag. LLM providers return it
//!   directly, and every `PipelineError` converts into it for transport.

mod pipeline;

pub use pipeline::{ErrorKind, GenerationCause, PipelineError, PipelineResult};

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input is malformed
    InvalidInput = 3000,
    /// A required field is absent
    MissingRequiredField = 3001,
    /// A value lies outside its declared bound
    ValueOutOfRange = 3003,

    // Pipeline state (4000-4999)
    /// Coaching requested without athlete data or predictions
    ContextMissing = 4100,
    /// A prediction model failed
    ModelFailure = 4200,

    // External Services (5000-5999)
    /// The external service returned an error
    ExternalServiceError = 5000,
    /// The external service is unreachable or overloaded
    ExternalServiceUnavailable = 5001,
    /// The external service rejected our credentials
    ExternalAuthFailed = 5002,
    /// The external service rate limited us
    ExternalRateLimited = 5003,
    /// The external service did not answer in time
    ExternalTimeout = 5004,

    // Configuration (6000-6999)
    /// Required configuration is missing
    ConfigMissing = 6001,
    /// Configuration is invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Serialization or deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ContextMissing => 422,
            Self::ExternalRateLimited => 429,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed => 502,
            Self::ExternalTimeout => 504,
            Self::ModelFailure
            | Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Error family reported to clients alongside the code
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => {
                ErrorKind::Validation.as_str()
            }
            Self::ContextMissing => ErrorKind::Context.as_str(),
            Self::ModelFailure => ErrorKind::Model.as_str(),
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::ExternalAuthFailed
            | Self::ExternalRateLimited
            | Self::ExternalTimeout => ErrorKind::Generation.as_str(),
            Self::ConfigMissing | Self::ConfigInvalid => "configuration",
            Self::InternalError | Self::SerializationError => "internal",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ContextMissing => "Coaching requires athlete data and predictions",
            Self::ModelFailure => "A prediction model failed",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ExternalTimeout => "An external service did not respond in time",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether failures with this code are worth re-issuing unchanged
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalRateLimited
                | Self::ExternalTimeout
                | Self::InternalError
        )
    }
}

/// Unified error type for the application boundary
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured context (offending field, model name, ...)
    pub details: Value,
    /// Whether the caller may re-issue the request
    pub retryable: bool,
    /// Source error for error chaining
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            retryable: code.is_retryable(),
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Override the retryable flag
    #[must_use]
    pub const fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unavailable (network failure, 5xx, overload)
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service rejected the credentials
    #[must_use]
    pub fn external_auth(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalAuthFailed,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<PipelineError> for AppError {
    fn from(error: PipelineError) -> Self {
        let retryable = error.is_retryable();
        let message = error.to_string();
        let (code, details) = match error {
            PipelineError::Validation {
                field,
                value,
                bound,
            } => {
                let code = if bound == "required" {
                    ErrorCode::MissingRequiredField
                } else {
                    ErrorCode::ValueOutOfRange
                };
                (
                    code,
                    json!({ "field": field, "value": value, "bound": bound }),
                )
            }
            PipelineError::Model { model, reason } => (
                ErrorCode::ModelFailure,
                json!({ "model": model, "reason": reason }),
            ),
            PipelineError::Context { missing } => {
                (ErrorCode::ContextMissing, json!({ "missing": missing }))
            }
            PipelineError::Generation { cause, reason } => {
                let code = match cause {
                    GenerationCause::Timeout => ErrorCode::ExternalTimeout,
                    GenerationCause::Unavailable => ErrorCode::ExternalServiceUnavailable,
                    GenerationCause::MalformedReply => ErrorCode::ExternalServiceError,
                    GenerationCause::Rejected => ErrorCode::ExternalAuthFailed,
                };
                (code, json!({ "cause": cause, "reason": reason }))
            }
        };
        Self::new(code, message)
            .with_details(details)
            .with_retryable(retryable)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Error family (validation, model, context, generation, ...)
    pub kind: String,
    /// Human-readable message naming the offending field or component
    pub message: String,
    /// Whether re-issuing the request may succeed
    pub retryable: bool,
    /// Structured context
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                kind: error.code.kind().to_owned(),
                message: error.message,
                retryable: error.retryable,
                details: error.details,
            },
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{debug, error};

    use super::{AppError, ErrorResponse};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status =
                StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(code = ?self.code, "{}", self.message);
            } else {
                debug!(code = ?self.code, "{}", self.message);
            }
            (status, Json(ErrorResponse::from(self))).into_response()
        }
    }
}
