// ABOUTME: Pipeline error taxonomy for normalization, prediction, and coaching failures
// ABOUTME: Discriminated errors with field/component context and a retryability flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminant of a [`PipelineError`], stable across the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad or out-of-range input field
    Validation,
    /// A prediction model failed or produced out-of-contract output
    Model,
    /// Coaching invoked without the required prior state
    Context,
    /// The generative-text capability failed or broke the reply contract
    Generation,
}

impl ErrorKind {
    /// Wire name of this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Model => "model",
            Self::Context => "context",
            Self::Generation => "generation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a generation attempt failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationCause {
    /// The provider did not answer within the configured timeout
    Timeout,
    /// The provider was unreachable, rate limited, or returned a server error
    Unavailable,
    /// The provider answered but the reply lacks required sections
    MalformedReply,
    /// The provider refused the request (bad credentials, invalid configuration)
    Rejected,
}

impl GenerationCause {
    /// Whether re-issuing the same request may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Errors produced by the prediction-and-advisory pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// An input field is missing, malformed or outside its declared bound
    #[error("invalid value for `{field}`: {value} (expected {bound})")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Offending value as received
        value: String,
        /// Human-readable description of the accepted range or vocabulary
        bound: String,
    },

    /// A prediction model failed; no partial record is produced
    #[error("prediction model `{model}` failed: {reason}")]
    Model {
        /// Name of the failing model component
        model: String,
        /// What went wrong
        reason: String,
    },

    /// Coaching was requested without athlete data or predictions
    #[error("coaching context is missing {missing}")]
    Context {
        /// Name of the absent piece of state
        missing: String,
    },

    /// Text generation failed after the internal retry policy
    #[error("text generation failed ({cause:?}): {reason}")]
    Generation {
        /// Failure category, which decides retryability
        cause: GenerationCause,
        /// What went wrong
        reason: String,
    },
}

impl PipelineError {
    /// Create a validation error for a field
    #[must_use]
    pub fn validation(
        field: impl Into<String>,
        value: impl fmt::Display,
        bound: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
            bound: bound.into(),
        }
    }

    /// Create a validation error for a required field that was not supplied
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: "<absent>".to_owned(),
            bound: "required".to_owned(),
        }
    }

    /// Create a model error
    #[must_use]
    pub fn model(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Model {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Create a context error
    #[must_use]
    pub fn context(missing: impl Into<String>) -> Self {
        Self::Context {
            missing: missing.into(),
        }
    }

    /// Create a generation error
    #[must_use]
    pub fn generation(cause: GenerationCause, reason: impl Into<String>) -> Self {
        Self::Generation {
            cause,
            reason: reason.into(),
        }
    }

    /// Discriminated kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Model { .. } => ErrorKind::Model,
            Self::Context { .. } => ErrorKind::Context,
            Self::Generation { .. } => ErrorKind::Generation,
        }
    }

    /// Whether the caller may re-issue the request unchanged
    ///
    /// Only generation failures other than outright rejection are retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Generation { cause, .. } => cause.is_retryable(),
            Self::Validation { .. } | Self::Model { .. } | Self::Context { .. } => false,
        }
    }
}

/// Result alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
