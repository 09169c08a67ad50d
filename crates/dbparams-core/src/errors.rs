// ABOUTME: Error types for parameter manifests, type-name parsing and named transforms
// ABOUTME: The accumulator itself never fails; these cover the surfaces built around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Parameter Error Types
//!
//! - `ParamError` - errors raised while parsing type names, decoding manifests
//!   or applying a named transform
//! - `ParamResult` - result alias used across the workspace

use std::io;

/// Errors raised around parameter accumulation.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// Type name is neither a known JDBC constant nor an integer
    #[error("Unknown SQL type name: '{0}'")]
    UnknownTypeName(String),

    /// Manifest entry holds a value that has no SQL-bindable form
    #[error("Unsupported value at entry {index}: {reason}")]
    UnsupportedValue {
        /// Zero-based position of the entry
        index: usize,
        /// Why the value cannot be bound
        reason: String,
    },

    /// A named transform rejected its input
    #[error("Transform '{transform}' failed: {reason}")]
    TransformFailed {
        /// Name of the transform
        transform: &'static str,
        /// Reason the input was rejected
        reason: String,
    },

    /// Manifest JSON could not be decoded
    #[error("Manifest parsing failed")]
    Manifest {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Manifest could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ParamError {
    /// Create an "unsupported value" error
    #[must_use]
    pub fn unsupported_value(index: usize, reason: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            index,
            reason: reason.into(),
        }
    }

    /// Create a "transform failed" error
    #[must_use]
    pub fn transform_failed(transform: &'static str, reason: impl Into<String>) -> Self {
        Self::TransformFailed {
            transform,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ParamError {
    fn from(source: serde_json::Error) -> Self {
        Self::Manifest { source }
    }
}

/// Result alias for parameter operations
pub type ParamResult<T> = Result<T, ParamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParamError::UnknownTypeName("VARCHAR2".into());
        assert_eq!(err.to_string(), "Unknown SQL type name: 'VARCHAR2'");

        let err = ParamError::transform_failed("parse_integer", "not a number");
        assert_eq!(
            err.to_string(),
            "Transform 'parse_integer' failed: not a number"
        );

        let err = ParamError::unsupported_value(3, "arrays cannot be bound");
        assert_eq!(
            err.to_string(),
            "Unsupported value at entry 3: arrays cannot be bound"
        );
    }

    #[test]
    fn test_json_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ParamError::from(json_err);
        assert!(matches!(err, ParamError::Manifest { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
