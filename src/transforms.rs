// ABOUTME: Reusable value transforms for append_with and a named, data-driven TransformKind
// ABOUTME: Covers null substitution, stringification, trimming and integer parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Value transforms.
//!
//! The free functions plug straight into
//! [`ParameterTypeArrayBuilder::append_with`](crate::ParameterTypeArrayBuilder::append_with).
//! [`TransformKind`] is the serializable counterpart used by manifests.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use dbparams_core::{ParamError, ParamResult, SqlValue};

/// Replace a missing or empty string with `""`
pub fn null_to_empty<S: Into<String>>(value: Option<S>) -> String {
    value.map(Into::into).unwrap_or_default()
}

/// Stringify any displayable value
pub fn to_text<T: ToString>(value: T) -> String {
    value.to_string()
}

/// Replace an empty string with `None`, so it binds as SQL `NULL`
pub fn empty_to_null<S: Into<String>>(value: Option<S>) -> Option<String> {
    value.map(Into::into).filter(|text| !text.is_empty())
}

/// Named transform applied to an already-converted [`SqlValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// `NULL` becomes `""`
    NullToEmpty,
    /// Any non-null value becomes its text form
    ToText,
    /// `""` becomes `NULL`
    EmptyToNull,
    /// Strip surrounding whitespace from text
    Trim,
    /// Parse text as a 64-bit integer
    ParseInteger,
}

impl TransformKind {
    /// Manifest name of the transform
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullToEmpty => "null_to_empty",
            Self::ToText => "to_text",
            Self::EmptyToNull => "empty_to_null",
            Self::Trim => "trim",
            Self::ParseInteger => "parse_integer",
        }
    }

    /// Apply the transform.
    ///
    /// Values the transform does not concern pass through unchanged.
    ///
    /// # Errors
    ///
    /// `ParseInteger` returns [`ParamError::TransformFailed`] for text that is
    /// not an integer and for non-text, non-integer values.
    pub fn apply(self, value: SqlValue) -> ParamResult<SqlValue> {
        match (self, value) {
            (Self::NullToEmpty, SqlValue::Null) => Ok(SqlValue::Text(String::new())),
            (Self::ToText, SqlValue::Null) => Ok(SqlValue::Null),
            (Self::ToText, value) => Ok(SqlValue::Text(value.to_string())),
            (Self::EmptyToNull, SqlValue::Text(text)) if text.is_empty() => Ok(SqlValue::Null),
            (Self::Trim, SqlValue::Text(text)) => Ok(SqlValue::Text(text.trim().to_owned())),
            (Self::ParseInteger, SqlValue::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map(SqlValue::BigInt)
                .map_err(|e| {
                    ParamError::transform_failed(self.as_str(), format!("'{text}': {e}"))
                }),
            (
                Self::ParseInteger,
                value @ (SqlValue::Null | SqlValue::Integer(_) | SqlValue::BigInt(_)),
            ) => Ok(value),
            (Self::ParseInteger, value) => Err(ParamError::transform_failed(
                self.as_str(),
                format!("cannot parse {} value as integer", value.kind()),
            )),
            (_, value) => Ok(value),
        }
    }
}

impl Display for TransformKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_to_empty() {
        assert_eq!(null_to_empty(None::<&str>), "");
        assert_eq!(null_to_empty(Some("")), "");
        assert_eq!(null_to_empty(Some("Test")), "Test");
    }

    #[test]
    fn test_empty_to_null() {
        assert_eq!(empty_to_null(Some("")), None);
        assert_eq!(empty_to_null(None::<String>), None);
        assert_eq!(empty_to_null(Some("x")), Some("x".to_owned()));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(1000), "1000");
        assert_eq!(to_text(2.5), "2.5");
    }

    #[test]
    fn test_kind_apply() {
        assert_eq!(
            TransformKind::NullToEmpty.apply(SqlValue::Null).unwrap(),
            SqlValue::from("")
        );
        assert_eq!(
            TransformKind::NullToEmpty.apply(SqlValue::from(5)).unwrap(),
            SqlValue::from(5)
        );
        assert_eq!(
            TransformKind::ToText.apply(SqlValue::BigInt(1000)).unwrap(),
            SqlValue::from("1000")
        );
        assert_eq!(
            TransformKind::ToText.apply(SqlValue::Double(1.0)).unwrap(),
            SqlValue::from("1.0")
        );
        assert_eq!(
            TransformKind::ToText.apply(SqlValue::Null).unwrap(),
            SqlValue::Null
        );
        assert_eq!(
            TransformKind::EmptyToNull.apply(SqlValue::from("")).unwrap(),
            SqlValue::Null
        );
        assert_eq!(
            TransformKind::Trim.apply(SqlValue::from("  padded ")).unwrap(),
            SqlValue::from("padded")
        );
        assert_eq!(
            TransformKind::ParseInteger.apply(SqlValue::from(" 42 ")).unwrap(),
            SqlValue::BigInt(42)
        );
    }

    #[test]
    fn test_parse_integer_failures() {
        let err = TransformKind::ParseInteger
            .apply(SqlValue::from("forty-two"))
            .unwrap_err();
        assert!(matches!(
            err,
            ParamError::TransformFailed { transform: "parse_integer", .. }
        ));

        let err = TransformKind::ParseInteger
            .apply(SqlValue::Boolean(true))
            .unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: TransformKind = serde_json::from_str(r#""null_to_empty""#).unwrap();
        assert_eq!(kind, TransformKind::NullToEmpty);
        assert_eq!(kind.to_string(), "null_to_empty");
    }
}
