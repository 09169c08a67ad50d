// ABOUTME: Tagged union of SQL-bindable primitive values stored by the accumulator
// ABOUTME: Conversions from Rust primitives, chrono and uuid types, with Option mapping to NULL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A positional SQL parameter value.
///
/// `Null` is a regular value: the accumulator stores it like any other and the
/// paired type code tells the statement layer how to bind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// SQL `NULL`
    Null,
    /// Boolean value
    Boolean(bool),
    /// 32-bit integer
    Integer(i32),
    /// 64-bit integer
    BigInt(i64),
    /// Double precision float
    Double(f64),
    /// Character data
    Text(String),
    /// Calendar date without time zone
    Date(NaiveDate),
    /// Date and time without time zone
    Timestamp(NaiveDateTime),
    /// UTC timestamp
    TimestampTz(DateTime<Utc>),
    /// UUID
    Uuid(Uuid),
    /// Binary data
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Whether this is SQL `NULL`
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the text content of a `Text` value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the variant, used in logs and error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::BigInt(_) => "bigint",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::TimestampTz(_) => "timestamptz",
            Self::Uuid(_) => "uuid",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl Display for SqlValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::BigInt(value) => write!(f, "{value}"),
            // Debug keeps the fractional part of whole floats ("1.0", not "1")
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
            Self::Date(value) => write!(f, "{value}"),
            Self::Timestamp(value) => write!(f, "{value}"),
            Self::TimestampTz(value) => f.write_str(&value.to_rfc3339()),
            Self::Uuid(value) => write!(f, "{value}"),
            Self::Bytes(value) => {
                for byte in value {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::TimestampTz(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(SqlValue::from(None::<String>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(36)), SqlValue::Integer(36));
        assert!(SqlValue::from(None::<i64>).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::from(1000).to_string(), "1000");
        assert_eq!(SqlValue::from("abc").to_string(), "abc");
        assert_eq!(SqlValue::Bytes(vec![0x0a, 0xff]).to_string(), "0aff");
        assert_eq!(SqlValue::Double(1.0).to_string(), "1.0");
        assert_eq!(SqlValue::Double(2.5).to_string(), "2.5");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(SqlValue::from(date).to_string(), "2024-02-29");
    }

    #[test]
    fn test_serializes_untagged() {
        let values = vec![
            SqlValue::Null,
            SqlValue::from(true),
            SqlValue::from(36),
            SqlValue::from("x"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,36,"x"]"#);
    }

    #[test]
    fn test_as_str_and_kind() {
        assert_eq!(SqlValue::from("Test").as_str(), Some("Test"));
        assert_eq!(SqlValue::from(7_i64).as_str(), None);
        assert_eq!(SqlValue::from(7_i64).kind(), "bigint");
    }
}
