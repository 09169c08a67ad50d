// ABOUTME: Positional binding of finalized parameter arrays onto sqlx SQLite queries
// ABOUTME: Values bind by variant; the paired type code picks the type of bound NULLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use tracing::debug;

use dbparams_core::{SqlType, SqlValue};

use crate::builder::ParameterTypeArrays;

/// A SQLite query with positional arguments
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Rust type used to bind a `NULL`, chosen from the paired type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NullBinding {
    Integer,
    Floating,
    Boolean,
    Binary,
    Text,
}

impl NullBinding {
    const fn for_type(sql_type: SqlType) -> Self {
        if sql_type.is_integral() {
            Self::Integer
        } else if sql_type.is_floating() {
            Self::Floating
        } else if sql_type.is_boolean() {
            Self::Boolean
        } else if sql_type.is_binary() {
            Self::Binary
        } else {
            Self::Text
        }
    }
}

/// Bind `params.values()[i]` at position `i` of `query`, in order.
pub fn bind_all<'q>(query: SqliteQuery<'q>, params: &'q ParameterTypeArrays) -> SqliteQuery<'q> {
    debug!(count = params.len(), "binding positional parameters");
    params
        .iter()
        .fold(query, |query, (value, sql_type)| bind_value(query, value, sql_type))
}

fn bind_value<'q>(query: SqliteQuery<'q>, value: &'q SqlValue, sql_type: SqlType) -> SqliteQuery<'q> {
    match value {
        SqlValue::Null => match NullBinding::for_type(sql_type) {
            NullBinding::Integer => query.bind(None::<i64>),
            NullBinding::Floating => query.bind(None::<f64>),
            NullBinding::Boolean => query.bind(None::<bool>),
            NullBinding::Binary => query.bind(None::<Vec<u8>>),
            NullBinding::Text => query.bind(None::<String>),
        },
        SqlValue::Boolean(flag) => query.bind(*flag),
        SqlValue::Integer(number) => query.bind(*number),
        SqlValue::BigInt(number) => query.bind(*number),
        SqlValue::Double(number) => query.bind(*number),
        SqlValue::Text(text) => query.bind(text.as_str()),
        SqlValue::Date(date) => query.bind(*date),
        SqlValue::Timestamp(timestamp) => query.bind(*timestamp),
        SqlValue::TimestampTz(timestamp) => query.bind(*timestamp),
        SqlValue::Uuid(uuid) => query.bind(*uuid),
        SqlValue::Bytes(bytes) => query.bind(bytes.as_slice()),
    }
}

impl ParameterTypeArrays {
    /// Bind every parameter onto `query`; see [`bind_all`]
    pub fn bind_to<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        bind_all(query, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_binding_follows_type_code() {
        assert_eq!(NullBinding::for_type(SqlType::INTEGER), NullBinding::Integer);
        assert_eq!(NullBinding::for_type(SqlType::BIGINT), NullBinding::Integer);
        assert_eq!(NullBinding::for_type(SqlType::DECIMAL), NullBinding::Floating);
        assert_eq!(NullBinding::for_type(SqlType::BOOLEAN), NullBinding::Boolean);
        assert_eq!(NullBinding::for_type(SqlType::VARBINARY), NullBinding::Binary);
        assert_eq!(NullBinding::for_type(SqlType::VARCHAR), NullBinding::Text);
        assert_eq!(NullBinding::for_type(SqlType::new(-100)), NullBinding::Text);
    }
}
