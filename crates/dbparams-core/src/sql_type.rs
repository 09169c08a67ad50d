// ABOUTME: Opaque JDBC-style SQL type codes passed alongside positional parameters
// ABOUTME: Named constants mirror java.sql.Types; any integer is accepted verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParamError;

/// Integer SQL type code from the JDBC `java.sql.Types` enumeration.
///
/// The code is opaque to the accumulator: it is never validated and is passed
/// through unchanged. The named constants exist for readability and for
/// parsing type names from manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqlType(i32);

impl SqlType {
    /// `BIT`
    pub const BIT: Self = Self(-7);
    /// `TINYINT`
    pub const TINYINT: Self = Self(-6);
    /// `SMALLINT`
    pub const SMALLINT: Self = Self(5);
    /// `INTEGER`
    pub const INTEGER: Self = Self(4);
    /// `BIGINT`
    pub const BIGINT: Self = Self(-5);
    /// `FLOAT`
    pub const FLOAT: Self = Self(6);
    /// `REAL`
    pub const REAL: Self = Self(7);
    /// `DOUBLE`
    pub const DOUBLE: Self = Self(8);
    /// `NUMERIC`
    pub const NUMERIC: Self = Self(2);
    /// `DECIMAL`
    pub const DECIMAL: Self = Self(3);
    /// `CHAR`
    pub const CHAR: Self = Self(1);
    /// `VARCHAR`
    pub const VARCHAR: Self = Self(12);
    /// `LONGVARCHAR`
    pub const LONGVARCHAR: Self = Self(-1);
    /// `DATE`
    pub const DATE: Self = Self(91);
    /// `TIME`
    pub const TIME: Self = Self(92);
    /// `TIMESTAMP`
    pub const TIMESTAMP: Self = Self(93);
    /// `BINARY`
    pub const BINARY: Self = Self(-2);
    /// `VARBINARY`
    pub const VARBINARY: Self = Self(-3);
    /// `LONGVARBINARY`
    pub const LONGVARBINARY: Self = Self(-4);
    /// `NULL`
    pub const NULL: Self = Self(0);
    /// `OTHER`
    pub const OTHER: Self = Self(1111);
    /// `BLOB`
    pub const BLOB: Self = Self(2004);
    /// `CLOB`
    pub const CLOB: Self = Self(2005);
    /// `BOOLEAN`
    pub const BOOLEAN: Self = Self(16);
    /// `NCHAR`
    pub const NCHAR: Self = Self(-15);
    /// `NVARCHAR`
    pub const NVARCHAR: Self = Self(-9);
    /// `LONGNVARCHAR`
    pub const LONGNVARCHAR: Self = Self(-16);
    /// `NCLOB`
    pub const NCLOB: Self = Self(2011);
    /// `TIME_WITH_TIMEZONE`
    pub const TIME_WITH_TIMEZONE: Self = Self(2013);
    /// `TIMESTAMP_WITH_TIMEZONE`
    pub const TIMESTAMP_WITH_TIMEZONE: Self = Self(2014);

    /// Every named type code, in declaration order
    pub const ALL: &'static [Self] = &[
        Self::BIT,
        Self::TINYINT,
        Self::SMALLINT,
        Self::INTEGER,
        Self::BIGINT,
        Self::FLOAT,
        Self::REAL,
        Self::DOUBLE,
        Self::NUMERIC,
        Self::DECIMAL,
        Self::CHAR,
        Self::VARCHAR,
        Self::LONGVARCHAR,
        Self::DATE,
        Self::TIME,
        Self::TIMESTAMP,
        Self::BINARY,
        Self::VARBINARY,
        Self::LONGVARBINARY,
        Self::NULL,
        Self::OTHER,
        Self::BLOB,
        Self::CLOB,
        Self::BOOLEAN,
        Self::NCHAR,
        Self::NVARCHAR,
        Self::LONGNVARCHAR,
        Self::NCLOB,
        Self::TIME_WITH_TIMEZONE,
        Self::TIMESTAMP_WITH_TIMEZONE,
    ];

    /// Wrap a raw type code without validation
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw integer code
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Constant name for a known code, `None` for codes outside the enumeration
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        let name = match self.0 {
            -7 => "BIT",
            -6 => "TINYINT",
            5 => "SMALLINT",
            4 => "INTEGER",
            -5 => "BIGINT",
            6 => "FLOAT",
            7 => "REAL",
            8 => "DOUBLE",
            2 => "NUMERIC",
            3 => "DECIMAL",
            1 => "CHAR",
            12 => "VARCHAR",
            -1 => "LONGVARCHAR",
            91 => "DATE",
            92 => "TIME",
            93 => "TIMESTAMP",
            -2 => "BINARY",
            -3 => "VARBINARY",
            -4 => "LONGVARBINARY",
            0 => "NULL",
            1111 => "OTHER",
            2004 => "BLOB",
            2005 => "CLOB",
            16 => "BOOLEAN",
            -15 => "NCHAR",
            -9 => "NVARCHAR",
            -16 => "LONGNVARCHAR",
            2011 => "NCLOB",
            2013 => "TIME_WITH_TIMEZONE",
            2014 => "TIMESTAMP_WITH_TIMEZONE",
            _ => return None,
        };
        Some(name)
    }

    /// Integer family (`TINYINT`, `SMALLINT`, `INTEGER`, `BIGINT`)
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(self.0, -6 | 5 | 4 | -5)
    }

    /// Approximate and exact numeric family bound as floating point
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self.0, 6 | 7 | 8 | 2 | 3)
    }

    /// `BIT` or `BOOLEAN`
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self.0, -7 | 16)
    }

    /// Binary family (`BINARY`, `VARBINARY`, `LONGVARBINARY`, `BLOB`)
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self.0, -2 | -3 | -4 | 2004)
    }
}

impl From<i32> for SqlType {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<SqlType> for i32 {
    fn from(sql_type: SqlType) -> Self {
        sql_type.0
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for SqlType {
    type Err = ParamError;

    /// Parse a constant name (case-insensitive) or a decimal code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i32>() {
            return Ok(Self(code));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|sql_type| {
                sql_type
                    .name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| ParamError::UnknownTypeName(s.to_owned()))
    }
}
