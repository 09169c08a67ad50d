// ABOUTME: JSON manifest of parameter entries fed through the accumulator in order
// ABOUTME: Maps JSON scalars to SqlValue, type names to SqlType, and applies named transforms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Parameter manifests.
//!
//! A manifest is a JSON array of entries:
//!
//! ```json
//! [
//!   { "value": null, "type": "VARCHAR", "transform": "null_to_empty" },
//!   { "value": 1000, "type": 12, "transform": "to_text" },
//!   { "value": "NormalNoMod", "type": "LONGVARCHAR" }
//! ]
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use dbparams_core::{ParamError, ParamResult, SqlType, SqlValue};

use crate::builder::{ParameterTypeArrayBuilder, ParameterTypeArrays};
use crate::transforms::TransformKind;

/// Type code given either by constant name or by raw integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// Raw code, used verbatim
    Code(i32),
    /// JDBC constant name, case-insensitive
    Name(String),
}

impl TypeSpec {
    /// Resolve to a type code
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::UnknownTypeName`] for an unrecognised name
    pub fn resolve(&self) -> ParamResult<SqlType> {
        match self {
            Self::Code(code) => Ok(SqlType::new(*code)),
            Self::Name(name) => name.parse(),
        }
    }
}

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Raw JSON value; must be a scalar or `null`
    #[serde(default)]
    pub value: Value,
    /// SQL type code
    #[serde(rename = "type")]
    pub sql_type: TypeSpec,
    /// Optional transform applied before the value is stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformKind>,
}

/// Ordered list of manifest entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterManifest {
    entries: Vec<ManifestEntry>,
}

impl ParameterManifest {
    /// Wrap already-decoded entries
    #[must_use]
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    /// Entries in manifest order
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Decode a manifest from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Manifest`] if the JSON is malformed
    pub fn from_json_str(json: &str) -> ParamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a manifest from a reader
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Manifest`] if the JSON is malformed or cannot be read
    pub fn from_reader<R: Read>(reader: R) -> ParamResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a manifest file
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Io`] if the file cannot be opened and
    /// [`ParamError::Manifest`] if its content is malformed
    pub fn from_path(path: impl AsRef<Path>) -> ParamResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading parameter manifest");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Feed every entry through a fresh accumulator, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first entry whose value is unsupported, whose type name is
    /// unknown, or whose transform fails.
    pub fn build(&self) -> ParamResult<ParameterTypeArrays> {
        let mut builder = ParameterTypeArrayBuilder::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let sql_type = entry.sql_type.resolve()?;
            let value = json_to_sql_value(index, &entry.value)?;
            match entry.transform {
                Some(kind) => {
                    builder.try_append_with(value, sql_type, |value| kind.apply(value))?;
                }
                None => {
                    builder.append(value, sql_type);
                }
            }
        }

        let params = builder.finalize();
        info!(count = params.len(), "built parameter arrays from manifest");
        Ok(params)
    }
}

impl FromIterator<ManifestEntry> for ParameterManifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Map a JSON scalar to its SQL value by JSON kind alone
fn json_to_sql_value(index: usize, value: &Value) -> ParamResult<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(flag) => Ok(SqlValue::Boolean(*flag)),
        // Integers beyond i64 are rejected rather than rounded through f64
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(integer), _) => Ok(SqlValue::BigInt(integer)),
            (None, Some(float)) if number.is_f64() => Ok(SqlValue::Double(float)),
            _ => Err(ParamError::unsupported_value(
                index,
                format!("integer {number} does not fit in a 64-bit signed integer"),
            )),
        },
        Value::String(text) => Ok(SqlValue::Text(text.clone())),
        Value::Array(_) => Err(ParamError::unsupported_value(
            index,
            "arrays cannot be bound as a single parameter",
        )),
        Value::Object(_) => Err(ParamError::unsupported_value(
            index,
            "objects cannot be bound as a single parameter",
        )),
    }
}
