// ABOUTME: Order-preserving accumulator for parallel parameter value and type-code arrays
// ABOUTME: Fluent append with optional value transforms, snapshotted into an immutable result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Parameter/type accumulation.
//!
//! ```
//! use dbparams::{ParameterTypeArrayBuilder, SqlType};
//!
//! let params = ParameterTypeArrayBuilder::new()
//!     .append("SOME String", SqlType::VARCHAR)
//!     .append(36, SqlType::INTEGER)
//!     .append(None::<String>, SqlType::VARCHAR)
//!     .finalize();
//!
//! assert_eq!(params.len(), 3);
//! assert_eq!(params.type_codes(), vec![12, 4, 12]);
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use dbparams_core::{SqlType, SqlValue};

/// Accumulates `(value, type code)` pairs in insertion order.
///
/// Every append writes exactly one value and one type code, so both sequences
/// always have the same length. Not synchronized: appends take `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct ParameterTypeArrayBuilder {
    values: Vec<SqlValue>,
    types: Vec<SqlType>,
}

impl ParameterTypeArrayBuilder {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and its type code unmodified.
    ///
    /// `None` and [`SqlValue::Null`] are accepted; the type code is not validated.
    pub fn append(&mut self, value: impl Into<SqlValue>, sql_type: SqlType) -> &mut Self {
        self.push(value.into(), sql_type);
        self
    }

    /// Apply `transform` to `raw` and append the result with `sql_type`.
    ///
    /// Lets callers centralize null-substitution or stringification policy,
    /// e.g. with [`crate::transforms::null_to_empty`].
    pub fn append_with<K, V, F>(&mut self, raw: K, sql_type: SqlType, transform: F) -> &mut Self
    where
        F: FnOnce(K) -> V,
        V: Into<SqlValue>,
    {
        self.push(transform(raw).into(), sql_type);
        self
    }

    /// Fallible form of [`Self::append_with`].
    ///
    /// # Errors
    ///
    /// Returns the transform's own error unchanged. Nothing is appended for the
    /// failing call; entries appended before it are kept.
    pub fn try_append_with<K, V, E, F>(
        &mut self,
        raw: K,
        sql_type: SqlType,
        transform: F,
    ) -> Result<&mut Self, E>
    where
        F: FnOnce(K) -> Result<V, E>,
        V: Into<SqlValue>,
    {
        let value = transform(raw)?;
        self.push(value.into(), sql_type);
        Ok(self)
    }

    /// Number of entries appended so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been appended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Snapshot both sequences into an independent [`ParameterTypeArrays`].
    ///
    /// The accumulator is left untouched, so calling this again after more
    /// appends yields a new snapshot that includes them.
    #[must_use]
    pub fn finalize(&self) -> ParameterTypeArrays {
        debug!(count = self.values.len(), "finalized parameter arrays");
        ParameterTypeArrays {
            values: self.values.clone().into_boxed_slice(),
            types: self.types.clone().into_boxed_slice(),
        }
    }

    fn push(&mut self, value: SqlValue, sql_type: SqlType) {
        trace!(
            index = self.values.len(),
            kind = value.kind(),
            sql_type = %sql_type,
            "appended parameter"
        );
        self.values.push(value);
        self.types.push(sql_type);
        debug_assert_eq!(self.values.len(), self.types.len());
    }
}

impl<V> Extend<(V, SqlType)> for ParameterTypeArrayBuilder
where
    V: Into<SqlValue>,
{
    fn extend<I: IntoIterator<Item = (V, SqlType)>>(&mut self, iter: I) {
        for (value, sql_type) in iter {
            self.push(value.into(), sql_type);
        }
    }
}

/// Immutable parallel arrays of parameter values and SQL type codes.
///
/// `values()[i]` is bound with type `types()[i]`; both slices always have the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterTypeArrays {
    values: Box<[SqlValue]>,
    types: Box<[SqlType]>,
}

impl ParameterTypeArrays {
    /// Start a new accumulator
    #[must_use]
    pub fn builder() -> ParameterTypeArrayBuilder {
        ParameterTypeArrayBuilder::new()
    }

    /// Parameter values in insertion order
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Type codes in insertion order
    #[must_use]
    pub fn types(&self) -> &[SqlType] {
        &self.types
    }

    /// Type codes as raw integers
    #[must_use]
    pub fn type_codes(&self) -> Vec<i32> {
        self.types.iter().map(|sql_type| sql_type.code()).collect()
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(value, type code)` pairs in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&SqlValue, SqlType)> + '_ {
        self.values.iter().zip(self.types.iter().copied())
    }

    /// Take ownership of both arrays
    #[must_use]
    pub fn into_parts(self) -> (Box<[SqlValue]>, Box<[SqlType]>) {
        (self.values, self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_finalize() {
        let params = ParameterTypeArrayBuilder::new().finalize();
        assert!(params.is_empty());
        assert!(params.types().is_empty());
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut builder = ParameterTypeArrays::builder();
        builder.append("first", SqlType::VARCHAR);
        builder.extend([(2_i64, SqlType::BIGINT), (3_i64, SqlType::BIGINT)]);

        let params = builder.finalize();
        assert_eq!(
            params.values(),
            &[
                SqlValue::from("first"),
                SqlValue::BigInt(2),
                SqlValue::BigInt(3)
            ]
        );
        assert_eq!(params.type_codes(), vec![12, -5, -5]);
    }

    #[test]
    fn test_iter_pairs() {
        let params = ParameterTypeArrayBuilder::new()
            .append(true, SqlType::BOOLEAN)
            .append(None::<i32>, SqlType::INTEGER)
            .finalize();

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (&SqlValue::Boolean(true), SqlType::BOOLEAN));
        assert_eq!(pairs[1], (&SqlValue::Null, SqlType::INTEGER));
    }

    #[test]
    fn test_into_parts() {
        let (values, types) = ParameterTypeArrayBuilder::new()
            .append("a", SqlType::CHAR)
            .finalize()
            .into_parts();
        assert_eq!(values.len(), 1);
        assert_eq!(types[0], SqlType::CHAR);
    }
}
