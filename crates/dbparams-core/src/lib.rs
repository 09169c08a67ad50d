// ABOUTME: Core value and type-code vocabulary for dbparams
// ABOUTME: Foundation crate with SqlType, SqlValue and the shared error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # dbparams Core
//!
//! Foundation crate providing the vocabulary shared by the `dbparams`
//! accumulator: SQL type codes, bindable values, and the error type used by
//! the manifest and transform layers.
//!
//! ## Modules
//!
//! - **errors**: `ParamError` and the `ParamResult` alias
//! - **sql_type**: `SqlType`, an opaque JDBC-style type code with named constants
//! - **value**: `SqlValue`, the tagged union of SQL-bindable primitives

/// Error type for manifest loading, type-name parsing and named transforms
pub mod errors;

/// JDBC-style SQL type codes
pub mod sql_type;

/// SQL-bindable parameter values
pub mod value;

pub use errors::{ParamError, ParamResult};
pub use sql_type::SqlType;
pub use value::SqlValue;
