// ABOUTME: Main library entry point for dbparams
// ABOUTME: Builds parallel SQL parameter value and type-code arrays for positional execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # dbparams
//!
//! Builds two parallel arrays, one of parameter values and one of SQL type
//! codes, for statement APIs that take positional parameters alongside
//! explicit JDBC-style type codes.
//!
//! ## Quick Start
//!
//! ```
//! use dbparams::{transforms, ParameterTypeArrays, SqlType, SqlValue};
//!
//! let params = ParameterTypeArrays::builder()
//!     .append_with(None::<&str>, SqlType::VARCHAR, transforms::null_to_empty)
//!     .append_with(1000, SqlType::VARCHAR, transforms::to_text)
//!     .append("NormalNoMod", SqlType::LONGVARCHAR)
//!     .finalize();
//!
//! assert_eq!(params.values()[0], SqlValue::from(""));
//! assert_eq!(params.types()[2], SqlType::LONGVARCHAR);
//! ```
//!
//! ## Modules
//!
//! - **builder**: the order-preserving accumulator and its immutable result
//! - **transforms**: reusable value transforms and named `TransformKind`s
//! - **manifest**: JSON manifests fed through the accumulator
//! - **binding**: positional binding onto sqlx SQLite queries
//! - **logging**: tracing subscriber setup from the environment

/// Order-preserving parameter/type accumulator
pub mod builder;

/// Positional binding onto sqlx SQLite queries
pub mod binding;

/// Structured logging configuration
pub mod logging;

/// JSON parameter manifests
pub mod manifest;

/// Value transforms
pub mod transforms;

pub use builder::{ParameterTypeArrayBuilder, ParameterTypeArrays};
pub use dbparams_core::{ParamError, ParamResult, SqlType, SqlValue};
pub use manifest::ParameterManifest;
