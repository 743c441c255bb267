// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Textraction transform
//!
//! Appends one text field named `Value` to every record of a stream. The text
//! is configured once before a run (`textraction_text`, defaulting to
//! [`DEFAULT_TEXTRACTION_TEXT`]) and is read-only while rows are processed.
//!
//! Hosts reach the transform through a [`TransformRegistry`], declare
//! downstream columns with [`Transform::output_schema`] and push rows through
//! [`Transform::apply`]. [`ConfigEditor`] backs whatever form a host renders to
//! edit the text.

pub mod check;
mod config;
mod editor;
mod error;
pub mod metadata;
mod registry;
pub mod transform;
mod variables;

pub use check::{CheckResult, CheckSeverity};
pub use config::{DEFAULT_TEXTRACTION_TEXT, TextractionConfig, configure};
pub use editor::ConfigEditor;
pub use error::{Error, Result};
pub use metadata::{TEXTRACTION, TransformMetadata};
pub use registry::{TransformFactory, TransformRegistry};
pub use transform::{
	BoxedTransform, OUTPUT_FIELD_NAME, TextractionTransform, Transform, describe_output_schema, process_row,
};
pub use variables::Variables;

pub use textraction_type::{ColumnDef, Record, Schema, Type, Value};
