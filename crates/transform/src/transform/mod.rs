// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Transform traits and types

use std::fmt::Debug;

use textraction_type::{Record, Schema};

use crate::{Result, check::CheckResult, metadata::TransformMetadata};

mod textraction;

pub use textraction::{OUTPUT_FIELD_NAME, TextractionTransform, describe_output_schema, process_row};

/// Runtime transform behavior as seen by a host pipeline engine.
/// Transforms must be Send + Sync so rows can be processed from any thread.
pub trait Transform: Debug + Send + Sync {
	/// Static metadata of the transform kind
	fn metadata(&self) -> &'static TransformMetadata;

	/// Name of this transform instance within its pipeline
	fn name(&self) -> &str;

	/// Output schema for `input`, computed without looking at any row
	fn output_schema(&self, input: &Schema) -> Result<Schema>;

	/// Process one record
	fn apply(&self, record: Record) -> Result<Record>;

	/// Validation remarks for graph validation time
	fn check(&self, input: &Schema) -> Vec<CheckResult>;
}

pub type BoxedTransform = Box<dyn Transform>;
