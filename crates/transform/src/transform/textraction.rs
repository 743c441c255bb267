// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use rayon::prelude::*;
use textraction_type::{ColumnDef, Record, Schema, Type};
use tracing::{debug, instrument, trace};

use crate::{
	Error, Result, TextractionConfig, Variables,
	check::CheckResult,
	metadata::{TEXTRACTION, TransformMetadata},
	transform::Transform,
};

/// Name of the field every output record carries.
pub const OUTPUT_FIELD_NAME: &str = "Value";

/// Returns `record` with the field `Value` set to the configured text.
///
/// A record that already has a `Value` field gets it overwritten in place, so
/// the field keeps its position and the field count stays the same.
pub fn process_row(mut record: Record, config: &TextractionConfig) -> Record {
	if let Some(previous) = record.insert(OUTPUT_FIELD_NAME, config.textraction_text()) {
		trace!(%previous, "overwriting existing output field");
	}
	record
}

/// Appends `Value: UTF8` to `input`.
///
/// Fails with [`Error::SchemaConflict`] when the input already declares the
/// output field, so conflicting pipelines are rejected before any row runs.
pub fn describe_output_schema(input: &Schema) -> Result<Schema> {
	append_output_column(input, None)
}

fn append_output_column(input: &Schema, origin: Option<&str>) -> Result<Schema> {
	if input.contains(OUTPUT_FIELD_NAME) {
		return Err(Error::SchemaConflict {
			field: OUTPUT_FIELD_NAME.to_string(),
		});
	}

	let mut column = ColumnDef::new(OUTPUT_FIELD_NAME, Type::Utf8);
	if let Some(origin) = origin {
		column = column.with_origin(origin);
	}

	let mut output = input.clone();
	output.push(column);
	Ok(output)
}

/// A named textraction transform bound to its configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextractionTransform {
	name: String,
	config: TextractionConfig,
}

impl TextractionTransform {
	pub fn new(name: impl Into<String>, config: TextractionConfig) -> Self {
		Self {
			name: name.into(),
			config,
		}
	}

	/// Resolves `${NAME}` references in the configured text once, at setup.
	pub fn new_with_variables(name: impl Into<String>, config: TextractionConfig, variables: &Variables) -> Self {
		let resolved = variables.resolve(config.textraction_text());
		Self::new(name, crate::configure(resolved))
	}

	pub fn config(&self) -> &TextractionConfig {
		&self.config
	}

	pub fn process_row(&self, record: Record) -> Record {
		process_row(record, &self.config)
	}

	/// Like [`describe_output_schema`], marking this transform as the origin
	/// of the new column.
	#[instrument(name = "textraction::describe_output_schema", level = "debug", skip(self, input), fields(name = %self.name))]
	pub fn describe_output_schema(&self, input: &Schema) -> Result<Schema> {
		let output = append_output_column(input, Some(&self.name))?;
		debug!(columns = output.len(), "described output schema");
		Ok(output)
	}

	pub fn process_rows(&self, records: Vec<Record>) -> Vec<Record> {
		records.into_iter().map(|record| self.process_row(record)).collect()
	}

	/// Processes `records` on the rayon pool, preserving their order.
	pub fn process_rows_par(&self, records: Vec<Record>) -> Vec<Record> {
		records.into_par_iter().map(|record| self.process_row(record)).collect()
	}

	pub fn check(&self, input: &Schema) -> Vec<CheckResult> {
		let mut remarks = Vec::new();

		if input.contains(OUTPUT_FIELD_NAME) {
			remarks.push(CheckResult::error(
				self.name.as_str(),
				format!("input already contains a field named `{OUTPUT_FIELD_NAME}`"),
			));
		}

		if input.is_empty() {
			remarks.push(CheckResult::warning(self.name.as_str(), "no fields are received from previous transforms"));
		}

		if self.config.textraction_text().is_empty() {
			remarks.push(CheckResult::warning(self.name.as_str(), "configured text is empty"));
		}

		if remarks.is_empty() {
			remarks.push(CheckResult::ok(
				self.name.as_str(),
				format!("receiving {} fields from previous transforms", input.len()),
			));
		}

		remarks
	}
}

impl Transform for TextractionTransform {
	fn metadata(&self) -> &'static TransformMetadata {
		&TEXTRACTION
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn output_schema(&self, input: &Schema) -> Result<Schema> {
		self.describe_output_schema(input)
	}

	fn apply(&self, record: Record) -> Result<Record> {
		Ok(self.process_row(record))
	}

	fn check(&self, input: &Schema) -> Vec<CheckResult> {
		TextractionTransform::check(self, input)
	}
}
