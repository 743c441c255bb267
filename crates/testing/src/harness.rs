// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use textraction_transform::{BoxedTransform, CheckResult, Result, TEXTRACTION, TransformRegistry, Value};
use textraction_type::{Record, Schema};

/// Drives a transform created through a registry, the way a host would:
/// validate the schema once, then push records through it.
#[derive(Debug)]
pub struct TransformTestHarness {
	transform: BoxedTransform,
	processed: usize,
}

impl TransformTestHarness {
	pub fn builder() -> TransformTestHarnessBuilder {
		TransformTestHarnessBuilder::default()
	}

	pub fn transform(&self) -> &BoxedTransform {
		&self.transform
	}

	pub fn apply(&mut self, record: Record) -> Result<Record> {
		let output = self.transform.apply(record)?;
		self.processed += 1;
		Ok(output)
	}

	pub fn apply_all(&mut self, records: Vec<Record>) -> Result<Vec<Record>> {
		records.into_iter().map(|record| self.apply(record)).collect()
	}

	pub fn output_schema(&self, input: &Schema) -> Result<Schema> {
		self.transform.output_schema(input)
	}

	pub fn check(&self, input: &Schema) -> Vec<CheckResult> {
		self.transform.check(input)
	}

	/// Number of records pushed through so far
	pub fn processed(&self) -> usize {
		self.processed
	}

	/// Asserts the output schema for `input` has exactly `expected` column names.
	pub fn assert_output_columns(&self, input: &Schema, expected: &[&str]) {
		let output = self.output_schema(input).expect("output schema failed");
		let names: Vec<&str> = output.names().collect();
		assert_eq!(names, expected, "output columns mismatch");
	}
}

pub struct TransformTestHarnessBuilder {
	registry: TransformRegistry,
	id: String,
	name: String,
	config: HashMap<String, Value>,
}

impl Default for TransformTestHarnessBuilder {
	fn default() -> Self {
		Self {
			registry: TransformRegistry::with_builtins(),
			id: TEXTRACTION.id.to_string(),
			name: "test".to_string(),
			config: HashMap::new(),
		}
	}
}

impl TransformTestHarnessBuilder {
	pub fn with_registry(mut self, registry: TransformRegistry) -> Self {
		self.registry = registry;
		self
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_config<I, K>(mut self, config: I) -> Self
	where
		I: IntoIterator<Item = (K, Value)>,
		K: Into<String>,
	{
		self.config.extend(config.into_iter().map(|(k, v)| (k.into(), v)));
		self
	}

	pub fn build(self) -> Result<TransformTestHarness> {
		let transform = self.registry.create(&self.id, &self.name, &self.config)?;
		Ok(TransformTestHarness {
			transform,
			processed: 0,
		})
	}
}
