// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Testing utilities for textraction transforms
//!
//! Builders for records and schemas, a harness that drives a transform the
//! way a host would, and assertion macros.
//!
//! # Example
//!
//! ```ignore
//! use textraction_testing::prelude::*;
//!
//! #[test]
//! fn test_enrich() {
//! 	let mut harness = TransformTestHarness::builder()
//! 		.with_config([("textraction_text", Value::utf8("X"))])
//! 		.build()
//! 		.unwrap();
//!
//! 	let output = harness.apply(record!({ "id": 1 })).unwrap();
//! 	assert_record_eq!(output, record!({ "id": 1, "Value": "X" }));
//! }
//! ```

pub mod builders;
pub mod harness;
pub mod macros;

pub use serde_json;

pub mod prelude {
	pub use textraction_transform::{
		ConfigEditor, Record, Schema, TextractionConfig, TextractionTransform, Transform, TransformRegistry,
		Type, Value, configure,
	};

	pub use crate::{
		assert_record_eq,
		builders::{RecordBuilder, SchemaBuilder},
		harness::TransformTestHarness,
		record, test_transform,
	};
}
