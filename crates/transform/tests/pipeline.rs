// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{sync::Arc, thread};

use textraction_sub_tracing::TracingBuilder;
use textraction_testing::prelude::*;
use textraction_transform::{CheckSeverity, Error, check::worst};

fn init_tracing() {
	let _ = TracingBuilder::for_tests().init();
}

#[test]
fn test_every_field_kept_and_value_added() {
	init_tracing();
	let inputs = vec![
		record!({}),
		record!({ "id": 1 }),
		record!({ "id": 1, "name": "a", "score": 2.5, "ok": true, "missing": null }),
	];

	for text in ["", "X", "Hello my name is Apache my Plugin!", "ünïcödé ✓"] {
		let transform = TextractionTransform::new("t", configure(text));
		for input in &inputs {
			let output = transform.process_row(input.clone());

			assert_eq!(output.get("Value"), Some(&Value::utf8(text)));
			assert_eq!(output.len(), input.len() + 1);
			for (name, value) in input.iter() {
				assert_eq!(output.get(name), Some(value));
			}
		}
	}
}

#[test]
fn test_schema_independent_of_data() {
	init_tracing();
	let mut harness = TransformTestHarness::builder()
		.with_config([("textraction_text", Value::utf8("X"))])
		.build()
		.unwrap();
	let input = SchemaBuilder::new().column("id", Type::Int8).column("name", Type::Utf8).build();

	harness.assert_output_columns(&input, &["id", "name", "Value"]);
	harness.apply(record!({ "id": 1, "name": "a" })).unwrap();
	harness.apply(record!({ "unrelated": "row" })).unwrap();
	harness.assert_output_columns(&input, &["id", "name", "Value"]);
	assert_eq!(harness.processed(), 2);
}

#[test]
fn test_host_flow_through_registry() {
	init_tracing();
	let registry = TransformRegistry::with_builtins();

	// host loads the persisted definition
	let persisted = configure("from disk").to_properties();
	let transform = registry.create("TextractionTransform", "enrich", &persisted).unwrap();

	// graph validation before execution
	let input = SchemaBuilder::new().column("id", Type::Int8).build();
	let remarks = transform.check(&input);
	assert_eq!(worst(&remarks), CheckSeverity::Ok);
	let output_schema = transform.output_schema(&input).unwrap();
	assert_eq!(output_schema.find("Value").and_then(|c| c.origin.as_deref()), Some("enrich"));

	let output = transform.apply(record!({ "id": 1 })).unwrap();
	assert_record_eq!(output, record!({ "id": 1, "Value": "from disk" }));
}

#[test]
fn test_conflicting_pipeline_rejected_before_rows() {
	init_tracing();
	let harness = TransformTestHarness::builder().build().unwrap();
	let input = SchemaBuilder::new().column("Value", Type::Utf8).build();

	assert!(matches!(harness.output_schema(&input), Err(Error::SchemaConflict { .. })));
	assert_eq!(worst(&harness.check(&input)), CheckSeverity::Error);
}

#[test]
fn test_shared_across_threads() {
	init_tracing();
	let transform = Arc::new(TextractionTransform::new("t", configure("X")));

	let handles: Vec<_> = (0..8)
		.map(|worker| {
			let transform = Arc::clone(&transform);
			thread::spawn(move || {
				(0..100i64)
					.map(|id| {
						let record = RecordBuilder::new().field("worker", worker as i64).field("id", id).build();
						transform.process_row(record)
					})
					.collect::<Vec<_>>()
			})
		})
		.collect();

	for handle in handles {
		let outputs = handle.join().unwrap();
		assert_eq!(outputs.len(), 100);
		assert!(outputs.iter().all(|r| r.get("Value") == Some(&Value::utf8("X")) && r.len() == 3));
	}
}

#[test]
fn test_editor_round() {
	init_tracing();
	let mut config = TextractionConfig::default();

	let mut editor = ConfigEditor::open("enrich", &config, false);
	editor.set_textraction_text("edited");
	editor.cancel();
	assert_eq!(config, TextractionConfig::default());

	let mut editor = ConfigEditor::open("enrich", &config, false);
	editor.set_textraction_text("edited");
	assert_eq!(editor.ok(&mut config).unwrap(), "enrich");

	let transform = TextractionTransform::new("enrich", config.clone());
	assert_record_eq!(transform.process_row(record!({})), record!({ "Value": "edited" }));
	assert_eq!(TextractionConfig::from_json(&config.to_json().unwrap()).unwrap(), config);
}
