// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use serde_json::Value as JsonValue;
use textraction_type::{ColumnDef, Record, Schema, Type, Value};

/// Builds records field by field or from JSON objects.
#[derive(Default)]
pub struct RecordBuilder {
	record: Record,
}

impl RecordBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.record.insert(name, value);
		self
	}

	pub fn build(self) -> Record {
		self.record
	}

	/// Converts a JSON object into a record, keeping key order.
	///
	/// Integers become `Int8` (or `Uint8` beyond `i64::MAX`), other numbers
	/// `Float8`, `null` becomes `Undefined`. Arrays and objects are stored as
	/// their JSON text.
	pub fn from_json(json: JsonValue) -> Record {
		match json {
			JsonValue::Object(map) => map.into_iter().map(|(name, value)| (name, json_to_value(value))).collect(),
			other => panic!("expected a JSON object, got {other}"),
		}
	}
}

pub fn json_to_value(json: JsonValue) -> Value {
	match json {
		JsonValue::Null => Value::Undefined,
		JsonValue::Bool(b) => Value::bool(b),
		JsonValue::Number(n) => {
			if let Some(i) = n.as_i64() {
				Value::int8(i)
			} else if let Some(u) = n.as_u64() {
				Value::uint8(u)
			} else {
				n.as_f64().map(Value::float8).unwrap_or(Value::Undefined)
			}
		}
		JsonValue::String(s) => Value::utf8(s),
		nested => Value::utf8(nested.to_string()),
	}
}

/// Builds schemas column by column.
#[derive(Default)]
pub struct SchemaBuilder {
	columns: Vec<ColumnDef>,
}

impl SchemaBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.columns.push(ColumnDef::new(name, ty));
		self
	}

	pub fn build(self) -> Schema {
		Schema::new(self.columns)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use textraction_type::{Type, Value};

	use super::*;

	#[test]
	fn test_from_json_types() {
		let record = RecordBuilder::from_json(json!({
			"i": 1,
			"u": u64::MAX,
			"f": 1.5,
			"s": "a",
			"b": true,
			"n": null,
			"o": {"k": 1}
		}));

		assert_eq!(record.get("i"), Some(&Value::int8(1)));
		assert_eq!(record.get("u"), Some(&Value::uint8(u64::MAX)));
		assert_eq!(record.get("f"), Some(&Value::float8(1.5)));
		assert_eq!(record.get("s"), Some(&Value::utf8("a")));
		assert_eq!(record.get("b"), Some(&Value::bool(true)));
		assert_eq!(record.get("n"), Some(&Value::Undefined));
		assert_eq!(record.get("o"), Some(&Value::utf8(r#"{"k":1}"#)));
	}

	#[test]
	fn test_field_order() {
		let record = RecordBuilder::new().field("b", 1i64).field("a", "x").build();
		assert_eq!(record.names().collect::<Vec<_>>(), vec!["b", "a"]);
	}

	#[test]
	fn test_schema_builder() {
		let schema = SchemaBuilder::new().column("id", Type::Int8).column("name", Type::Utf8).build();
		assert_eq!(schema.names().collect::<Vec<_>>(), vec!["id", "name"]);
	}
}
