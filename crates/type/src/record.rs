// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// One row flowing through a pipeline: named fields in insertion order.
///
/// Field names are unique. Inserting an existing name replaces its value in
/// place and keeps the field's original position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
	fields: IndexMap<String, Value>,
}

impl Record {
	pub fn new() -> Self {
		Self {
			fields: IndexMap::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			fields: IndexMap::with_capacity(capacity),
		}
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	/// Returns the previous value when `name` was already present.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.fields.insert(name.into(), value.into())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Position of `name` in field order.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.fields.get_index_of(name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}
}

impl<K, V> From<Vec<(K, V)>> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from(fields: Vec<(K, V)>) -> Self {
		fields.into_iter().collect()
	}
}

impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut record = Record::new();
		for (name, value) in iter {
			record.insert(name, value);
		}
		record
	}
}

impl IntoIterator for Record {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

#[cfg(test)]
mod tests {

	mod insert {
		use crate::{Record, Value};

		#[test]
		fn test_appends_in_order() {
			let mut record = Record::new();
			record.insert("id", 1i64);
			record.insert("name", "a");

			assert_eq!(record.names().collect::<Vec<_>>(), vec!["id", "name"]);
			assert_eq!(record.len(), 2);
		}

		#[test]
		fn test_existing_keeps_position() {
			let mut record = Record::from(vec![("a", Value::int8(1)), ("b", Value::int8(2))]);
			let previous = record.insert("a", 10i64);

			assert_eq!(previous, Some(Value::int8(1)));
			assert_eq!(record.position("a"), Some(0));
			assert_eq!(record.get("a"), Some(&Value::int8(10)));
			assert_eq!(record.len(), 2);
		}
	}

	mod json {
		use crate::{Record, Value};

		#[test]
		fn test_json_object() {
			let record = Record::from(vec![("id", Value::int8(1)), ("name", Value::utf8("a"))]);
			let json = serde_json::to_string(&record).unwrap();
			assert_eq!(json, r#"{"id":{"Int8":1},"name":{"Utf8":"a"}}"#);
		}
	}

	#[test]
	fn test_empty() {
		let record = crate::Record::new();
		assert!(record.is_empty());
		assert_eq!(record.get("Value"), None);
	}
}
