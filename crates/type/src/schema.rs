// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Record, Type};

/// Describes one column of a [`Schema`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
	pub name: String,
	pub ty: Type,
	/// Name of the transform that introduced this column, if known
	pub origin: Option<String>,
}

impl ColumnDef {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
			origin: None,
		}
	}

	pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
		self.origin = Some(origin.into());
		self
	}
}

impl Display for ColumnDef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: {}", self.name, self.ty)
	}
}

/// Ordered list of columns describing the shape of records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
	columns: Vec<ColumnDef>,
}

impl Schema {
	pub fn new(columns: Vec<ColumnDef>) -> Self {
		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	/// Derives a schema from the value types of a record, in field order.
	pub fn infer(record: &Record) -> Self {
		Self {
			columns: record.iter().map(|(name, value)| ColumnDef::new(name, value.get_type())).collect(),
		}
	}

	pub fn push(&mut self, column: ColumnDef) {
		self.columns.push(column);
	}

	pub fn contains(&self, name: &str) -> bool {
		self.find(name).is_some()
	}

	pub fn find(&self, name: &str) -> Option<&ColumnDef> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
		self.columns.iter()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.name.as_str())
	}

	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}
}

impl Display for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("{")?;
		for (idx, column) in self.columns.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(column, f)?;
		}
		f.write_str("}")
	}
}

impl FromIterator<ColumnDef> for Schema {
	fn from_iter<I: IntoIterator<Item = ColumnDef>>(iter: I) -> Self {
		Self {
			columns: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{ColumnDef, Record, Schema, Type, Value};

	#[test]
	fn test_infer() {
		let record = Record::from(vec![("id", Value::int8(1)), ("name", Value::utf8("a"))]);
		let schema = Schema::infer(&record);

		assert_eq!(
			schema.columns(),
			&[ColumnDef::new("id", Type::Int8), ColumnDef::new("name", Type::Utf8)]
		);
	}

	#[test]
	fn test_find() {
		let schema = Schema::new(vec![ColumnDef::new("id", Type::Int8)]);
		assert!(schema.contains("id"));
		assert!(!schema.contains("Value"));
		assert_eq!(schema.find("id").map(|c| c.ty), Some(Type::Int8));
	}

	#[test]
	fn test_display() {
		let schema = Schema::new(vec![ColumnDef::new("id", Type::Int8), ColumnDef::new("Value", Type::Utf8)]);
		assert_eq!(schema.to_string(), "{id: INT8, Value: UTF8}");
	}
}
