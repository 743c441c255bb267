// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Declarative macros for transform tests

use textraction_transform::Transform;
use textraction_type::Record;

/// Create a record from a JSON object, keeping key order
///
/// # Example
/// ```
/// use textraction_testing::record;
///
/// let record = record!({ "id": 1, "name": "Alice" });
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
	($json:tt) => {{ $crate::builders::RecordBuilder::from_json($crate::serde_json::json!($json)) }};
}

/// Assert two records hold the same fields in the same order
///
/// # Example
/// ```
/// use textraction_testing::{assert_record_eq, record};
///
/// assert_record_eq!(record!({ "id": 1 }), record!({ "id": 1 }));
/// ```
#[macro_export]
macro_rules! assert_record_eq {
	($actual:expr, $expected:expr) => {{
		let actual = &$actual;
		let expected = &$expected;
		let actual_names: Vec<&str> = actual.names().collect();
		let expected_names: Vec<&str> = expected.names().collect();
		assert_eq!(actual_names, expected_names, "Record fields don't match");
		for name in expected_names {
			assert_eq!(actual.get(name), expected.get(name), "Field `{}` doesn't match", name);
		}
	}};
}

/// Test a transform with input/output pairs
///
/// # Example
/// ```
/// use textraction_testing::{record, test_transform};
/// use textraction_transform::{TextractionTransform, configure};
///
/// test_transform! {
/// 	transform: TextractionTransform::new("t", configure("X")),
/// 	tests: [
/// 		{
/// 			input: record!({ "id": 1 }),
/// 			output: record!({ "id": 1, "Value": "X" }),
/// 		},
/// 	]
/// }
/// ```
#[macro_export]
macro_rules! test_transform {
	(
		transform: $transform:expr,
		tests: [
			$(
				{
					input: $input:expr,
					output: $output:expr $(,)?
				}
			),* $(,)?
		]
	) => {{
		let transform = $transform;

		$(
			let input = $input;
			let expected = $output;
			let actual = $crate::macros::apply(&transform, input);
			$crate::assert_record_eq!(actual, expected);
		)*
	}};
}

#[doc(hidden)]
pub fn apply<T>(transform: &T, record: Record) -> Record
where
	T: Transform + ?Sized,
{
	transform.apply(record).expect("Transform apply failed")
}

#[cfg(test)]
mod tests {
	use textraction_transform::{TextractionTransform, configure};

	#[test]
	fn test_record_macro_keeps_order() {
		let record = record!({ "z": 1, "a": 2 });
		assert_eq!(record.names().collect::<Vec<_>>(), vec!["z", "a"]);
	}

	#[test]
	fn test_transform_macro() {
		test_transform! {
			transform: TextractionTransform::new("t", configure("X")),
			tests: [
				{
					input: record!({ "id": 1, "name": "a" }),
					output: record!({ "id": 1, "name": "a", "Value": "X" }),
				},
				{
					input: record!({}),
					output: record!({ "Value": "X" }),
				},
			]
		}
	}

	#[test]
	#[should_panic(expected = "Record fields don't match")]
	fn test_assert_record_eq_detects_order() {
		assert_record_eq!(record!({ "a": 1, "b": 2 }), record!({ "b": 2, "a": 1 }));
	}
}
