// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

/// Named variables that configured text may reference as `${NAME}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variables {
	values: HashMap<String, String>,
}

impl Variables {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(name, value);
		self
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Substitutes every `${NAME}` with its value.
	///
	/// References to unknown variables and an unterminated `${` are kept as
	/// written. Substituted values are not resolved again.
	pub fn resolve(&self, input: &str) -> String {
		let mut output = String::with_capacity(input.len());
		let mut rest = input;

		while let Some(start) = rest.find("${") {
			output.push_str(&rest[..start]);
			let after = &rest[start + 2..];

			let Some(end) = after.find('}') else {
				output.push_str(&rest[start..]);
				return output;
			};

			let name = &after[..end];
			match self.get(name) {
				Some(value) => output.push_str(value),
				None => output.push_str(&rest[start..start + 2 + end + 1]),
			}
			rest = &after[end + 1..];
		}

		output.push_str(rest);
		output
	}
}

impl<K, V> FromIterator<(K, V)> for Variables
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut variables = Variables::new();
		for (name, value) in iter {
			variables.set(name, value);
		}
		variables
	}
}

#[cfg(test)]
mod tests {

	mod resolve {
		use crate::Variables;

		#[test]
		fn test_no_references() {
			let vars = Variables::new();
			assert_eq!(vars.resolve("plain text"), "plain text");
			assert_eq!(vars.resolve(""), "");
		}

		#[test]
		fn test_substitutes_known() {
			let vars = Variables::new().with("USER", "apache").with("ENV", "prod");
			assert_eq!(vars.resolve("hi ${USER} on ${ENV}!"), "hi apache on prod!");
		}

		#[test]
		fn test_unknown_kept() {
			let vars = Variables::new().with("USER", "apache");
			assert_eq!(vars.resolve("${MISSING}/${USER}"), "${MISSING}/apache");
		}

		#[test]
		fn test_unterminated_kept() {
			let vars = Variables::new().with("USER", "apache");
			assert_eq!(vars.resolve("${USER} and ${USER"), "apache and ${USER");
		}

		#[test]
		fn test_not_recursive() {
			let vars = Variables::new().with("A", "${B}").with("B", "b");
			assert_eq!(vars.resolve("${A}"), "${B}");
		}

		#[test]
		fn test_lone_dollar() {
			let vars = Variables::new();
			assert_eq!(vars.resolve("costs $5 {ok}"), "costs $5 {ok}");
		}
	}
}
