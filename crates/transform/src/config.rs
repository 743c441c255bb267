// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use textraction_type::Value;
use tracing::instrument;

use crate::{Error, Result, metadata::TEXTRACTION_TEXT_KEY};

pub const DEFAULT_TEXTRACTION_TEXT: &str = "Hello my name is Apache my Plugin!";

/// Configuration of a textraction transform.
///
/// Set once before a run starts and read-only while rows are processed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextractionConfig {
	#[serde(rename = "textraction_text", default = "default_textraction_text")]
	textraction_text: String,
}

fn default_textraction_text() -> String {
	DEFAULT_TEXTRACTION_TEXT.to_string()
}

impl Default for TextractionConfig {
	fn default() -> Self {
		Self {
			textraction_text: default_textraction_text(),
		}
	}
}

/// Stores `textraction_text` for the lifetime of a run. Any string is
/// accepted, including the empty one.
pub fn configure(textraction_text: impl Into<String>) -> TextractionConfig {
	TextractionConfig {
		textraction_text: textraction_text.into(),
	}
}

impl TextractionConfig {
	pub fn textraction_text(&self) -> &str {
		&self.textraction_text
	}

	pub fn set_textraction_text(&mut self, textraction_text: impl Into<String>) {
		self.textraction_text = textraction_text.into();
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	#[instrument(name = "config::from_json", level = "trace", skip(json))]
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Key-value form a host stores in its pipeline definition.
	pub fn to_properties(&self) -> HashMap<String, Value> {
		HashMap::from([(TEXTRACTION_TEXT_KEY.to_string(), Value::utf8(self.textraction_text.as_str()))])
	}

	/// Reads the key-value form. A missing key falls back to the default text.
	#[instrument(name = "config::from_properties", level = "trace", skip(properties))]
	pub fn from_properties(properties: &HashMap<String, Value>) -> Result<Self> {
		match properties.get(TEXTRACTION_TEXT_KEY) {
			None => Ok(Self::default()),
			Some(Value::Utf8(text)) => Ok(configure(text.as_str())),
			Some(other) => Err(Error::InvalidConfig {
				key: TEXTRACTION_TEXT_KEY.to_string(),
				reason: format!("expected UTF8, got {}", other.get_type()),
			}),
		}
	}
}
