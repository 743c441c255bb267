// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Form binding for editing a textraction transform.
//!
//! Holds the two editable fields (transform name and text) independently of
//! any widget toolkit. A UI layer copies widget contents in through the
//! setters and finishes with [`ConfigEditor::ok`] or [`ConfigEditor::cancel`].

use tracing::debug;

use crate::{Error, Result, TextractionConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigEditor {
	transform_name: String,
	textraction_text: String,
	changed: bool,
	changed_on_open: bool,
}

impl ConfigEditor {
	/// Copies the current name and configuration into the form.
	///
	/// `changed` is the host's pending-change flag for this transform; cancel
	/// restores it.
	pub fn open(transform_name: impl Into<String>, config: &TextractionConfig, changed: bool) -> Self {
		Self {
			transform_name: transform_name.into(),
			textraction_text: config.textraction_text().to_string(),
			changed,
			changed_on_open: changed,
		}
	}

	pub fn transform_name(&self) -> &str {
		&self.transform_name
	}

	pub fn textraction_text(&self) -> &str {
		&self.textraction_text
	}

	pub fn has_changed(&self) -> bool {
		self.changed
	}

	pub fn set_transform_name(&mut self, transform_name: impl Into<String>) {
		self.transform_name = transform_name.into();
		self.changed = true;
	}

	pub fn set_textraction_text(&mut self, textraction_text: impl Into<String>) {
		self.textraction_text = textraction_text.into();
		self.changed = true;
	}

	/// Stores the edited text into `config` and returns the transform name.
	///
	/// An empty name is rejected and leaves `config` untouched, so the form can
	/// stay open for correction.
	pub fn ok(&mut self, config: &mut TextractionConfig) -> Result<String> {
		if self.transform_name.is_empty() {
			return Err(Error::BlankTransformName);
		}

		config.set_textraction_text(self.textraction_text.as_str());
		debug!(name = %self.transform_name, "stored edited configuration");
		Ok(self.transform_name.clone())
	}

	/// Discards the edits. The configuration is never touched and the
	/// pending-change flag goes back to its value at open.
	pub fn cancel(&mut self) -> Option<String> {
		self.changed = self.changed_on_open;
		None
	}
}
