// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Static description of a transform kind, shown by hosts in their palettes.

/// Describes a configuration key a transform understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigKeyDef {
	pub key: &'static str,
	pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformMetadata {
	/// Registry id (must be unique within a registry)
	pub id: &'static str,
	/// Human-readable name
	pub name: &'static str,
	pub description: &'static str,
	pub category: &'static str,
	/// Icon file name, resolved by the host
	pub image: &'static str,
	pub documentation_url: &'static str,
	pub config_keys: &'static [ConfigKeyDef],
}

impl TransformMetadata {
	pub fn config_key(&self, key: &str) -> Option<&ConfigKeyDef> {
		self.config_keys.iter().find(|def| def.key == key)
	}
}

pub const TEXTRACTION_TEXT_KEY: &str = "textraction_text";

pub const TEXTRACTION: TransformMetadata = TransformMetadata {
	id: "TextractionTransform",
	name: "Textraction",
	description: "Appends a configurable text field to every row",
	category: "Transform",
	image: "textraction.svg",
	documentation_url: "",
	config_keys: &[ConfigKeyDef {
		key: TEXTRACTION_TEXT_KEY,
		description: "The text written into the Value field of every row",
	}],
};
