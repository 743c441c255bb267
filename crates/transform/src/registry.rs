// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, sync::Arc};

use textraction_type::Value;
use tracing::{instrument, warn};

use crate::{
	Error, Result, TextractionConfig,
	metadata::TEXTRACTION,
	transform::{BoxedTransform, TextractionTransform},
};

/// Builds a transform instance from its name and persisted configuration.
pub type TransformFactory = Arc<dyn Fn(&str, &HashMap<String, Value>) -> Result<BoxedTransform> + Send + Sync>;

/// Transform kinds an embedding application makes available, keyed by id.
#[derive(Clone, Default)]
pub struct TransformRegistry {
	factories: HashMap<String, TransformFactory>,
}

impl TransformRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry with every transform this crate ships
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		registry.register(TEXTRACTION.id, |name, config| {
			let config = TextractionConfig::from_properties(config)?;
			Ok(Box::new(TextractionTransform::new(name, config)) as BoxedTransform)
		});
		registry
	}

	/// Registers `factory` under `id`, replacing any previous factory.
	pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
	where
		F: Fn(&str, &HashMap<String, Value>) -> Result<BoxedTransform> + Send + Sync + 'static,
	{
		let id = id.into();
		if self.factories.contains_key(&id) {
			warn!(%id, "replacing registered transform factory");
		}
		self.factories.insert(id, Arc::new(factory));
	}

	pub fn contains(&self, id: &str) -> bool {
		self.factories.contains_key(id)
	}

	/// Registered ids in ascending order
	pub fn ids(&self) -> Vec<&str> {
		let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
		ids.sort_unstable();
		ids
	}

	#[instrument(name = "registry::create", level = "debug", skip(self, config))]
	pub fn create(&self, id: &str, name: &str, config: &HashMap<String, Value>) -> Result<BoxedTransform> {
		let factory = self.factories.get(id).ok_or_else(|| Error::UnknownTransform {
			id: id.to_string(),
		})?;
		factory(name, config)
	}
}

impl std::fmt::Debug for TransformRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TransformRegistry").field("ids", &self.ids()).finish()
	}
}
