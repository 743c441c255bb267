// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use crate::{Result, builder::TracingBuilder};

/// Configuration function for the tracing subscriber
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Installs the tracing subscriber, optionally customized by a configurator
pub struct TracingSubsystemFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingSubsystemFactory {
	/// Create a new factory with default configuration
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn builder(self) -> TracingBuilder {
		if let Some(configurator) = self.configurator {
			configurator(TracingBuilder::new())
		} else {
			TracingBuilder::default()
		}
	}

	pub fn init(self) -> Result<()> {
		self.builder().init()
	}
}

impl Default for TracingSubsystemFactory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use tracing::Level;

	use crate::{TracingFormat, TracingSubsystemFactory};

	#[test]
	fn test_default_builder() {
		let builder = TracingSubsystemFactory::new().builder();
		assert_eq!(builder.level(), Level::INFO);
		assert_eq!(builder.format(), TracingFormat::Compact);
	}

	#[test]
	fn test_configurator_applied() {
		let builder = TracingSubsystemFactory::with_configurator(|b| b.with_level(Level::TRACE).json()).builder();
		assert_eq!(builder.level(), Level::TRACE);
		assert_eq!(builder.format(), TracingFormat::Json);
	}
}
