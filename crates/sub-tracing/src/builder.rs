// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subscriber

use tracing::Level;
use tracing_subscriber::{
	EnvFilter, Layer, Registry,
	filter::LevelFilter,
	fmt::{self, TestWriter},
	layer::SubscriberExt,
	util::SubscriberInitExt,
};

use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TracingFormat {
	Compact,
	Pretty,
	Json,
}

/// Builder for configuring the tracing subscriber
#[derive(Clone, Debug)]
pub struct TracingBuilder {
	level: Level,
	filter: Option<String>,
	format: TracingFormat,
	ansi: bool,
	with_target: bool,
	test_writer: bool,
}

impl TracingBuilder {
	/// Create a new tracing builder with default settings
	pub fn new() -> Self {
		Self {
			level: Level::INFO,
			filter: None,
			format: TracingFormat::Compact,
			ansi: true,
			with_target: true,
			test_writer: false,
		}
	}

	/// Settings for unit tests: debug level, output captured by the test harness
	pub fn for_tests() -> Self {
		Self::new().with_level(Level::DEBUG).with_ansi(false).with_test_writer()
	}

	/// Default level when neither a filter nor `RUST_LOG` is given
	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Filter directives, e.g. `textraction_transform=trace,info`.
	/// Takes precedence over `RUST_LOG`.
	pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
		self.filter = Some(directives.into());
		self
	}

	pub fn json(mut self) -> Self {
		self.format = TracingFormat::Json;
		self
	}

	pub fn pretty(mut self) -> Self {
		self.format = TracingFormat::Pretty;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_test_writer(mut self) -> Self {
		self.test_writer = true;
		self
	}

	pub fn level(&self) -> Level {
		self.level
	}

	pub fn format(&self) -> TracingFormat {
		self.format
	}

	pub fn env_filter(&self) -> Result<EnvFilter> {
		let builder = EnvFilter::builder().with_default_directive(LevelFilter::from_level(self.level).into());
		match &self.filter {
			Some(directives) => Ok(builder.parse(directives)?),
			None => Ok(builder.from_env_lossy()),
		}
	}

	/// Installs the subscriber globally. Fails instead of panicking when a
	/// subscriber is already installed.
	pub fn init(self) -> Result<()> {
		let filter = self.env_filter()?;
		tracing_subscriber::registry().with(self.fmt_layer()).with(filter).try_init()?;
		Ok(())
	}

	fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
		match (self.format, self.test_writer) {
			(TracingFormat::Json, false) => fmt::layer().json().with_target(self.with_target).boxed(),
			(TracingFormat::Json, true) => {
				fmt::layer().json().with_target(self.with_target).with_writer(TestWriter::new()).boxed()
			}
			(TracingFormat::Pretty, false) => {
				fmt::layer().pretty().with_ansi(self.ansi).with_target(self.with_target).boxed()
			}
			(TracingFormat::Pretty, true) => fmt::layer()
				.pretty()
				.with_ansi(self.ansi)
				.with_target(self.with_target)
				.with_writer(TestWriter::new())
				.boxed(),
			(TracingFormat::Compact, false) => {
				fmt::layer().compact().with_ansi(self.ansi).with_target(self.with_target).boxed()
			}
			(TracingFormat::Compact, true) => fmt::layer()
				.compact()
				.with_ansi(self.ansi)
				.with_target(self.with_target)
				.with_writer(TestWriter::new())
				.boxed(),
		}
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
