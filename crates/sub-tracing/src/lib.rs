// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Installs a global `tracing` subscriber for embedding applications.

mod builder;
mod factory;

pub use builder::{TracingBuilder, TracingFormat};
pub use factory::{TracingConfigurator, TracingSubsystemFactory};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("invalid filter directive: {0}")]
	Filter(#[from] tracing_subscriber::filter::ParseError),

	#[error("a global subscriber is already installed: {0}")]
	AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
