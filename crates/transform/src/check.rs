// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckSeverity {
	Ok,
	Warning,
	Error,
}

impl Display for CheckSeverity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CheckSeverity::Ok => f.write_str("OK"),
			CheckSeverity::Warning => f.write_str("WARNING"),
			CheckSeverity::Error => f.write_str("ERROR"),
		}
	}
}

/// A remark produced while validating a transform against its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
	pub severity: CheckSeverity,
	pub message: String,
	/// Name of the transform instance the remark refers to
	pub source: String,
}

impl CheckResult {
	pub fn ok(source: impl Into<String>, message: impl Into<String>) -> Self {
		Self::new(CheckSeverity::Ok, source, message)
	}

	pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
		Self::new(CheckSeverity::Warning, source, message)
	}

	pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
		Self::new(CheckSeverity::Error, source, message)
	}

	fn new(severity: CheckSeverity, source: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity,
			message: message.into(),
			source: source.into(),
		}
	}

	pub fn is_error(&self) -> bool {
		self.severity == CheckSeverity::Error
	}
}

impl Display for CheckResult {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}: {}", self.severity, self.source, self.message)
	}
}

/// Highest severity among `remarks`, `Ok` when there are none.
pub fn worst(remarks: &[CheckResult]) -> CheckSeverity {
	remarks.iter().map(|r| r.severity).max().unwrap_or(CheckSeverity::Ok)
}
