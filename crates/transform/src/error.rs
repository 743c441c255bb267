// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("output field `{field}` already exists in the input schema")]
	SchemaConflict {
		field: String,
	},

	#[error("invalid configuration for `{key}`: {reason}")]
	InvalidConfig {
		key: String,
		reason: String,
	},

	#[error("no transform registered with id `{id}`")]
	UnknownTransform {
		id: String,
	},

	#[error("transform name must not be empty")]
	BlankTransformName,

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
