// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// An `f64` that is never NaN, so it can take part in `Eq` and `Hash`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl Eq for OrderedF64 {}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		// -0.0 == 0.0 must hash alike
		let normalized = if self.0 == 0.0 {
			0.0f64
		} else {
			self.0
		};
		normalized.to_bits().hash(state);
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = &'static str;

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			Err("NaN is not a valid OrderedF64")
		} else {
			Ok(OrderedF64(value))
		}
	}
}

impl From<OrderedF64> for f64 {
	fn from(value: OrderedF64) -> Self {
		value.0
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for OrderedF64 {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(self.0)
	}
}

impl<'de> Deserialize<'de> for OrderedF64 {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f64::deserialize(deserializer)?;
		OrderedF64::try_from(value).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::hash_map::DefaultHasher;

	use super::*;

	fn hash_of(value: OrderedF64) -> u64 {
		let mut hasher = DefaultHasher::new();
		value.hash(&mut hasher);
		hasher.finish()
	}

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF64::try_from(f64::NAN).is_err());
	}

	#[test]
	fn test_signed_zero_hashes_equal() {
		let positive = OrderedF64::try_from(0.0).unwrap();
		let negative = OrderedF64::try_from(-0.0).unwrap();
		assert_eq!(positive, negative);
		assert_eq!(hash_of(positive), hash_of(negative));
	}
}
