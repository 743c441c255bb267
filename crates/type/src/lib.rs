// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ReifyDB

//! Values, records and schemas shared by textraction transforms and their hosts.

mod record;
mod schema;
pub mod value;

pub use record::Record;
pub use schema::{ColumnDef, Schema};
pub use value::{OrderedF64, Type, Value};
