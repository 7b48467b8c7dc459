//! Column-prefixed rows for the bulk insert layer
//!
//! The persistence layer takes rows keyed `table.column`, e.g.
//! `item.item_type`, and inserts them in batches.

use protoforge_core::{ProtoError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// One row ready for bulk insert
pub type PersistRow = Map<String, Value>;

/// Flatten a serialized entity into `table.field` keys
///
/// Only the top level is prefixed. Array fields stay arrays.
pub fn prefixed_row<T: Serialize>(entity: &T, table: &str) -> Result<PersistRow> {
    let value = serde_json::to_value(entity)
        .map_err(|e| ProtoError::InvalidFormat(format!("cannot serialize {} row: {}", table, e)))?;

    match value {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(field, value)| (format!("{}.{}", table, field), value))
            .collect()),
        other => Err(ProtoError::InvalidFormat(format!(
            "{} row is not a record: {}",
            table, other
        ))),
    }
}

/// Split rows into insert batches of at most `size` rows
///
/// A `size` of 0 is treated as 1.
pub fn chunked<T>(rows: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut batches = Vec::with_capacity(rows.len().div_ceil(size));
    let mut current = Vec::with_capacity(size.min(rows.len()));

    for row in rows {
        current.push(row);
        if current.len() == size {
            batches.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        batches.push(current);
    }

    batches
}
