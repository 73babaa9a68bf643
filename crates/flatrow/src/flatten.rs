//! The flattener: one nested value in, one ordered sequence of rows out.
//!
//! Traversal is pre-order depth-first in the input's own iteration order, so
//! every leaf (scalar or null) appears exactly once and in a stable position.
//! Containers are never emitted; arrays are walked with their indices as key
//! segments, exactly like object keys (see `ArrayPaths` for the bracket
//! alternative).

use crate::error::{Error, Result};
use crate::options::{ArrayPaths, Options};
use crate::value::Value;

/// One flattened table row: a dot-joined path from the root and the leaf
/// found there. `value` is always primitive (string, number, bool, or null).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    pub key: String,
    pub value: Value,
}

/// Flatten a nested value into ordered `(path, leaf)` rows.
///
/// A `Null` root produces the empty sequence (the permissive "no data" case).
/// A primitive non-null root produces a single row with an empty key, keeping
/// the function total. The input is borrowed and never mutated; each call
/// returns a fresh `Vec`.
///
/// The only failure mode is `Error::RecursionLimit`, raised when container
/// nesting exceeds `options.max_depth`.
pub fn flatten(root: &Value, options: &Options) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    match root {
        Value::Null => {}
        Value::Object(_) | Value::Array(_) => walk(root, "", 1, options, &mut rows)?,
        leaf => rows.push(Row {
            key: String::new(),
            value: leaf.clone(),
        }),
    }
    Ok(rows)
}

fn walk(
    container: &Value,
    prefix: &str,
    depth: usize,
    options: &Options,
    rows: &mut Vec<Row>,
) -> Result<()> {
    if depth > options.max_depth {
        return Err(Error::RecursionLimit {
            limit: options.max_depth,
        });
    }
    match container {
        Value::Object(entries) => {
            for (key, value) in entries {
                let new_key = join_key(prefix, key);
                visit(value, new_key, depth, options, rows)?;
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                let new_key = join_index(prefix, index, options.array_paths);
                visit(value, new_key, depth, options, rows)?;
            }
        }
        _ => unreachable!("walk is only called on containers"),
    }
    Ok(())
}

fn visit(
    value: &Value,
    new_key: String,
    depth: usize,
    options: &Options,
    rows: &mut Vec<Row>,
) -> Result<()> {
    if value.is_primitive() {
        rows.push(Row {
            key: new_key,
            value: value.clone(),
        });
        Ok(())
    } else {
        walk(value, &new_key, depth + 1, options, rows)
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn join_index(prefix: &str, index: usize, style: ArrayPaths) -> String {
    match style {
        ArrayPaths::Dot => {
            if prefix.is_empty() {
                index.to_string()
            } else {
                format!("{}.{}", prefix, index)
            }
        }
        ArrayPaths::Bracket => format!("{}[{}]", prefix, index),
    }
}
