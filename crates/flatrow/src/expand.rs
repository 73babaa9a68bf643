//! Path expansion: rebuild a nested object tree from flattened rows.
//!
//! Dotted keys like `a.b.c` expand into nested objects
//! `{ "a": { "b": { "c": ... } } }`, with deep merging when multiple rows
//! share a prefix.
//!
//! Rules:
//! - Every `.` is a segment boundary; array indices come back as object keys
//!   (`"0"`, `"1"`), mirroring the conflation the flattener performs
//! - In strict mode, a conflict (object vs leaf at the same path) is an error
//! - In non-strict mode, later rows overwrite earlier ones (LWW)

use crate::error::{Error, Result};
use crate::flatten::Row;
use crate::value::Value;

/// Rebuild the nested form of a flattened row sequence.
pub fn expand<I>(rows: I, strict: bool) -> Result<Value>
where
    I: IntoIterator<Item = Row>,
{
    let mut root: Vec<(String, Value)> = Vec::new();
    for row in rows {
        let segments: Vec<&str> = row.key.split('.').collect();
        let nested = nest(&segments, row.value);
        if let Value::Object(entries) = nested {
            for (key, value) in entries {
                deep_merge(&mut root, key, value, strict)?;
            }
        }
    }
    Ok(Value::Object(root))
}

/// Build a single-path nested object from key segments.
fn nest(segments: &[&str], value: Value) -> Value {
    match segments {
        [] => value,
        [last] => Value::Object(vec![((*last).to_string(), value)]),
        [first, rest @ ..] => Value::Object(vec![((*first).to_string(), nest(rest, value))]),
    }
}

/// Merge `value` under `key` into `target`, recursing when both sides are
/// objects. Strict mode rejects object-vs-leaf collisions.
fn deep_merge(
    target: &mut Vec<(String, Value)>,
    key: String,
    value: Value,
    strict: bool,
) -> Result<()> {
    if let Some(idx) = target.iter().position(|(k, _)| k == &key) {
        let existing = &mut target[idx].1;
        match (existing, value) {
            (Value::Object(existing_entries), Value::Object(new_entries)) => {
                for (k, v) in new_entries {
                    deep_merge(existing_entries, k, v, strict)?;
                }
            }
            (existing, value) => {
                if strict {
                    return Err(Error::PathConflict { key });
                }
                *existing = value;
            }
        }
    } else {
        target.push((key, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    fn row(key: &str, value: Value) -> Row {
        Row {
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn single_path_expands() {
        let result = expand([row("a.b.c", Value::Number(Number::I64(1)))], false).unwrap();
        let expected = Value::Object(vec![(
            "a".to_string(),
            Value::Object(vec![(
                "b".to_string(),
                Value::Object(vec![("c".to_string(), Value::Number(Number::I64(1)))]),
            )]),
        )]);
        assert_eq!(result, expected);
    }

    #[test]
    fn shared_prefixes_merge() {
        let result = expand(
            [
                row("a.b", Value::Number(Number::I64(1))),
                row("a.c", Value::Number(Number::I64(2))),
            ],
            false,
        )
        .unwrap();
        let expected = Value::Object(vec![(
            "a".to_string(),
            Value::Object(vec![
                ("b".to_string(), Value::Number(Number::I64(1))),
                ("c".to_string(), Value::Number(Number::I64(2))),
            ]),
        )]);
        assert_eq!(result, expected);
    }

    #[test]
    fn strict_conflict_is_an_error() {
        let rows = [
            row("a", Value::Number(Number::I64(1))),
            row("a.b", Value::Number(Number::I64(2))),
        ];
        let err = expand(rows, true).unwrap_err();
        assert!(matches!(err, Error::PathConflict { .. }));
    }

    #[test]
    fn lww_overwrites_without_strict() {
        let rows = [
            row("a", Value::Number(Number::I64(1))),
            row("a", Value::Number(Number::I64(2))),
        ];
        let result = expand(rows, false).unwrap();
        assert_eq!(
            result,
            Value::Object(vec![("a".to_string(), Value::Number(Number::I64(2)))])
        );
    }
}
