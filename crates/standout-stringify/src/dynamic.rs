//! Rendering of dynamically shaped values.
//!
//! A [`serde_json::Value`] has no static type to classify, so its category is
//! decided per node at runtime:
//!
//! | JSON | Category | Output |
//! |------|----------|--------|
//! | bool, number, string | Streamable | the value's text, strings unquoted |
//! | array | Sequence | `[a, b]` |
//! | object | Sequence of Pairings | `[(key, value), ...]` |
//! | null | Unrenderable | error |
//!
//! The whole tree is checked before anything is written, so an unrenderable
//! node never leaves partial output behind.
//!
//! A JSON tree has already lost the shape of the Rust value it came from:
//! tuples became arrays and `None` became `null`. To render a [`Serialize`]
//! type by its own shape, use [`serialize_to_text`](crate::serialize_to_text)
//! instead of converting it to a `Value` first.
//!
//! [`Serialize`]: serde::Serialize
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use standout_stringify::json_to_text;
//!
//! let data = json!({"name": "disk", "usage": [71, 80]});
//! assert_eq!(json_to_text(&data).unwrap(), "[(name, disk), (usage, [71, 80])]");
//!
//! let err = json_to_text(&json!({"name": null})).unwrap_err();
//! assert!(err.to_string().contains("$.name"));
//! ```

use std::fmt;

use log::trace;
use serde_json::Value;

use crate::category::Category;
use crate::error::{Result, StringifyError};
use crate::render::SEPARATOR;

/// Returns the category of a single JSON node, without looking at children.
pub fn classify_json(value: &Value) -> Category {
    match value {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Category::Streamable,
        Value::Array(_) | Value::Object(_) => Category::Sequence,
        Value::Null => Category::Unrenderable,
    }
}

/// Verifies that every node of `value` is renderable.
///
/// The error names the first offending node with a path such as `$[2].name`.
pub fn check_json(value: &Value) -> Result<()> {
    let mut path = String::from("$");
    check_at(value, &mut path)
}

fn check_at(value: &Value, path: &mut String) -> Result<()> {
    match value {
        Value::Null => {
            trace!("unrenderable node at {}", path);
            Err(StringifyError::Unrenderable {
                path: path.clone(),
                kind: "null",
            })
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('[');
                path.push_str(&index.to_string());
                path.push(']');
                check_at(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, item) in map {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                check_at(item, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}

/// Renders `value` into `sink` after checking the whole tree.
pub fn render_json<W: fmt::Write + ?Sized>(sink: &mut W, value: &Value) -> Result<()> {
    check_json(value)?;
    write_json(sink, value)?;
    Ok(())
}

/// Renders `value` into a fresh `String`.
pub fn json_to_text(value: &Value) -> Result<String> {
    let mut out = String::new();
    render_json(&mut out, value)?;
    Ok(out)
}

fn write_json<W: fmt::Write + ?Sized>(sink: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Bool(b) => write!(sink, "{}", b),
        Value::Number(n) => write!(sink, "{}", n),
        Value::String(s) => sink.write_str(s),
        Value::Array(items) => {
            sink.write_char('[')?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    sink.write_str(SEPARATOR)?;
                }
                write_json(sink, item)?;
            }
            sink.write_char(']')
        }
        Value::Object(map) => {
            sink.write_char('[')?;
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    sink.write_str(SEPARATOR)?;
                }
                sink.write_char('(')?;
                sink.write_str(key)?;
                sink.write_str(SEPARATOR)?;
                write_json(sink, item)?;
                sink.write_char(')')?;
            }
            sink.write_char(']')
        }
        // Rejected by check_json before writing starts.
        Value::Null => Err(fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_nodes() {
        assert_eq!(classify_json(&json!(1)), Category::Streamable);
        assert_eq!(classify_json(&json!("s")), Category::Streamable);
        assert_eq!(classify_json(&json!(false)), Category::Streamable);
        assert_eq!(classify_json(&json!([])), Category::Sequence);
        assert_eq!(classify_json(&json!({})), Category::Sequence);
        assert_eq!(classify_json(&Value::Null), Category::Unrenderable);
    }

    #[test]
    fn test_scalars_render_verbatim() {
        assert_eq!(json_to_text(&json!(42)).unwrap(), "42");
        assert_eq!(json_to_text(&json!(-1.5)).unwrap(), "-1.5");
        assert_eq!(json_to_text(&json!(true)).unwrap(), "true");
        assert_eq!(json_to_text(&json!("no quotes")).unwrap(), "no quotes");
    }

    #[test]
    fn test_containers_follow_static_rules() {
        assert_eq!(json_to_text(&json!([])).unwrap(), "[]");
        assert_eq!(json_to_text(&json!({})).unwrap(), "[]");
        assert_eq!(json_to_text(&json!([1])).unwrap(), "[1]");
        assert_eq!(
            json_to_text(&json!([[1, 2], {"k": "v"}])).unwrap(),
            "[[1, 2], [(k, v)]]"
        );
    }

    #[test]
    fn test_null_is_rejected_with_path() {
        let err = json_to_text(&json!([1, {"a": [true, null]}])).unwrap_err();
        match err {
            StringifyError::Unrenderable { path, kind } => {
                assert_eq!(path, "$[1].a[1]");
                assert_eq!(kind, "null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_null_path() {
        let err = check_json(&Value::Null).unwrap_err();
        assert!(err.to_string().contains("value at $ has no renderable shape"));
    }

    #[test]
    fn test_rejection_writes_nothing() {
        let mut out = String::new();
        let result = render_json(&mut out, &json!(["fine", "fine", null]));
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
