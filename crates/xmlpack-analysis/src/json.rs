//! JSON shape probe.
//!
//! Parsing has no fixed nesting limit: `serde_stacker` grows the stack on
//! demand, and both the shape walk and the teardown of the parsed value use
//! an explicit work-stack.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use xmlpack_types::JsonStructure;

pub fn json_structure(content: &str) -> JsonStructure {
    let value = match parse_unbounded(content) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "content is not valid JSON");
            return JsonStructure::invalid(err.to_string());
        }
    };

    let shape = JsonShape::measure(&value);
    let structure = JsonStructure {
        valid: true,
        value_type: Some(type_name(&value).to_string()),
        keys: value.as_object().map(|map| map.keys().cloned().collect()),
        length: match &value {
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            _ => None,
        },
        depth: Some(shape.depth),
        has_arrays: Some(shape.has_arrays),
        has_objects: Some(shape.has_objects),
        error: None,
    };
    dismantle(value);
    structure
}

fn parse_unbounded(content: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Drop `value` without recursing; the default drop of a deeply nested
/// value recurses once per level.
fn dismantle(value: Value) {
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.into_iter().map(|(_, child)| child)),
            _ => {}
        }
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonShape {
    pub depth: usize,
    pub has_arrays: bool,
    pub has_objects: bool,
}

impl JsonShape {
    /// Walk the value with an explicit stack. Depth is the deepest level
    /// reached by a scalar or an empty container; the root sits at level 0.
    pub fn measure(root: &Value) -> Self {
        let mut shape = JsonShape::default();
        let mut stack: Vec<(&Value, usize)> = vec![(root, 0)];

        while let Some((value, level)) = stack.pop() {
            let children: Vec<&Value> = match value {
                Value::Array(items) => {
                    shape.has_arrays = true;
                    items.iter().collect()
                }
                Value::Object(map) => {
                    shape.has_objects = true;
                    map.values().collect()
                }
                _ => Vec::new(),
            };
            if children.is_empty() {
                shape.depth = shape.depth.max(level);
            } else {
                stack.extend(children.into_iter().map(|child| (child, level + 1)));
            }
        }
        shape
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn invalid_json_is_reported_not_raised() {
        let js = json_structure("{not valid");
        assert!(!js.valid);
        assert!(js.error.as_deref().is_some_and(|e| !e.is_empty()));
        assert!(js.value_type.is_none());
    }

    #[test]
    fn object_keys_keep_document_order() {
        let js = json_structure(r#"{"b": 1, "a": [1, 2], "c": {"d": null}}"#);
        assert!(js.valid);
        assert_eq!(js.value_type.as_deref(), Some("object"));
        assert_eq!(js.keys, Some(vec!["b".into(), "a".into(), "c".into()]));
        assert_eq!(js.length, Some(3));
        assert_eq!(js.depth, Some(2));
        assert_eq!(js.has_arrays, Some(true));
        assert_eq!(js.has_objects, Some(true));
    }

    #[test]
    fn scalars_have_no_keys_or_length() {
        let js = json_structure("42");
        assert_eq!(js.value_type.as_deref(), Some("number"));
        assert_eq!(js.keys, None);
        assert_eq!(js.length, None);
        assert_eq!(js.depth, Some(0));
        assert_eq!(js.has_arrays, Some(false));
        assert_eq!(js.has_objects, Some(false));
    }

    #[test]
    fn depth_counts_empty_containers_at_their_level() {
        assert_eq!(JsonShape::measure(&json!({})).depth, 0);
        assert_eq!(JsonShape::measure(&json!({"a": {}})).depth, 1);
        assert_eq!(JsonShape::measure(&json!([[[1]]])).depth, 3);
        assert_eq!(JsonShape::measure(&json!([1, [2, [3]]])).depth, 3);
    }

    #[test]
    fn arrays_of_objects_report_both() {
        let shape = JsonShape::measure(&json!([{"a": 1}]));
        assert!(shape.has_arrays);
        assert!(shape.has_objects);
    }

    #[test]
    fn nesting_past_two_hundred_levels_is_valid() {
        let content = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let js = json_structure(&content);
        assert!(js.valid, "{:?}", js.error);
        assert_eq!(js.depth, Some(199));
        assert_eq!(js.length, Some(1));
    }

    #[test]
    fn very_deep_objects_do_not_exhaust_the_stack() {
        let depth = 50_000;
        let content = format!("{}1{}", r#"{"k":"#.repeat(depth), "}".repeat(depth));
        let js = json_structure(&content);
        assert!(js.valid, "{:?}", js.error);
        assert_eq!(js.depth, Some(depth));
        assert_eq!(js.keys, Some(vec!["k".to_string()]));
    }

    #[test]
    fn trailing_content_is_still_rejected() {
        assert!(!json_structure("[1] [2]").valid);
        assert!(!json_structure(&format!("{}{}", "[".repeat(300), "]".repeat(299))).valid);
    }
}
