//! Value rendering for diagnostic messages.
//!
//! Two renderings are used in error text, and their formatting rules are part
//! of the crate's stable output contract:
//!
//! - [`inspect`] — used when quoting a malformed severity back at the user.
//!   Strings are double-quoted, arrays and objects are space-padded inside
//!   the brackets with a single space after each comma (`[ "error" ]`,
//!   `{ "a": 1 }`), and numbers, booleans, and `null` render in JSON form.
//! - [`coerce`] — used when quoting an offending options value. Strings
//!   render bare, arrays join their elements with commas (`null` elements
//!   join as empty), objects render as `[object Object]`, and `null` renders
//!   as `null`.

use serde_json::Value;

/// Render a value for a severity diagnostic.
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        Value::Array(items) => {
            if items.is_empty() {
                "[]".to_string()
            } else {
                let rendered: Vec<String> = items.iter().map(inspect).collect();
                format!("[ {} ]", rendered.join(", "))
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                "{}".to_string()
            } else {
                let rendered: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("\"{}\": {}", k, inspect(v)))
                    .collect();
                format!("{{ {} }}", rendered.join(", "))
            }
        }
    }
}

/// Render a value for an options diagnostic.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join(items),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Comma-join a list of values, coercing each element.
///
/// `null` elements contribute an empty string, matching array-join
/// semantics users expect from lint tooling.
pub fn join(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => coerce(other),
        })
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inspect_quotes_strings() {
        assert_eq!(inspect(&json!("booya")), "\"booya\"");
        assert_eq!(inspect(&json!("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn inspect_pads_arrays() {
        assert_eq!(inspect(&json!(["error"])), "[ \"error\" ]");
        assert_eq!(inspect(&json!([1, "two"])), "[ 1, \"two\" ]");
        assert_eq!(inspect(&json!([["error"]])), "[ [ \"error\" ] ]");
        assert_eq!(inspect(&json!([])), "[]");
    }

    #[test]
    fn inspect_pads_objects_with_quoted_keys() {
        assert_eq!(inspect(&json!({"a": 1})), "{ \"a\": 1 }");
        assert_eq!(inspect(&json!({})), "{}");
    }

    #[test]
    fn inspect_renders_scalars_in_json_form() {
        assert_eq!(inspect(&json!(null)), "null");
        assert_eq!(inspect(&json!(true)), "true");
        assert_eq!(inspect(&json!(3)), "3");
        assert_eq!(inspect(&json!(1.5)), "1.5");
    }

    #[test]
    fn coerce_renders_strings_bare() {
        assert_eq!(coerce(&json!("third")), "third");
    }

    #[test]
    fn coerce_joins_arrays_with_commas() {
        assert_eq!(coerce(&json!(["a", "b"])), "a,b");
        assert_eq!(coerce(&json!([1, null, "x"])), "1,,x");
        assert_eq!(coerce(&json!([])), "");
    }

    #[test]
    fn coerce_renders_objects_opaquely() {
        assert_eq!(coerce(&json!({"k": "v"})), "[object Object]");
    }

    #[test]
    fn join_handles_extra_option_lists() {
        let extras = vec![json!("extra"), json!(2)];
        assert_eq!(join(&extras), "extra,2");
    }
}
