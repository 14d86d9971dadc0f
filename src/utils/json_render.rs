use serde_json::Value;

/// Pretty-prints a nested backend value for the monospace detail blocks.
pub fn pretty_json(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_render_plain() {
        assert_eq!(pretty_json(&Value::Null), "-");
        assert_eq!(pretty_json(&json!("abc")), "abc");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn test_objects_render_pretty() {
        let rendered = pretty_json(&json!({"a": 1}));
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("\"a\": 1"));
    }
}
