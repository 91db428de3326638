use serde_json::Value;

/// Print just the key answer value from the output: the base-scenario
/// annualized ROI, falling back to IRR, then to the first scalar field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(base) = result_obj
        .as_object()
        .and_then(|m| m.get("scenarios"))
        .and_then(|s| s.as_object())
        .and_then(|s| s.get("base"))
        .and_then(|b| b.as_object())
    {
        for key in ["roi", "irr"] {
            if let Some(val) = base.get(key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
