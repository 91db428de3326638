use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format the projection output as tables: a headline summary, the
/// three-scenario comparison, then alerts. The monthly ledger is
/// deliberately omitted here (use --output csv for the full series).
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    let Some(Value::Object(result)) = envelope.get("result") else {
        print_flat_object(value);
        return;
    };

    // Headline scalars: everything except the nested series/sets.
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result {
        match key.as_str() {
            "monthly_data" | "scenarios" | "alerts" => continue,
            _ => builder.push_record([key.as_str(), &format_value(val)]),
        }
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Object(scenarios)) = result.get("scenarios") {
        print_scenarios(scenarios);
    }

    if let Some(Value::Array(alerts)) = result.get("alerts") {
        if !alerts.is_empty() {
            println!("\nAlerts:");
            for alert in alerts {
                if let Value::String(s) = alert {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scenarios(scenarios: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Scenario", "Property Value", "Total Equity", "ROI %/yr", "IRR %"]);

    // Fixed presentation order, matching evaluation order.
    for name in ["pessimistic", "base", "optimistic"] {
        if let Some(Value::Object(s)) = scenarios.get(name) {
            builder.push_record([
                name,
                &field(s, "property_value"),
                &field(s, "total_equity"),
                &field(s, "roi"),
                &field(s, "irr"),
            ]);
        }
    }

    println!("\n{}", Table::from(builder));
}

fn field(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key).map(format_value).unwrap_or_default()
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
