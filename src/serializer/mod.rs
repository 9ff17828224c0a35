//! CSV writer with round-trip-safe quoting.
//!
//! Converts JSON records back into CSV text. The quoting rules mirror what
//! [`crate::parser`] accepts, so serialize-then-parse recovers every field
//! exactly: quotes are doubled, and a field containing a comma, quote or
//! newline is wrapped in quotes.

use serde_json::Value;

/// Serialize records into CSV text against a fixed column list.
///
/// The first line is the header (columns joined by `,`); every record
/// contributes exactly one line with the caller-supplied columns in the
/// caller-supplied order, regardless of which fields the record carries.
/// CSV has no native support for sparse fields, so the column list is never
/// inferred from record shape.
///
/// Missing values serialize as empty cells. Array values are joined with
/// `;`, and this is the sole place list-valued fields are flattened.
///
/// Rows are joined with `\n` and no trailing newline is emitted.
pub fn to_csv(records: &[Value], columns: &[&str]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(columns.join(","));

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|col| encode_field(record.get(*col)))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Encode a single field value.
pub fn encode_field(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(";"),
        Some(other) => value_to_string(other),
    };

    let escaped = text.replace('"', "\"\"");
    if escaped.contains(',') || escaped.contains('"') || escaped.contains('\n') {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
