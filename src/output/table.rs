//! Table output formatter

use comfy_table::{presets::NOTHING, Table};
use serde_json::Value;

use crate::api::Payload;

/// Most columns a collection table shows
const MAX_COLUMNS: usize = 8;

/// Render a list of records, one row per record
///
/// Columns are the scalar fields in the order they first appear.
pub fn records_table(records: &[Value]) -> Table {
    let columns = record_columns(records);

    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(columns.clone());

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| record.get(column).map(format_cell).unwrap_or_default())
            .collect();
        table.add_row(row);
    }

    table
}

/// Render one resource as field/value rows
pub fn fields_table(payload: &Payload) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec!["Field", "Value"]);

    for (key, value) in payload {
        table.add_row(vec![key.clone(), format_cell(value)]);
    }

    table
}

fn record_columns(records: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        let Value::Object(fields) = record else {
            continue;
        };
        for (key, value) in fields {
            if columns.len() == MAX_COLUMNS {
                return columns;
            }
            if is_scalar(value) && !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Cell text for a JSON value
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&json!(null)), "");
        assert_eq!(format_cell(&json!("John")), "John");
        assert_eq!(format_cell(&json!(1990)), "1990");
        assert_eq!(format_cell(&json!(true)), "true");
        assert_eq!(format_cell(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_cell(&json!({"a": 1})), "{1 fields}");
    }

    #[test]
    fn test_record_columns_skip_nested_values() {
        let records = vec![
            json!({"id": 1, "first_name": "John", "programs": []}),
            json!({"id": 2, "first_name": "Jane", "email": "jane@example.com"}),
        ];
        assert_eq!(record_columns(&records), vec!["id", "first_name", "email"]);
    }

    #[test]
    fn test_record_columns_capped() {
        let mut record = serde_json::Map::new();
        for i in 0..20 {
            record.insert(format!("field_{}", i), json!(i));
        }
        let columns = record_columns(&[Value::Object(record)]);
        assert_eq!(columns.len(), MAX_COLUMNS);
        assert_eq!(columns[0], "field_0");
    }

    #[test]
    fn test_records_table_contains_values() {
        let records = vec![json!({"id": 1, "first_name": "John", "last_name": "Trevor"})];
        let rendered = records_table(&records).to_string();
        assert!(rendered.contains("first_name"));
        assert!(rendered.contains("Trevor"));
    }

    #[test]
    fn test_records_table_empty() {
        // Should not panic with empty input
        let _ = records_table(&[]).to_string();
    }

    #[test]
    fn test_fields_table() {
        let payload = match json!({"id": 7, "title": "Knee rehab"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let rendered = fields_table(&payload).to_string();
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("Knee rehab"));
    }
}
