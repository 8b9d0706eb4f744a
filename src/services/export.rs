//! Flat-record CSV rendering for report downloads. Presentation
//! convenience layered over report outputs, not a core contract.

use serde_json::{Map, Value};

/// Render a list of flat records as CSV. The header row is the union
/// of the records' keys in first-seen order; keys absent from a record
/// render as empty fields.
pub fn to_csv(records: &[Map<String, Value>]) -> String {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns.iter().map(|column| escape_field(column)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| escape_field(&field_text(record.get(column))))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::to_csv;

    fn record(entries: &[(&str, Value)]) -> Map<String, Value> {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        map
    }

    #[test]
    fn renders_header_and_rows() {
        let records = vec![
            record(&[("tenantName", json!("Alice")), ("amount", json!(400000.0))]),
            record(&[("tenantName", json!("Betty")), ("amount", json!(50000.0))]),
        ];
        let csv = to_csv(&records);
        assert_eq!(
            csv,
            "tenantName,amount\nAlice,400000.0\nBetty,50000.0\n"
        );
    }

    #[test]
    fn later_records_extend_the_header() {
        let records = vec![
            record(&[("month", json!("Jan 2026"))]),
            record(&[("month", json!("Feb 2026")), ("amount", json!(5))]),
        ];
        let csv = to_csv(&records);
        assert_eq!(csv, "month,amount\nJan 2026,\nFeb 2026,5\n");
    }

    #[test]
    fn quotes_fields_with_separators() {
        let records = vec![record(&[
            ("propertyName", json!("A001 - Kampala, Central")),
            ("note", json!("said \"ok\"")),
        ])];
        let csv = to_csv(&records);
        assert_eq!(
            csv,
            "propertyName,note\n\"A001 - Kampala, Central\",\"said \"\"ok\"\"\"\n"
        );
    }

    #[test]
    fn empty_input_renders_empty_header() {
        assert_eq!(to_csv(&[]), "\n");
    }
}
