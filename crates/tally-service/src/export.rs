//! CSV snapshot of attendance records. The download/transport layer
//! around it is out of scope; this only produces the tabular text.

use tally_core::models::AttendanceRecord;

const HEADER: &str = "ID,Name,Group,Timestamp";

/// Render records as CSV with the dashboard's column order.
pub fn records_csv(records: &[AttendanceRecord]) -> String {
    let mut out = String::with_capacity(64 * (records.len() + 1));
    out.push_str(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&record.identifier.to_string());
        out.push(',');
        out.push_str(&escape(&record.name));
        out.push(',');
        out.push_str(&escape(&record.group));
        out.push(',');
        out.push_str(&escape(&record.timestamp));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> AttendanceRecord {
        AttendanceRecord {
            seq: 1,
            identifier: 1,
            name: name.to_string(),
            group: "Class A".to_string(),
            timestamp: "2026-08-29 09:00:00".to_string(),
        }
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        let csv = records_csv(&[record("Ryan")]);
        assert_eq!(csv, "ID,Name,Group,Timestamp\n1,Ryan,Class A,2026-08-29 09:00:00\n");
    }

    #[test]
    fn commas_and_quotes_are_escaped() {
        let csv = records_csv(&[record("Tan, \"Ryan\"")]);
        assert!(csv.contains("\"Tan, \"\"Ryan\"\"\""));
    }

    #[test]
    fn empty_input_yields_header_only() {
        assert_eq!(records_csv(&[]), "ID,Name,Group,Timestamp\n");
    }
}
