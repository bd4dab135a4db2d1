// src/export.rs
//
// Export collaborator: flattens the per-line results two levels deep and
// serializes one tabular sheet with the fixed column order
// {timestamp, level, eventResult, eventType, action, folder, file}.

use std::io::Write;
use std::path::Path;

use crate::error::ProcessingError;
use crate::record::LineResult;

/// Default output artifact name.
pub const OUTPUT_FILE: &str = "evidence.csv";

/// Writes the evidence sheet to `path`.
pub fn write_sheet_file(path: &Path, results: &[LineResult]) -> Result<(), ProcessingError> {
    let file = std::fs::File::create(path)?;
    write_sheet(file, results)
}

/// Writes the evidence sheet to any writer. Column order and headers come
/// from the `ChangeRecord` field layout.
pub fn write_sheet<W: Write>(output: W, results: &[LineResult]) -> Result<(), ProcessingError> {
    let mut writer = csv::Writer::from_writer(output);
    for record in results.iter().flatten() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ChangeRecord;
    use chrono::NaiveDate;

    fn record(folder: &str, file: &str) -> ChangeRecord {
        ChangeRecord {
            timestamp: NaiveDate::from_ymd_opt(2020, 6, 2)
                .unwrap()
                .and_hms_milli_opt(2, 0, 0, 500)
                .unwrap(),
            level: "INFO".to_string(),
            event_result: "UPLOAD".to_string(),
            event_type: "MOVE".to_string(),
            action: "Action.ADD".to_string(),
            folder: folder.to_string(),
            file: file.to_string(),
        }
    }

    #[test]
    fn header_has_fixed_column_order() {
        let results = vec![vec![record(r"C:\Users\x", "a.txt")]];
        let mut out = Vec::new();
        write_sheet(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "timestamp,level,eventResult,eventType,action,folder,file"
        );
    }

    #[test]
    fn flattens_two_levels_in_order() {
        let results = vec![
            vec![record(r"C:\a", "1.txt"), record(r"C:\a", "2.txt")],
            vec![],
            vec![record(r"C:\b", "3.txt")],
        ];
        let mut out = Vec::new();
        write_sheet(&mut out, &results).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("1.txt"));
        assert!(rows[1].contains("2.txt"));
        assert!(rows[2].contains("3.txt"));
    }
}
