//! CSV export of page records.

use std::path::Path;

use tracing::debug;

use ubill_core::PageRecord;

/// Write records as CSV to `path` and, with identical content, to the
/// configured default path. One row per record, in page order; absent
/// fields become empty cells.
pub fn write_records(
    records: &[PageRecord],
    path: &Path,
    default_path: &Path,
) -> anyhow::Result<()> {
    let data = to_csv(records)?;

    std::fs::write(path, &data)?;
    if default_path != path {
        std::fs::write(default_path, &data)?;
    }

    debug!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

fn to_csv(records: &[PageRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["Page", "Month", "Year", "Name", "Total Energy"])?;

    for record in records {
        wtr.write_record([
            record.page_number.to_string(),
            record.month.clone().unwrap_or_default(),
            record.year.map(|y| y.to_string()).unwrap_or_default(),
            record.name.clone(),
            record
                .total_energy
                .map(|e| e.to_string())
                .unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_records() -> Vec<PageRecord> {
        vec![
            PageRecord {
                page_number: 1,
                month: Some("March".to_string()),
                year: Some(2024),
                name: "Acme Gas Co".to_string(),
                total_energy: Some(dec!(1234)),
            },
            PageRecord {
                page_number: 2,
                month: None,
                year: None,
                name: "Unknown Name".to_string(),
                total_energy: None,
            },
        ]
    }

    #[test]
    fn test_to_csv_rows_and_empty_cells() {
        let csv = to_csv(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Page,Month,Year,Name,Total Energy");
        assert_eq!(lines[1], "1,March,2024,Acme Gas Co,1234");
        assert_eq!(lines[2], "2,,,Unknown Name,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_both_copies_identical() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("out.csv");
        let fixed = dir.path().join("extracted_data.csv");

        write_records(&sample_records(), &primary, &fixed).unwrap();

        let a = std::fs::read_to_string(&primary).unwrap();
        let b = std::fs::read_to_string(&fixed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_path_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted_data.csv");

        write_records(&sample_records(), &path, &path).unwrap();
        assert!(path.exists());
    }
}
