//! In-memory CSV table: read, modify, write.
//!
//! Cells round-trip verbatim; only header names are trimmed (they are
//! matched against alias tables downstream). Short records are padded to the
//! header width and blank lines skipped, so ragged exports still load.

use std::path::Path;

use crate::encoding;
use crate::error::{IngestError, Result};

/// A CSV file held fully in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the column with the given header, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Values of one column, top to bottom.
    #[must_use]
    pub fn column_values(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map_or("", String::as_str))
            .collect()
    }

    /// Inserts a new column at `index`, shifting later columns right.
    /// Missing values pad out as empty cells.
    pub fn insert_column(&mut self, index: usize, header: impl Into<String>, values: Vec<String>) {
        let index = index.min(self.headers.len());
        self.headers.insert(index, header.into());
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.insert(index, values.next().unwrap_or_default());
        }
    }
}

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file into memory, detecting the encoding first.
///
/// The first non-blank record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let text = encoding::read_to_string(path)?;
    parse_csv(&text, path)
}

fn parse_csv(text: &str, path: &Path) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some(header_row) = raw_rows.first() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|h| clean_header(h)).collect();

    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

/// Writes a table back out as CSV.
pub fn write_csv_table(table: &CsvTable, path: &Path) -> Result<()> {
    let csv_write = |e: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_write)?;
    writer.write_record(&table.headers).map_err(csv_write)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_write)?;
    }
    writer.flush().map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::{CsvTable, parse_csv, read_csv_table, write_csv_table};
    use std::path::Path;

    fn parse(text: &str) -> CsvTable {
        parse_csv(text, Path::new("test.csv")).unwrap()
    }

    #[test]
    fn first_row_is_the_header() {
        let table = parse("Name,AddrLine1\nAlice,123 Main St\n");
        assert_eq!(table.headers, vec!["Name", "AddrLine1"]);
        assert_eq!(table.rows, vec![vec!["Alice", "123 Main St"]]);
        assert_eq!(table.column_index("AddrLine1"), Some(1));
        assert_eq!(table.column_values(1), vec!["123 Main St"]);
    }

    #[test]
    fn short_rows_are_padded_and_blank_lines_skipped() {
        let table = parse("A,B,C\n1,2\n\n4,5,6\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn cells_round_trip_verbatim() {
        let table = parse("A\n  padded  \n");
        assert_eq!(table.rows[0][0], "  padded  ");
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(parse_csv("", Path::new("empty.csv")).is_err());
    }

    #[test]
    fn insert_column_shifts_and_pads() {
        let mut table = parse("A,B\n1,2\n3,4\n");
        table.insert_column(1, "N", vec!["x".to_string()]);
        assert_eq!(table.headers, vec!["A", "N", "B"]);
        assert_eq!(table.rows[0], vec!["1", "x", "2"]);
        assert_eq!(table.rows[1], vec!["3", "", "4"]);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = parse("Name,AddrLine1\nAlice,\"123 Main St, Apt 4\"\n");
        write_csv_table(&table, &path).unwrap();
        let reloaded = read_csv_table(&path).unwrap();
        assert_eq!(reloaded, table);
    }
}
