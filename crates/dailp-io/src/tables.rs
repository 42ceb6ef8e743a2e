//! CSV loaders for the ingest spreadsheets.

use std::path::Path;

use dailp_core::header::{merge_header_rows, simple_header};
use dailp_core::normalize::normalize_bytes;
use dailp_core::{IngestError, RawRecord, Table};

/// Header columns of the stems table
pub const STEMS_HEADERS: [&str; 2] = ["stem", "gloss"];

/// Leading rows of the stems table that hold no data
const STEMS_SKIPPED_ROWS: usize = 2;

fn csv_error(path: &Path, err: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Every row of a CSV file as strings, headers included.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    if !path.exists() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    reader
        .byte_records()
        .map(|record| {
            record
                .map(|r| r.iter().map(|field| cell_text(path, field)).collect())
                .map_err(|e| csv_error(path, e))
        })
        .collect()
}

/// NFD text of one cell. Bytes that are not UTF-8 are kept with lossy replacement.
fn cell_text(path: &Path, field: &[u8]) -> String {
    let normalized = normalize_bytes(field);
    if std::str::from_utf8(&normalized).is_err() {
        tracing::warn!(path = %path.display(), "cell is not valid UTF-8; passing it through");
    }
    String::from_utf8_lossy(&normalized).into_owned()
}

fn table_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The verb table: two header rows merged into one key per column.
pub fn load_verb_table(path: &Path) -> Result<Table, IngestError> {
    let mut rows = read_rows(path)?.into_iter();
    let group_row = rows.next().unwrap_or_default();
    let column_row = rows.next().unwrap_or_default();
    let headers = merge_header_rows(&group_row, &column_row);

    let records = rows.map(|row| RawRecord::from_row(&headers, &row)).collect();
    let table = Table::new(table_name(path), headers, records);
    tracing::info!(table = %table.name, rows = table.rows.len(), "loaded verb table");
    Ok(table)
}

/// A table with a single header row.
pub fn load_table(path: &Path) -> Result<Table, IngestError> {
    let mut rows = read_rows(path)?.into_iter();
    let headers: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(|h| simple_header(h))
        .collect();

    let records = rows.map(|row| RawRecord::from_row(&headers, &row)).collect();
    let table = Table::new(table_name(path), headers, records);
    tracing::info!(table = %table.name, rows = table.rows.len(), "loaded table");
    Ok(table)
}

/// The original Uchihara database verb table, reduced to stem and gloss.
pub fn load_stems_table(path: &Path) -> Result<Table, IngestError> {
    let records: Vec<RawRecord> = read_rows(path)?
        .into_iter()
        .skip(STEMS_SKIPPED_ROWS)
        .map(|row| RawRecord::from_row(&STEMS_HEADERS, &row))
        .collect();

    let headers = STEMS_HEADERS.iter().map(|h| h.to_string()).collect();
    let table = Table::new(table_name(path), headers, records);
    tracing::info!(table = %table.name, rows = table.rows.len(), "loaded stems table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_verb_table_merges_header_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "verbs.csv",
            "ALL ENTRIES KEY,PRS,PRS\n,PRS (h-grade): SG SF,ASP\n101,a:`dade:!ga,h\n,,\n",
        );

        let table = load_verb_table(&path).unwrap();
        assert_eq!(table.name, "verbs");
        assert_eq!(
            table.headers,
            vec!["all_entries_key", "prs_prs_lparen_h_grade_rparen_colon_sg_sf", "prs_asp"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].value("prs_prs_lparen_h_grade_rparen_colon_sg_sf"), "a:`dade:!ga");
        assert_eq!(table.rows[1].value("all_entries_key"), "");
    }

    #[test]
    fn test_single_header_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "source3outmainverbs.csv",
            "ALL ENTRIES KEY,Source 3 3SG PRS Syllabary\n101,ᎠᏓᏕᎦ\n",
        );

        let table = load_table(&path).unwrap();
        assert!(table.has_column("source_3_3sg_prs_syllabary"));
        assert_eq!(table.rows[0].value("all_entries_key"), "101");
    }

    #[test]
    fn test_stems_table_skips_leading_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "stems.csv",
            "STEM,GLOSS,OTHER\n,,\ndade:!ga,eat,x\nsgwal,sandwitch\n",
        );

        let table = load_stems_table(&path).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].value("stem"), "dade:!ga");
        assert_eq!(table.rows[1].value("gloss"), "sandwitch");
    }

    #[test]
    fn test_cells_are_decomposed_and_bad_bytes_do_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source3outplverbs.csv");
        let mut contents = "all_entries_key,gloss\n101,k\u{e1}\n102,".as_bytes().to_vec();
        contents.extend([0x66, 0xff, 0x6f]);
        contents.extend(b"\n103,eat\n");
        fs::write(&path, contents).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].value("gloss"), "ka\u{301}");
        assert_eq!(table.rows[1].value("gloss"), "f\u{fffd}o");
        assert_eq!(table.rows[2].value("gloss"), "eat");
    }

    #[test]
    fn test_missing_file() {
        let err = load_table(Path::new("/nonexistent/inputs/table.csv")).unwrap_err();
        assert!(matches!(err, IngestError::MissingInput(_)));
    }
}
