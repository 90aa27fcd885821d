//! Roster CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::table::RosterTable;

/// Maximum file size for roster loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows sampled for type inference. Zero makes every column a string
/// column, so codes such as `02134` keep their leading zeros.
const INFER_SCHEMA_ROWS: usize = 0;

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Checks that the file exists and is within [`MAX_CSV_FILE_SIZE`].
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 input; a UTF-8 BOM is accepted.
fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Loads a roster CSV (header row first) into a [`RosterTable`].
///
/// Every cell is read as text and empty cells become nulls. Headers are
/// trimmed and blank ones get positional names. A file with a header but
/// no data rows is rejected, as are headers that collide once trimmed.
pub fn read_roster_table(path: &Path) -> Result<RosterTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    let table = RosterTable::from_frame(df)?;
    debug!(columns = ?table.column_names(), "roster headers");
    info!(
        path = %path.display(),
        records = table.height(),
        columns = table.width(),
        "loaded roster table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_size_limit_is_enforced() {
        let file = create_temp_csv(b"City\nNYC\n");
        let result = check_file_size_with_limit(file.path(), 4);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
    }

    #[test]
    fn test_utf16_is_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'C', 0x00]);
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = read_roster_table(Path::new("/nonexistent/roster.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let file = create_temp_csv(b"Name,City\n");
        let result = read_roster_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::EmptyDataFrame { .. } | IngestError::CsvParse { .. })
        ));
    }
}
