//! CSV reading utilities.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{MAX_CSV_FILE_SIZE, check_file_size, read_roster_table};
