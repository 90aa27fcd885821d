//! Roster data ingestion.
//!
//! Loads a roster file once into a read-only [`RosterTable`] backed by a
//! Polars `DataFrame`. Header text is trimmed before anything downstream
//! sees it, since roster exports are not consistent about whitespace.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::read_roster_table;
//!
//! let table = read_roster_table(Path::new("data/photographers.csv"))?;
//! println!("{} records, columns: {:?}", table.height(), table.column_names());
//! ```

mod csv;
mod error;
mod table;
mod value;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{MAX_CSV_FILE_SIZE, check_file_size, normalize_header, read_roster_table};

// === Table ===
pub use table::RosterTable;

// === Value Rendering ===
pub use value::{any_to_key, format_numeric};
