#![deny(unsafe_code)]

//! Column role resolution.
//!
//! Maps an arbitrary roster header set onto the fixed set of semantic
//! [`Role`](roster_model::Role)s. Resolution is a pure function of the
//! header names and is meant to run once per loaded table.

mod resolve;

pub use resolve::{header_matches, resolve_roles};
