//! Capture parsing
//!
//! Parsing is a two-phase pass over the capture text:
//!
//! - `grid`: whitespace normalization into a token grid
//! - `schema`: column layout inference from the two ifstat header lines
//! - `table`: mapping of data rows through the schema into per-interface
//!   report sequences
//! - `errors`: the fatal parse-error taxonomy

pub mod errors;
pub mod grid;
pub mod schema;
pub mod table;

pub use errors::ParseError;
pub use schema::ReportSchema;
pub use table::ReportTable;
