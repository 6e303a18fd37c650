//! Offline grapher for `ifstat -t` capture files.
//!
//! The pipeline is strictly linear: the capture text is tokenized into a raw
//! grid, the column layout (unit + interface list) is inferred from the two
//! header lines, every data row is mapped through that layout into
//! per-interface [`models::Report`] sequences, and each sequence is rendered
//! as a chart (or exported as JSON/CSV).

pub mod analyzers;
pub mod cli;
pub mod graphs;
pub mod models;
pub mod parser;
