//! Mapping of data rows through the inferred schema
//!
//! Second phase of the two-phase parse: every non-header row is read through
//! the [`ReportSchema`] column layout and lands as one [`Report`] per
//! interface, in file order.

use std::collections::HashMap;

use crate::models::Report;
use crate::parser::errors::ParseError;
use crate::parser::grid;
use crate::parser::schema::ReportSchema;

/// Per-interface report sequences parsed from one capture.
///
/// Iteration order is the header order of the interfaces; the backing map
/// never defines ordering on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    unit: String,
    interfaces: Vec<String>,
    sequences: HashMap<String, Vec<Report>>,
}

impl ReportTable {
    /// Parses a full capture: tokenize, infer the schema, map the data rows.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let grid = grid::tokenize(input);
        let schema = ReportSchema::infer(&grid)?;
        Self::build(&schema, &grid)
    }

    /// Builds the table from an already-inferred schema.
    ///
    /// Every row that is not one of the two header lines is a data row. A
    /// data row shorter than the schema's column count is a fatal error,
    /// reported with its 1-based line number.
    pub fn build(schema: &ReportSchema, grid: &[Vec<String>]) -> Result<Self, ParseError> {
        let mut per_interface: Vec<Vec<Report>> = vec![Vec::new(); schema.interfaces.len()];

        for (line_index, row) in grid.iter().enumerate() {
            if ReportSchema::is_header(row) {
                continue;
            }
            if row.len() < schema.columns_required() {
                return Err(ParseError::MissingColumns {
                    line: line_index + 1,
                    found: row.len(),
                    expected: schema.columns_required(),
                    interfaces: schema.interfaces.len(),
                });
            }
            let timestamp = &row[0];
            for (i, name) in schema.interfaces.iter().enumerate() {
                per_interface[i].push(Report::new(
                    timestamp,
                    name,
                    &row[i * 2 + 1],
                    &row[i * 2 + 2],
                    &schema.unit,
                ));
            }
        }

        let sequences = schema
            .interfaces
            .iter()
            .cloned()
            .zip(per_interface)
            .collect();

        Ok(Self {
            unit: schema.unit.clone(),
            interfaces: schema.interfaces.clone(),
            sequences,
        })
    }

    /// Measurement unit shared by the whole capture
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Interface names in header order
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// One interface's reports, in file order
    pub fn reports(&self, interface: &str) -> Option<&[Report]> {
        self.sequences.get(interface).map(Vec::as_slice)
    }

    /// Iterates the sequences in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Report])> {
        self.interfaces.iter().filter_map(|name| {
            self.sequences
                .get(name)
                .map(|reports| (name.as_str(), reports.as_slice()))
        })
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}
