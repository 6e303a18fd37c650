//! Column layout inference from the two ifstat header lines
//!
//! The layout is not fixed: ifstat prints two columns per monitored interface
//! after the timestamp column, so the schema (unit + ordered interface list)
//! has to be recovered from the headers before any data row can be read.
//! Header lines are recognized by content, never by position in the file.

use crate::parser::errors::ParseError;

/// First token of the time/unit header line
pub const UNIT_HEADER_TAG: &str = "HH:MM:SS";
/// Second token of the interface header line
pub const INTERFACE_HEADER_TAG: &str = "Time";

/// Inferred column layout of one capture: the measurement unit and the
/// interfaces in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSchema {
    pub unit: String,
    pub interfaces: Vec<String>,
}

impl ReportSchema {
    /// Scans the token grid for both header lines and builds the schema.
    pub fn infer(grid: &[Vec<String>]) -> Result<Self, ParseError> {
        Ok(Self {
            unit: Self::find_unit(grid)?,
            interfaces: Self::find_interfaces(grid)?,
        })
    }

    /// The unit is the second token of the line tagged `HH:MM:SS`.
    fn find_unit(grid: &[Vec<String>]) -> Result<String, ParseError> {
        for row in grid {
            if row.first().is_some_and(|token| token == UNIT_HEADER_TAG) {
                return row.get(1).cloned().ok_or(ParseError::MissingUnitLabel);
            }
        }
        Err(ParseError::MissingUnitHeader)
    }

    /// Interfaces are the tokens of the `Time` header line from index 2 up to,
    /// but excluding, the last token. The ifstat header carries a trailing
    /// token that is not an interface name; the exclusion keeps the name list
    /// aligned with the two-columns-per-interface data layout.
    fn find_interfaces(grid: &[Vec<String>]) -> Result<Vec<String>, ParseError> {
        for row in grid {
            if row.get(1).is_some_and(|token| token == INTERFACE_HEADER_TAG) {
                let names = if row.len() > 3 {
                    row[2..row.len() - 1].to_vec()
                } else {
                    Vec::new()
                };
                return Ok(names);
            }
        }
        Err(ParseError::MissingInterfaceHeader)
    }

    /// True for either header line. Rows where the checked token does not
    /// exist are not headers.
    pub fn is_header(row: &[String]) -> bool {
        row.first().is_some_and(|token| token == UNIT_HEADER_TAG)
            || row.get(1).is_some_and(|token| token == INTERFACE_HEADER_TAG)
    }

    /// Minimum token count of a valid data line: the timestamp plus two
    /// bandwidth columns per interface.
    pub fn columns_required(&self) -> usize {
        self.interfaces.len() * 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Vec<Vec<String>> {
        crate::parser::grid::tokenize(&lines.join("\n"))
    }

    #[test]
    fn test_infers_unit_and_interfaces() {
        // Realistic ifstat headers: leading padding puts the Time tag at
        // token 1, trailing padding provides the excluded final token
        let grid = grid(&[
            "       Time           eth0                wlan0          ",
            "HH:MM:SS   Kbps in  Kbps out   Kbps in  Kbps out",
        ]);

        let schema = ReportSchema::infer(&grid).unwrap();
        assert_eq!(schema.unit, "Kbps");
        assert_eq!(schema.interfaces, vec!["eth0", "wlan0"]);
    }

    #[test]
    fn test_interface_list_excludes_trailing_token() {
        let grid = grid(&["pad Time eth0 wlan0 tun0 trailing"]);

        let interfaces = ReportSchema::find_interfaces(&grid).unwrap();
        assert_eq!(interfaces, vec!["eth0", "wlan0", "tun0"]);
    }

    #[test]
    fn test_interface_count_is_header_tokens_minus_three() {
        let grid = grid(&["pad Time eth0 wlan0 trailing"]);

        let interfaces = ReportSchema::find_interfaces(&grid).unwrap();
        assert_eq!(interfaces.len(), grid[0].len() - 3);
    }

    #[test]
    fn test_short_interface_header_yields_no_interfaces() {
        // Only pad + tag + one trailing token: nothing between index 2 and the
        // final token
        let grid = grid(&["pad Time trailing"]);

        let interfaces = ReportSchema::find_interfaces(&grid).unwrap();
        assert!(interfaces.is_empty());
    }

    #[test]
    fn test_missing_unit_header() {
        let grid = grid(&["pad Time eth0 trailing", "12:00:01 1 2"]);

        assert_eq!(
            ReportSchema::infer(&grid),
            Err(ParseError::MissingUnitHeader)
        );
    }

    #[test]
    fn test_missing_unit_label() {
        let grid = grid(&["HH:MM:SS", "pad Time eth0 trailing"]);

        assert_eq!(ReportSchema::infer(&grid), Err(ParseError::MissingUnitLabel));
    }

    #[test]
    fn test_missing_interface_header() {
        let grid = grid(&["HH:MM:SS Kbps", "12:00:01 1 2"]);

        assert_eq!(
            ReportSchema::infer(&grid),
            Err(ParseError::MissingInterfaceHeader)
        );
    }

    #[test]
    fn test_header_detection() {
        let rows = grid(&[
            "HH:MM:SS Kbps",
            "pad Time eth0 trailing",
            "12:00:01 1 2",
            "",
        ]);

        assert!(ReportSchema::is_header(&rows[0]));
        assert!(ReportSchema::is_header(&rows[1]));
        assert!(!ReportSchema::is_header(&rows[2]));
        assert!(!ReportSchema::is_header(&rows[3]));
    }

    #[test]
    fn test_columns_required() {
        let schema = ReportSchema {
            unit: "Kbps".to_string(),
            interfaces: vec!["eth0".to_string(), "wlan0".to_string()],
        };

        assert_eq!(schema.columns_required(), 5);
    }
}
