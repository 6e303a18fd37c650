//! Error types for capture parsing
//!
//! Every variant is fatal: a capture that cannot be parsed completely is not
//! rendered at all. Insufficient data for the trend line is deliberately not
//! represented here — that is a normal condition handled by the analyzers.

use thiserror::Error;

/// Errors raised while turning a capture file into per-interface sequences
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No line starting with the `HH:MM:SS` tag, so the unit is unknown
    #[error("no unit header found: expected a line starting with 'HH:MM:SS'")]
    MissingUnitHeader,

    /// The unit header exists but carries no unit label after the tag
    #[error("unit header has no unit label after 'HH:MM:SS'")]
    MissingUnitLabel,

    /// No line whose second token is `Time`, so the interface list is unknown
    #[error("no interface header found: expected a line whose second token is 'Time'")]
    MissingInterfaceHeader,

    /// A data line is too short for the interface count declared by the header
    #[error(
        "data line {line}: found {found} columns, need {expected} for {interfaces} interface(s)"
    )]
    MissingColumns {
        /// 1-based line number in the capture file
        line: usize,
        found: usize,
        expected: usize,
        interfaces: usize,
    },

    /// A bandwidth column did not parse as a number
    #[error("interface {interface}: sample {index} has non-numeric value '{value}'")]
    BadValue {
        interface: String,
        /// 0-based position in the interface's sequence
        index: usize,
        value: String,
    },
}
