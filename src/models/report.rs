use serde::{Deserialize, Serialize};

/// One interface's bandwidth measurement at one sampled timestamp.
///
/// Every field is populated at construction; downstream code never sees a
/// half-built record. The numeric columns stay as the text ifstat printed —
/// they are only parsed to `f64` at the chart/export boundary, so a capture
/// round-trips without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Capture time exactly as written by ifstat (`HH:MM:SS`)
    pub timestamp: String,
    /// Name of the network interface (e.g., "eth0", "wlan0", "en0")
    pub interface: String,
    /// Inbound bandwidth column, numeric text
    pub inbound: String,
    /// Outbound bandwidth column, numeric text
    pub outbound: String,
    /// Measurement unit shared by the whole capture (e.g., "Kbps")
    pub unit: String,
}

impl Report {
    pub fn new(
        timestamp: &str,
        interface: &str,
        inbound: &str,
        outbound: &str,
        unit: &str,
    ) -> Self {
        Self {
            timestamp: timestamp.to_owned(),
            interface: interface.to_owned(),
            inbound: inbound.to_owned(),
            outbound: outbound.to_owned(),
            unit: unit.to_owned(),
        }
    }
}
