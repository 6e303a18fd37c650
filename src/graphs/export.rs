use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::analyzers::trend;
use crate::graphs::GraphRenderer;
use crate::graphs::bandwidth_graphs::{BandwidthGraph, InterfaceSeries};

/// Output formats for a rendered interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Png,
    Svg,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => bail!("unsupported output format '{other}' (expected png, svg, json, csv)"),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub output_path: PathBuf,
}

/// Envelope written by the JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// When the export was produced, not when the capture was taken
    pub timestamp: DateTime<Utc>,
    pub interface: String,
    pub unit: String,
    pub summary: BandwidthSummary,
    pub time_series: Vec<BandwidthTimePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandwidthSummary {
    pub samples: usize,
    pub avg_inbound: f64,
    pub avg_outbound: f64,
    pub peak_inbound: f64,
    pub peak_outbound: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandwidthTimePoint {
    pub timestamp: String,
    pub inbound: f64,
    pub outbound: f64,
}

/// Routes one interface's graph to the configured output format
pub struct ExportManager {
    config: ExportConfig,
}

impl ExportManager {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn export(&self, graph: &BandwidthGraph) -> Result<()> {
        match self.config.format {
            ExportFormat::Png => graph.render(&self.config.output_path),
            ExportFormat::Svg => graph.render_svg(&self.config.output_path),
            ExportFormat::Json => self.export_json(&graph.series),
            ExportFormat::Csv => self.export_csv(&graph.series),
        }
    }

    fn export_json(&self, series: &InterfaceSeries) -> Result<()> {
        let data = Self::prepare_export(series);
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&self.config.output_path, json)
            .with_context(|| format!("failed to write {}", self.config.output_path.display()))?;
        Ok(())
    }

    fn export_csv(&self, series: &InterfaceSeries) -> Result<()> {
        fs::write(&self.config.output_path, Self::render_csv(series)?)
            .with_context(|| format!("failed to write {}", self.config.output_path.display()))?;
        Ok(())
    }

    fn render_csv(series: &InterfaceSeries) -> Result<String> {
        let mut csv = String::from("timestamp,in,out\n");
        for index in 0..series.len() {
            writeln!(
                csv,
                "{},{},{}",
                series.timestamps[index], series.inbound[index], series.outbound[index]
            )?;
        }
        Ok(csv)
    }

    fn prepare_export(series: &InterfaceSeries) -> ExportData {
        let summary = BandwidthSummary {
            samples: series.len(),
            avg_inbound: trend::mean(&series.inbound),
            avg_outbound: trend::mean(&series.outbound),
            peak_inbound: series.inbound.iter().copied().fold(0.0, f64::max),
            peak_outbound: series.outbound.iter().copied().fold(0.0, f64::max),
        };
        let time_series = (0..series.len())
            .map(|index| BandwidthTimePoint {
                timestamp: series.timestamps[index].clone(),
                inbound: series.inbound[index],
                outbound: series.outbound[index],
            })
            .collect();

        ExportData {
            timestamp: Utc::now(),
            interface: series.interface.clone(),
            unit: series.unit.clone(),
            summary,
            time_series,
        }
    }
}
