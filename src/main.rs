use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};

use ifstat_grapher::cli::Cli;
use ifstat_grapher::graphs::bandwidth_graphs::{BandwidthGraph, InterfaceSeries};
use ifstat_grapher::graphs::export::{ExportConfig, ExportFormat, ExportManager};
use ifstat_grapher::graphs::{GraphConfig, YScale};
use ifstat_grapher::parser::ReportTable;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let input = cli
        .input
        .context("no input file given (capture one with `ifstat -t`)")?;
    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read report file {}", input.display()))?;

    let table = ReportTable::parse(&raw)?;
    info!(
        "parsed {} interface(s) from {}: {}",
        table.len(),
        input.display(),
        table.interfaces().join(", ")
    );

    let format = ExportFormat::parse(&cli.format)?;
    let config = GraphConfig {
        ema_window: cli.ema,
        y_scale: if cli.log {
            YScale::Logarithmic
        } else {
            YScale::Linear
        },
        ..GraphConfig::default()
    };

    // Project every interface before writing anything: a capture that fails
    // anywhere aborts the whole run with no partial output
    let mut projected = Vec::with_capacity(table.len());
    for (interface, reports) in table.iter() {
        projected.push(InterfaceSeries::from_reports(interface, reports)?);
    }

    for series in projected {
        if series.is_empty() {
            warn!(
                "interface {}: capture has no data lines, skipping",
                series.interface
            );
            continue;
        }
        debug!("interface {}: {} samples", series.interface, series.len());

        let output_path = cli
            .output
            .join(format!("bandwidth_{}.{}", series.interface, format.extension()));
        let graph = BandwidthGraph::new(config.clone(), series);
        let exporter = ExportManager::new(ExportConfig {
            format,
            output_path: output_path.clone(),
        });
        exporter.export(&graph)?;
        info!("wrote {}", output_path.display());
    }

    Ok(())
}
