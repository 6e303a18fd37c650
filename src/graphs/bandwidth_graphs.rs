use anyhow::{Result, bail};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use crate::analyzers::trend;
use crate::graphs::{GraphConfig, GraphRenderer, YScale};
use crate::models::Report;
use crate::parser::ParseError;

/// Numeric projection of one interface's report sequence.
///
/// This is where the capture's numeric text becomes `f64`; a column that does
/// not parse is a fatal error naming the interface and the offending token.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceSeries {
    pub interface: String,
    pub unit: String,
    pub timestamps: Vec<String>,
    pub inbound: Vec<f64>,
    pub outbound: Vec<f64>,
}

impl InterfaceSeries {
    pub fn from_reports(interface: &str, reports: &[Report]) -> Result<Self, ParseError> {
        let mut timestamps = Vec::with_capacity(reports.len());
        let mut inbound = Vec::with_capacity(reports.len());
        let mut outbound = Vec::with_capacity(reports.len());

        for (index, report) in reports.iter().enumerate() {
            timestamps.push(report.timestamp.clone());
            inbound.push(parse_value(interface, index, &report.inbound)?);
            outbound.push(parse_value(interface, index, &report.outbound)?);
        }

        Ok(Self {
            interface: interface.to_owned(),
            unit: reports.first().map(|r| r.unit.clone()).unwrap_or_default(),
            timestamps,
            inbound,
            outbound,
        })
    }

    pub fn len(&self) -> usize {
        self.inbound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbound.is_empty()
    }
}

fn parse_value(interface: &str, index: usize, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::BadValue {
        interface: interface.to_owned(),
        index,
        value: value.to_owned(),
    })
}

/// One interface's chart: raw in/out series, the EMA trend of the inbound
/// series, and the two all-time averages as reference lines.
pub struct BandwidthGraph {
    pub config: GraphConfig,
    pub series: InterfaceSeries,
}

impl BandwidthGraph {
    pub fn new(config: GraphConfig, series: InterfaceSeries) -> Self {
        Self { config, series }
    }

    /// EMA of the inbound series. `None` when the sequence is too short for
    /// the configured window; the chart then simply has no trend line.
    pub fn trend(&self) -> Option<Vec<Option<f64>>> {
        trend::ema(&self.series.inbound, self.config.ema_window)
    }

    pub fn render_png(&self, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        self.draw(&root)
    }

    pub fn render_svg(&self, output_path: &Path) -> Result<()> {
        let root = SVGBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        self.draw(&root)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        if self.series.is_empty() {
            bail!("interface {}: no samples to draw", self.series.interface);
        }
        debug!(
            "rendering {} samples for interface {}",
            self.series.len(),
            self.series.interface
        );

        root.fill(&WHITE)?;

        let count = self.series.len();
        let title = format!("Bandwidth - {}", self.series.interface);
        let (lower, upper) = self.y_range();

        match self.config.y_scale {
            YScale::Linear => {
                let mut chart = ChartBuilder::on(root)
                    .caption(&title, ("sans-serif", 40).into_font())
                    .margin(10)
                    .x_label_area_size(40)
                    .y_label_area_size(60)
                    .build_cartesian_2d(0..count, lower..upper)?;

                chart
                    .configure_mesh()
                    .x_desc("time")
                    .y_desc(self.series.unit.as_str())
                    .x_label_formatter(&|index| self.timestamp_label(*index))
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(self.inbound_points(), &BLUE))?
                    .label("In bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

                chart
                    .draw_series(LineSeries::new(self.outbound_points(), &RED))?
                    .label("Out bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

                if let Some(points) = self.trend_points() {
                    chart
                        .draw_series(LineSeries::new(points, &MAGENTA))?
                        .label(format!(
                            "Bandwidth {} period moving average",
                            self.config.ema_window
                        ))
                        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], MAGENTA));
                }

                let avg_in = trend::mean(&self.series.inbound);
                chart
                    .draw_series(LineSeries::new(vec![(0, avg_in), (count, avg_in)], &GREEN))?
                    .label("Average in bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN));

                let avg_out = trend::mean(&self.series.outbound);
                chart
                    .draw_series(LineSeries::new(vec![(0, avg_out), (count, avg_out)], &BLACK))?
                    .label("Average out bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLACK));

                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;
            }
            YScale::Logarithmic => {
                let mut chart = ChartBuilder::on(root)
                    .caption(&title, ("sans-serif", 40).into_font())
                    .margin(10)
                    .x_label_area_size(40)
                    .y_label_area_size(60)
                    .build_cartesian_2d(0..count, (lower..upper).log_scale())?;

                chart
                    .configure_mesh()
                    .x_desc("time")
                    .y_desc(self.series.unit.as_str())
                    .x_label_formatter(&|index| self.timestamp_label(*index))
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(self.inbound_points(), &BLUE))?
                    .label("In bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

                chart
                    .draw_series(LineSeries::new(self.outbound_points(), &RED))?
                    .label("Out bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

                if let Some(points) = self.trend_points() {
                    chart
                        .draw_series(LineSeries::new(points, &MAGENTA))?
                        .label(format!(
                            "Bandwidth {} period moving average",
                            self.config.ema_window
                        ))
                        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], MAGENTA));
                }

                let avg_in = trend::mean(&self.series.inbound);
                chart
                    .draw_series(LineSeries::new(vec![(0, avg_in), (count, avg_in)], &GREEN))?
                    .label("Average in bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], GREEN));

                let avg_out = trend::mean(&self.series.outbound);
                chart
                    .draw_series(LineSeries::new(vec![(0, avg_out), (count, avg_out)], &BLACK))?
                    .label("Average out bandwidth")
                    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLACK));

                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;
            }
        }

        root.present()?;
        Ok(())
    }

    fn inbound_points(&self) -> Vec<(usize, f64)> {
        self.series.inbound.iter().copied().enumerate().collect()
    }

    fn outbound_points(&self) -> Vec<(usize, f64)> {
        self.series.outbound.iter().copied().enumerate().collect()
    }

    fn trend_points(&self) -> Option<Vec<(usize, f64)>> {
        self.trend().map(|smoothed| {
            smoothed
                .into_iter()
                .enumerate()
                .filter_map(|(index, value)| value.map(|v| (index, v)))
                .collect()
        })
    }

    /// Y span of everything drawn. Linear charts are pinned to a zero floor;
    /// log charts start at the smallest positive sample so zero-valued
    /// samples clip against the axis instead of breaking it.
    fn y_range(&self) -> (f64, f64) {
        let max = self
            .series
            .inbound
            .iter()
            .chain(self.series.outbound.iter())
            .copied()
            .fold(0.0_f64, f64::max);

        match self.config.y_scale {
            YScale::Linear => (0.0, if max > 0.0 { max * 1.1 } else { 1.0 }),
            YScale::Logarithmic => {
                let min_positive = self
                    .series
                    .inbound
                    .iter()
                    .chain(self.series.outbound.iter())
                    .copied()
                    .filter(|value| *value > 0.0)
                    .fold(f64::INFINITY, f64::min);
                let lower = if min_positive.is_finite() {
                    min_positive * 0.9
                } else {
                    0.1
                };
                let upper = if max > lower { max * 1.1 } else { lower * 10.0 };
                (lower, upper)
            }
        }
    }

    fn timestamp_label(&self, index: usize) -> String {
        self.series
            .timestamps
            .get(index)
            .cloned()
            .unwrap_or_default()
    }
}

impl GraphRenderer for BandwidthGraph {
    fn render(&self, output_path: &Path) -> Result<()> {
        self.render_png(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports(values: &[(f64, f64)]) -> Vec<Report> {
        values
            .iter()
            .enumerate()
            .map(|(i, (inbound, outbound))| {
                Report::new(
                    &format!("12:00:{i:02}"),
                    "eth0",
                    &inbound.to_string(),
                    &outbound.to_string(),
                    "Kbps",
                )
            })
            .collect()
    }

    fn create_graph(values: &[(f64, f64)], config: GraphConfig) -> BandwidthGraph {
        let series = InterfaceSeries::from_reports("eth0", &reports(values)).unwrap();
        BandwidthGraph::new(config, series)
    }

    #[test]
    fn test_series_projection() {
        let series =
            InterfaceSeries::from_reports("eth0", &reports(&[(104.2, 48.9), (98.7, 51.2)]))
                .unwrap();

        assert_eq!(series.interface, "eth0");
        assert_eq!(series.unit, "Kbps");
        assert_eq!(series.inbound, vec![104.2, 98.7]);
        assert_eq!(series.outbound, vec![48.9, 51.2]);
        assert_eq!(series.timestamps, vec!["12:00:00", "12:00:01"]);
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let mut bad = reports(&[(104.2, 48.9)]);
        bad[0].outbound = "n/a".to_string();

        let err = InterfaceSeries::from_reports("eth0", &bad).unwrap_err();
        assert_eq!(
            err,
            ParseError::BadValue {
                interface: "eth0".to_string(),
                index: 0,
                value: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn test_trend_omitted_for_short_series() {
        let values: Vec<(f64, f64)> = (0..60).map(|i| (i as f64, 1.0)).collect();

        let graph = create_graph(&values, GraphConfig::default());
        assert!(graph.trend().is_none());
        assert!(graph.trend_points().is_none());
    }

    #[test]
    fn test_trend_present_for_long_series() {
        let values: Vec<(f64, f64)> = (0..62).map(|i| (i as f64, 1.0)).collect();

        let graph = create_graph(&values, GraphConfig::default());
        let points = graph.trend_points().unwrap();

        // Warm-up positions are skipped; the seed lands at index 60
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], (60, 60.0));
    }

    #[test]
    fn test_linear_range_is_zero_floored() {
        let graph = create_graph(&[(10.0, 4.0), (20.0, 6.0)], GraphConfig::default());

        let (lower, upper) = graph.y_range();
        assert_eq!(lower, 0.0);
        assert!(upper >= 20.0);
    }

    #[test]
    fn test_log_range_stays_positive_with_zero_samples() {
        let config = GraphConfig {
            y_scale: YScale::Logarithmic,
            ..GraphConfig::default()
        };
        let graph = create_graph(&[(0.0, 0.0), (12.5, 0.0), (50.0, 3.0)], config);

        let (lower, upper) = graph.y_range();
        assert!(lower > 0.0);
        assert!(upper > lower);
    }

    #[test]
    fn test_log_range_with_all_zero_samples() {
        let config = GraphConfig {
            y_scale: YScale::Logarithmic,
            ..GraphConfig::default()
        };
        let graph = create_graph(&[(0.0, 0.0), (0.0, 0.0)], config);

        let (lower, upper) = graph.y_range();
        assert!(lower > 0.0);
        assert!(upper > lower);
    }

    #[test]
    fn test_timestamp_labels() {
        let graph = create_graph(&[(1.0, 2.0), (3.0, 4.0)], GraphConfig::default());

        assert_eq!(graph.timestamp_label(1), "12:00:01");
        assert_eq!(graph.timestamp_label(99), "");
    }
}
