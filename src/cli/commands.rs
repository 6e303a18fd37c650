use clap::Parser;
use std::path::PathBuf;

/// Command line surface of the ifstat grapher
/// A single mode of operation: read one capture, emit one chart per interface
#[derive(Parser, Debug)]
#[command(name = "ifg")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Graph bandwidth reports captured with ifstat")]
#[command(long_about = "Reads a capture produced by `ifstat -t`, rebuilds the per-interface \
bandwidth series, and renders one chart per interface with an EMA trend line and the all-time \
in/out averages. Charts can also be exported as JSON or CSV data.\n\n\
Note: ifstat must be run with -t so every data row carries a timestamp.\n\n\
Examples:\n  \
ifg capture.log                       # One PNG per interface\n  \
ifg capture.log --ema 120             # Slower-moving trend line\n  \
ifg capture.log --log                 # Logarithmic y axis\n  \
ifg capture.log -f csv -o out/        # Per-interface CSV instead of charts")]
pub struct Cli {
    /// Output file from `ifstat -t`
    pub input: Option<PathBuf>,

    /// Window of the exponential moving average used to smooth the inbound
    /// bandwidth
    #[arg(
        short = 'a',
        long = "ema",
        default_value_t = 60,
        help = "EMA window used to smooth the bandwidth"
    )]
    pub ema: usize,

    /// Raise the log filter to debug for per-stage diagnostics
    #[arg(short, long, help = "Increase output verbosity")]
    pub verbose: bool,

    /// Plot on a logarithmic y axis instead of linear-with-zero-floor
    #[arg(short = 'l', long = "log", help = "Plot will be in logarithmic scale")]
    pub log: bool,

    /// Directory the rendered files are written to
    #[arg(short, long, default_value = ".", help = "Output directory")]
    pub output: PathBuf,

    /// Output format for each interface
    #[arg(
        short,
        long,
        default_value = "png",
        help = "Output format: png, svg, json, csv"
    )]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ifg", "capture.log"]);

        assert_eq!(cli.input, Some(PathBuf::from("capture.log")));
        assert_eq!(cli.ema, 60);
        assert!(!cli.verbose);
        assert!(!cli.log);
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.format, "png");
    }

    #[test]
    fn test_input_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["ifg"]);

        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["ifg", "-a", "120", "-l", "-v", "-f", "svg", "capture.log"]);

        assert_eq!(cli.ema, 120);
        assert!(cli.log);
        assert!(cli.verbose);
        assert_eq!(cli.format, "svg");
    }
}
